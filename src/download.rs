//! Release asset downloading
//!
//! The byte transfer itself sits behind the [`AssetFetcher`] seam; the
//! [`AssetDownloader`] only resolves an asset index to a `(file name, url)`
//! pair and maps the transfer result to a [`DownloadStatus`]. Concurrent
//! downloads into the same directory are allowed; file-name collisions are
//! the caller's concern.

use std::path::Path;

use async_trait::async_trait;
use futures::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::warn;

#[cfg(test)]
use mockall::automock;

use crate::error::DownloadError;
use crate::model::Release;

/// Transfers remote bytes to a local file.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AssetFetcher: Send + Sync {
    /// Streams `url` into `dest`, returning the number of bytes written.
    async fn fetch_to_file(&self, url: &str, dest: &Path) -> Result<u64, DownloadError>;
}

/// [`AssetFetcher`] backed by a reqwest client.
pub struct HttpAssetFetcher {
    client: reqwest::Client,
}

impl HttpAssetFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AssetFetcher for HttpAssetFetcher {
    async fn fetch_to_file(&self, url: &str, dest: &Path) -> Result<u64, DownloadError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::BadStatus(status.as_u16()));
        }

        let mut file = File::create(dest).await?;
        let mut stream = response.bytes_stream();
        let mut written: u64 = 0;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;
        Ok(written)
    }
}

/// Outcome of an indexed asset download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum DownloadStatus {
    /// Asset saved; carries the number of bytes transferred
    Downloaded(u64),
    /// No asset at the requested index, or the transfer produced no bytes
    UnknownAsset,
    /// The transfer or the file write failed
    Failed,
}

impl DownloadStatus {
    pub fn is_downloaded(&self) -> bool {
        matches!(self, Self::Downloaded(_))
    }
}

/// Downloads a release's assets by index into a destination directory.
pub struct AssetDownloader<F = HttpAssetFetcher> {
    fetcher: F,
}

impl<F: AssetFetcher> AssetDownloader<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Downloads the asset at `index` (0-based, payload order) from
    /// `release` into `directory` under the asset's published file name.
    pub async fn download(
        &self,
        release: &Release,
        directory: &Path,
        index: usize,
    ) -> DownloadStatus {
        let Some(asset) = release.assets.get(index) else {
            return DownloadStatus::UnknownAsset;
        };
        let dest = directory.join(&asset.file_name);
        match self.fetcher.fetch_to_file(&asset.download_url, &dest).await {
            Ok(0) => DownloadStatus::UnknownAsset,
            Ok(bytes) => DownloadStatus::Downloaded(bytes),
            Err(error) => {
                warn!("asset {} failed to download: {}", asset.file_name, error);
                DownloadStatus::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ReleaseAsset;
    use std::path::PathBuf;

    fn release_with_assets() -> Release {
        Release {
            author: "octocat".to_string(),
            tag: "v1.0.0".to_string(),
            name: "v1.0.0".to_string(),
            assets: vec![
                ReleaseAsset {
                    file_name: "tool.zip".to_string(),
                    download_url: "https://example.com/tool.zip".to_string(),
                },
                ReleaseAsset {
                    file_name: "tool.tar.gz".to_string(),
                    download_url: "https://example.com/tool.tar.gz".to_string(),
                },
            ],
        }
    }

    #[tokio::test]
    async fn download_resolves_the_indexed_asset() {
        let mut fetcher = MockAssetFetcher::new();
        fetcher
            .expect_fetch_to_file()
            .withf(|url, dest| {
                url == "https://example.com/tool.tar.gz"
                    && dest == PathBuf::from("/tmp/assets/tool.tar.gz")
            })
            .times(1)
            .returning(|_, _| Ok(42));

        let downloader = AssetDownloader::new(fetcher);
        let status = downloader
            .download(&release_with_assets(), Path::new("/tmp/assets"), 1)
            .await;

        assert_eq!(status, DownloadStatus::Downloaded(42));
        assert!(status.is_downloaded());
    }

    #[tokio::test]
    async fn download_reports_unknown_for_an_out_of_range_index() {
        let fetcher = MockAssetFetcher::new();

        let downloader = AssetDownloader::new(fetcher);
        let status = downloader
            .download(&release_with_assets(), Path::new("/tmp/assets"), 2)
            .await;

        assert_eq!(status, DownloadStatus::UnknownAsset);
    }

    #[tokio::test]
    async fn download_reports_unknown_for_an_empty_transfer() {
        let mut fetcher = MockAssetFetcher::new();
        fetcher.expect_fetch_to_file().returning(|_, _| Ok(0));

        let downloader = AssetDownloader::new(fetcher);
        let status = downloader
            .download(&release_with_assets(), Path::new("/tmp/assets"), 0)
            .await;

        assert_eq!(status, DownloadStatus::UnknownAsset);
    }

    #[tokio::test]
    async fn download_reports_failed_for_a_transfer_error() {
        let mut fetcher = MockAssetFetcher::new();
        fetcher
            .expect_fetch_to_file()
            .returning(|_, _| Err(DownloadError::BadStatus(500)));

        let downloader = AssetDownloader::new(fetcher);
        let status = downloader
            .download(&release_with_assets(), Path::new("/tmp/assets"), 0)
            .await;

        assert_eq!(status, DownloadStatus::Failed);
    }
}
