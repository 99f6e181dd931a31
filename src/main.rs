use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use repofetch::config::FetchConfig;
use repofetch::download::{AssetDownloader, DownloadStatus, HttpAssetFetcher};
use repofetch::http::outcome::ResponseOutcome;
use repofetch::http::request::{ReleaseRequest, RepositoryRequest};
use repofetch::model::{Release, Repository};
use repofetch::{pool, url};

#[derive(Parser)]
#[command(name = "repofetch")]
#[command(version, about = "Fetch GitHub repository and release metadata")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,
}

#[derive(Subcommand)]
enum Command {
    /// Show repository metadata
    Repo {
        /// Repository in owner/name form
        repo: String,
    },
    /// Show release metadata
    Release {
        /// Repository in owner/name form
        repo: String,
        /// Release tag; the latest release when omitted
        #[arg(long)]
        tag: Option<String>,
    },
    /// Download a release asset
    Download {
        /// Repository in owner/name form
        repo: String,
        /// Release tag; the latest release when omitted
        #[arg(long)]
        tag: Option<String>,
        /// Asset position in the release's asset list
        #[arg(long, default_value_t = 0)]
        index: usize,
        /// Destination directory
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = FetchConfig::default();
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    let timeout = Duration::from_secs(config.timeout_secs);

    pool::init(&config)?;
    let pool = pool::handle()?;

    let exit = match cli.command {
        Command::Repo { repo } => {
            let (owner, name) = split_repo(&repo)?;
            let outcome = pool.block_on(
                RepositoryRequest::repository(url::DEFAULT_BASE_URL, owner, name)
                    .with_timeout(timeout)
                    .execute(),
            );
            report_repository(&repo, outcome)
        }
        Command::Release { repo, tag } => {
            let (owner, name) = split_repo(&repo)?;
            let outcome = pool.block_on(release_request(owner, name, tag.as_deref(), timeout).execute());
            report_release(&repo, outcome)
        }
        Command::Download { repo, tag, index, dir } => {
            let (owner, name) = split_repo(&repo)?;
            let client = pool.client().clone();
            pool.block_on(async {
                let outcome = release_request(owner, name, tag.as_deref(), timeout)
                    .execute()
                    .await;
                let Some(release) = outcome.into_model() else {
                    eprintln!("{}: no downloadable release", repo);
                    return 1;
                };
                let downloader = AssetDownloader::new(HttpAssetFetcher::new(client));
                match downloader.download(&release, &dir, index).await {
                    DownloadStatus::Downloaded(bytes) => {
                        println!("downloaded asset {} of {} ({} bytes)", index, repo, bytes);
                        0
                    }
                    DownloadStatus::UnknownAsset => {
                        eprintln!("{}: release {} has no asset {}", repo, release.tag, index);
                        1
                    }
                    DownloadStatus::Failed => {
                        eprintln!("{}: asset {} download failed", repo, index);
                        1
                    }
                }
            })
        }
    };

    drop(pool);
    pool::shutdown()?;
    std::process::exit(exit);
}

fn release_request(
    owner: &str,
    name: &str,
    tag: Option<&str>,
    timeout: Duration,
) -> ReleaseRequest {
    let request = match tag {
        Some(tag) => ReleaseRequest::release_by_tag(url::DEFAULT_BASE_URL, owner, name, tag),
        None => ReleaseRequest::latest_release(url::DEFAULT_BASE_URL, owner, name),
    };
    request.with_timeout(timeout)
}

fn split_repo(repo: &str) -> anyhow::Result<(&str, &str)> {
    repo.split_once('/')
        .filter(|(owner, name)| !owner.is_empty() && !name.is_empty())
        .with_context(|| format!("expected owner/name, got {:?}", repo))
}

fn report_repository(repo: &str, outcome: ResponseOutcome<Repository>) -> i32 {
    match outcome {
        ResponseOutcome::Valid(repository) => {
            println!("{} ({})", repository.full_name(), repository.license);
            if !repository.description.is_empty() {
                println!("  {}", repository.description);
            }
            let properties = &repository.properties;
            println!("  stars: {}  forks: {}", properties.stars, properties.forks);
            if let Some(parent) = &properties.parent {
                println!("  forked from {}", parent);
            }
            if let Some(language) = &properties.language {
                println!("  language: {}", language);
            }
            if !properties.topics.is_empty() {
                println!("  topics: {}", properties.topics.join(", "));
            }
            0
        }
        ResponseOutcome::Pending => {
            eprintln!("{}: response not processed", repo);
            1
        }
        ResponseOutcome::Unauthorized => {
            eprintln!("{}: unauthorized", repo);
            1
        }
        ResponseOutcome::Moved => {
            eprintln!("{}: repository was renamed or transferred", repo);
            1
        }
        ResponseOutcome::Forbidden => {
            eprintln!("{}: access denied", repo);
            1
        }
        ResponseOutcome::Invalid => {
            eprintln!("{}: repository not found or request failed", repo);
            1
        }
    }
}

fn report_release(repo: &str, outcome: ResponseOutcome<Release>) -> i32 {
    match outcome {
        ResponseOutcome::Valid(release) => {
            println!("{} {} ({})", repo, release.tag, release.name);
            println!("  published by {}", release.author);
            for (index, asset) in release.assets.iter().enumerate() {
                println!("  [{}] {} {}", index, asset.file_name, asset.download_url);
            }
            0
        }
        ResponseOutcome::Pending => {
            eprintln!("{}: response not processed", repo);
            1
        }
        ResponseOutcome::Unauthorized => {
            eprintln!("{}: unauthorized, a release lookup may need credentials", repo);
            1
        }
        ResponseOutcome::Moved => {
            eprintln!("{}: repository was renamed or transferred", repo);
            1
        }
        ResponseOutcome::Forbidden => {
            eprintln!("{}: access denied", repo);
            1
        }
        ResponseOutcome::Invalid => {
            eprintln!("{}: release not found or request failed", repo);
            1
        }
    }
}
