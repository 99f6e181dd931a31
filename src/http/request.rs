//! HTTP request execution against the GitHub API

use std::marker::PhantomData;
use std::time::Duration;

use tracing::{debug, warn};

use crate::codec::DecodableModel;
use crate::config::DEFAULT_TIMEOUT_SECS;
use crate::error::{PoolError, TransportFailure};
use crate::http::outcome::{RawResponse, ResponseOutcome};
use crate::model::{Release, Repository};
use crate::pool;
use crate::url;

/// A single GET request against the GitHub API, typed by the model its
/// response body decodes into.
///
/// Without an explicit client the shared pool's default transport is used,
/// which requires [`pool::init`] to have run.
pub struct GithubRequest<M> {
    url: String,
    timeout: Duration,
    client: Option<reqwest::Client>,
    _model: PhantomData<M>,
}

/// Request for a repository lookup.
pub type RepositoryRequest = GithubRequest<Repository>;

/// Request for a release lookup.
pub type ReleaseRequest = GithubRequest<Release>;

impl RepositoryRequest {
    /// Creates a repository-metadata request.
    pub fn repository(base_url: &str, owner: &str, repo: &str) -> Self {
        Self::at(url::repository(base_url, owner, repo))
    }
}

impl ReleaseRequest {
    /// Creates a request for the latest published release.
    pub fn latest_release(base_url: &str, owner: &str, repo: &str) -> Self {
        Self::at(url::latest_release(base_url, owner, repo))
    }

    /// Creates a request for the release published under `tag`.
    pub fn release_by_tag(base_url: &str, owner: &str, repo: &str, tag: &str) -> Self {
        Self::at(url::release_by_tag(base_url, owner, repo, tag))
    }
}

impl<M: DecodableModel> GithubRequest<M> {
    fn at(url: String) -> Self {
        Self {
            url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            client: None,
            _model: PhantomData,
        }
    }

    /// Overrides the default request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Uses the given client instead of the shared pool's default transport.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Executes the request and waits for its classified outcome.
    ///
    /// Transport failures are logged here and collapse to
    /// [`ResponseOutcome::Invalid`]; they never propagate to the caller.
    pub async fn execute(&self) -> ResponseOutcome<M> {
        let raw = match self.send().await {
            Ok(raw) => raw,
            Err(failure) => {
                warn!("request to {} failed: {}", self.url, failure);
                return ResponseOutcome::classify(None);
            }
        };
        match ResponseOutcome::classify(Some(&raw)) {
            ResponseOutcome::Pending => match M::decode(&raw.body) {
                Ok(model) => ResponseOutcome::Valid(model),
                Err(error) => {
                    debug!("response from {} did not decode: {}", self.url, error);
                    ResponseOutcome::Invalid
                }
            },
            outcome => outcome,
        }
    }

    async fn send(&self) -> Result<RawResponse, TransportFailure> {
        let uri = reqwest::Url::parse(&self.url)
            .map_err(|_| TransportFailure::InvalidUri(self.url.clone()))?;
        let client = match &self.client {
            Some(client) => client.clone(),
            None => pool::handle()?.client().clone(),
        };
        let response = client
            .get(uri)
            .header("Accept", "application/vnd.github+json")
            .timeout(self.timeout)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}

impl<M> GithubRequest<M>
where
    M: DecodableModel + Send + Sync + 'static,
{
    /// Executes the request on the shared pool without waiting, invoking
    /// `callback` with the decoded model if and only if the outcome is
    /// valid.
    ///
    /// Fails fast when the pool has not been initialized.
    pub fn dispatch<F>(
        self,
        callback: F,
    ) -> Result<tokio::task::JoinHandle<ResponseOutcome<M>>, PoolError>
    where
        F: FnOnce(&M) + Send + 'static,
    {
        let pool = pool::handle()?;
        Ok(pool.spawn(async move {
            let outcome = self.execute().await;
            if let ResponseOutcome::Valid(model) = &outcome {
                callback(model);
            }
            outcome
        }))
    }
}
