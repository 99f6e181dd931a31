use thiserror::Error;

/// Failure raised while issuing a request, before any response exists.
///
/// Never escapes the request executor: it collapses to an invalid outcome
/// at the classification boundary and is only logged there.
#[derive(Debug, Error)]
pub enum TransportFailure {
    #[error("malformed request uri: {0}")]
    InvalidUri(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("no transport client available: {0}")]
    ClientUnavailable(#[from] PoolError),
}

/// Failure raised while decoding a response body into a domain model.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The payload carried the API's `message` field, signaling the
    /// resource does not exist.
    #[error("resource does not exist")]
    NotFound,

    /// A required field was absent or of the wrong JSON type.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

/// Misuse of the shared executor pool's lifecycle.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoolError {
    #[error("the executor pool has not been initialized")]
    NotInitialized,

    #[error("the executor pool is already initialized")]
    AlreadyInitialized,

    #[error("failed to build the executor pool: {0}")]
    Build(String),
}

/// A release tag that does not reduce to a version number.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("tag {0:?} does not reduce to a version number")]
    UnparseableTag(String),
}

/// Failure raised while transferring an asset to disk.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("download request answered with status {0}")]
    BadStatus(u16),
}
