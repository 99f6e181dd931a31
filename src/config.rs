use serde::Deserialize;

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Default number of worker threads for the shared executor pool
pub const DEFAULT_POOL_WORKERS: usize = 4;

/// Default user-agent sent with every request
pub const DEFAULT_USER_AGENT: &str = "repofetch";

/// Ambient configuration for the executor pool and its default transport
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct FetchConfig {
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Worker threads for the shared executor pool
    pub workers: usize,
    /// User-agent header value for API requests
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            workers: DEFAULT_POOL_WORKERS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
