//! GitHub API endpoint construction

/// Base URL of the public GitHub API
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Endpoint for a repository lookup.
pub fn repository(base_url: &str, owner: &str, repo: &str) -> String {
    format!("{}/repos/{}/{}", base_url, owner, repo)
}

/// Endpoint for a repository's latest published release.
pub fn latest_release(base_url: &str, owner: &str, repo: &str) -> String {
    format!("{}/repos/{}/{}/releases/latest", base_url, owner, repo)
}

/// Endpoint for the release published under the given tag.
pub fn release_by_tag(base_url: &str, owner: &str, repo: &str, tag: &str) -> String {
    format!("{}/repos/{}/{}/releases/tags/{}", base_url, owner, repo, tag)
}
