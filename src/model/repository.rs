//! Repository domain model

/// A fetched GitHub repository, immutable once decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// Login of the owning user or organization
    pub owner: String,
    pub name: String,
    /// Repository description, possibly empty
    pub description: String,
    /// License name; `"unknown"` when the payload carried a null license
    pub license: String,
    pub properties: RepositoryProperties,
}

impl Repository {
    /// Returns the repository's `owner/name` identifier.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// Value object carrying a repository's attributes, owned by [`Repository`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryProperties {
    pub forked: bool,
    /// Owner login of the parent repository; `Some` exactly when `forked`
    pub parent: Option<String>,
    pub allow_forking: bool,
    pub public: bool,
    pub archived: bool,
    pub disabled: bool,
    pub stars: u32,
    pub forks: u32,
    /// Primary language, absent for repositories without code
    pub language: Option<String>,
    /// Repository topics in the order the API lists them
    pub topics: Vec<String>,
}
