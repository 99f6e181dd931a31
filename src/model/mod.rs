//! Immutable domain models produced by the decode pipeline
//!
//! - [`Repository`]: a repository with its embedded [`RepositoryProperties`]
//! - [`Release`]: a published release and its ordered [`ReleaseAsset`] list

mod release;
mod repository;

pub use release::{Release, ReleaseAsset};
pub use repository::{Repository, RepositoryProperties};
