//! Release domain model

use crate::error::VersionError;
use crate::version::{self, ComparisonOperator};

/// A published release of a repository, immutable once decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    /// Login of the user that published the release
    pub author: String,
    /// Tag the release was published under, e.g. `"v2.3.4"`
    pub tag: String,
    /// Release title
    pub name: String,
    /// Assets in the order the API lists them; index-addressable for downloads
    pub assets: Vec<ReleaseAsset>,
}

/// A single downloadable asset of a release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseAsset {
    pub file_name: String,
    pub download_url: String,
}

impl Release {
    /// Compares this release's tag against another tag string.
    ///
    /// The operator is applied with this release's version on the left,
    /// `other_tag`'s on the right.
    pub fn compare_version(
        &self,
        operator: ComparisonOperator,
        other_tag: &str,
    ) -> Result<bool, VersionError> {
        version::compare(operator, &self.tag, other_tag)
    }

    /// Compares this release's tag against an already-materialized version
    /// number.
    pub fn compare_version_number(
        &self,
        operator: ComparisonOperator,
        target: u64,
    ) -> Result<bool, VersionError> {
        Ok(operator.apply(version::tag_number(&self.tag)?, target))
    }
}
