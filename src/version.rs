//! Release version comparison
//!
//! Tags reduce to a single base-10 integer: dots are stripped and an
//! optional leading `v`/`V` removed, so `"v2.10.1"` becomes `2101`. The
//! reduction concatenates segments instead of weighting them, which means
//! digit widths are significant: `"2.3"` (23) and `"2.30"` (230) compare as
//! different versions. Existing callers depend on this ordering; do not
//! switch to positional semantic comparison.

use crate::error::VersionError;

/// Relational operators usable for version comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    Equal,
    NotEqual,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl ComparisonOperator {
    pub(crate) fn apply(self, left: u64, right: u64) -> bool {
        match self {
            Self::Equal => left == right,
            Self::NotEqual => left != right,
            Self::Less => left < right,
            Self::LessOrEqual => left <= right,
            Self::Greater => left > right,
            Self::GreaterOrEqual => left >= right,
        }
    }
}

/// Reduces a release tag to its version number.
///
/// Fails when the remainder is not purely numeric, e.g. for pre-release
/// suffixes like `"v1.0.0-beta"`. Unparseable tags are reported, never
/// silently compared.
pub fn tag_number(tag: &str) -> Result<u64, VersionError> {
    let stripped: String = tag.chars().filter(|c| *c != '.').collect();
    let digits = stripped.strip_prefix(['v', 'V']).unwrap_or(&stripped);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VersionError::UnparseableTag(tag.to_string()));
    }
    digits
        .parse()
        .map_err(|_| VersionError::UnparseableTag(tag.to_string()))
}

/// Applies `operator` to the version numbers of two tags, left to right.
pub fn compare(
    operator: ComparisonOperator,
    left: &str,
    right: &str,
) -> Result<bool, VersionError> {
    Ok(operator.apply(tag_number(left)?, tag_number(right)?))
}
