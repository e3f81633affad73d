//! Semantic version comparison.
//!
//! Every ordering decision in the catalog goes through here: sorting a mod's versions at
//! construction, update detection, and choosing "update" vs. "downgrade" wording.
//! Precedence follows the `semver` crate (numeric major.minor.patch, then pre-release,
//! with a pre-release ordered before its release). Build metadata never affects precedence.

use crate::error::{CatalogError, Result};
use semver::Version;
use std::cmp::Ordering;

/// Parse a version string, mapping failures to [`CatalogError::InvalidVersionFormat`]
pub fn parse(version: &str) -> Result<Version> {
    Version::parse(version.trim()).map_err(|source| CatalogError::InvalidVersionFormat {
        version: version.to_string(),
        source,
    })
}

/// Compare two version strings by semantic-version precedence
pub fn compare(a: &str, b: &str) -> Result<Ordering> {
    Ok(parse(a)?.cmp_precedence(&parse(b)?))
}

/// Whether `a` is strictly older than `b`
pub fn is_less(a: &str, b: &str) -> Result<bool> {
    Ok(compare(a, b)? == Ordering::Less)
}

/// Sort version strings newest first
///
/// All strings are parsed up front, so a malformed entry fails the whole sort
/// instead of leaving a partially ordered list behind.
pub fn sort_descending<T>(items: &mut Vec<(String, T)>) -> Result<()> {
    let mut keyed = items
        .drain(..)
        .map(|(key, item)| Ok((parse(&key)?, key, item)))
        .collect::<Result<Vec<_>>>()?;

    // Equal precedence falls back to the full ordering (build metadata) to stay deterministic
    keyed.sort_by(|a, b| b.0.cmp_precedence(&a.0).then_with(|| b.0.cmp(&a.0)));
    items.extend(keyed.into_iter().map(|(_, key, item)| (key, item)));
    Ok(())
}
