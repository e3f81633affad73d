//! Wire-format payloads exchanged with the backend executor.
//!
//! These mirror the fields of [`super::ResoluteMod`] and friends, except that the installed
//! version travels as a semver string and versions are an unordered map.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Raw mods keyed by id, in the order the backend sent them
pub type RawModMap = IndexMap<String, RawMod>;

/// Map of mod IDs to semver ranges
pub type ModDependencyMap = IndexMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMod {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub authors: Vec<RawAuthor>,
    #[serde(rename = "sourceLocation", default, skip_serializing_if = "Option::is_none")]
    pub source_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub flags: Option<Vec<String>>,
    #[serde(default)]
    pub platforms: Option<Vec<String>>,
    #[serde(default)]
    pub versions: IndexMap<String, RawVersion>,
    #[serde(rename = "installedVersion", default)]
    pub installed_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAuthor {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub support: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawVersion {
    pub semver: String,
    #[serde(default)]
    pub artifacts: Vec<RawArtifact>,
    #[serde(default)]
    pub dependencies: ModDependencyMap,
    #[serde(default)]
    pub conflicts: ModDependencyMap,
    #[serde(rename = "releaseUrl", default)]
    pub release_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changelog: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawArtifact {
    pub url: String,
    pub sha256: String,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(rename = "installLocation", default)]
    pub install_location: Option<String>,
}

/// Response of `load_all_mods` / `load_installed_mods`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadedMods {
    pub mods: RawModMap,
    #[serde(default)]
    pub removed: Option<IndexSet<String>>,
}

impl From<RawModMap> for LoadedMods {
    /// Discovery responses carry no removals
    fn from(mods: RawModMap) -> Self {
        Self { mods, removed: None }
    }
}
