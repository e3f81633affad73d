use super::wire::{ModDependencyMap, RawArtifact, RawAuthor, RawMod, RawVersion};
use crate::error::{CatalogError, Result};
use crate::version;
use indexmap::{IndexMap, IndexSet};
use semver::Version;
use std::cmp::Ordering;

/// Prefix the backend gives to mods it discovered on disk but couldn't match to the manifest
pub const UNRECOGNIZED_MOD_PREFIX: &str = "dev.gawdl3y.resolute.unrecognized";

/// Semver the backend assigns to artifacts it couldn't match to a known version
pub const UNRECOGNIZED_VERSION: &str = "0.0.0-unknown";

/// ResoluteMods mapped by their ID
pub type ResoluteModMap = IndexMap<String, ResoluteMod>;

/// A single mod with all information relevant to it
///
/// Built fresh from every backend payload. After construction only the installed
/// version changes, and only through the catalog store.
///
/// # Invariants
///
/// - `versions` is ordered newest first by semantic-version precedence
/// - `installed_version`, when set, is a key of `versions`
#[derive(Debug, Clone, PartialEq)]
pub struct ResoluteMod {
    id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Creators of the mod, the first one being the primary author
    pub authors: Vec<ModAuthor>,
    pub source_location: Option<String>,
    pub website: Option<String>,
    pub tags: IndexSet<String>,
    pub flags: IndexSet<String>,
    pub platforms: IndexSet<String>,
    versions: IndexMap<String, ModVersion>,
    installed_version: Option<String>,
    pub active: bool,
}

/// Installation state of a mod, for display and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionStatus {
    NotInstalled,
    /// Installed, but the backend couldn't match it to the manifest
    Unrecognized,
    UpdateAvailable,
    UpToDate,
}

impl ResoluteMod {
    /// Build a mod from its wire payload, ordering its versions newest first
    pub fn from_raw(raw: RawMod) -> Result<Self> {
        let mut versions: Vec<(String, ModVersion)> = raw
            .versions
            .into_iter()
            .map(|(key, version)| {
                let precedence = version::parse(&key)?;
                Ok((key.clone(), ModVersion::from_raw(version, &key, precedence)))
            })
            .collect::<Result<_>>()?;
        version::sort_descending(&mut versions)?;
        let versions: IndexMap<String, ModVersion> = versions.into_iter().collect();

        let installed_version = raw
            .installed_version
            .and_then(|installed| Self::resolve_installed_key(&raw.id, &versions, &installed));

        Ok(Self {
            active: raw.active.unwrap_or(installed_version.is_some()),
            id: raw.id,
            name: raw.name,
            description: raw.description,
            category: raw.category,
            authors: raw.authors.into_iter().map(ModAuthor::from).collect(),
            source_location: raw.source_location,
            website: raw.website,
            tags: raw.tags.unwrap_or_default().into_iter().collect(),
            flags: raw.flags.unwrap_or_default().into_iter().collect(),
            platforms: raw.platforms.unwrap_or_default().into_iter().collect(),
            versions,
            installed_version,
        })
    }

    /// Match the installed semver from a payload to a version key, by exact key first and then
    /// by precedence, so "1.0.0" and " 1.0.0" land on the same entry
    fn resolve_installed_key(
        id: &str,
        versions: &IndexMap<String, ModVersion>,
        installed: &str,
    ) -> Option<String> {
        if versions.contains_key(installed) {
            return Some(installed.to_string());
        }

        let found = version::parse(installed).ok().and_then(|wanted| {
            versions
                .iter()
                .find(|(_, v)| v.precedence == wanted)
                .map(|(key, _)| key.clone())
        });

        if found.is_none() {
            tracing::warn!(
                "Mod {} reports installed version {} which isn't one of its versions, treating it as not installed",
                id,
                installed
            );
        }
        found
    }

    /// Convert back into the wire payload the backend expects
    pub fn to_raw(&self) -> RawMod {
        RawMod {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            authors: self.authors.iter().map(RawAuthor::from).collect(),
            source_location: self.source_location.clone(),
            website: self.website.clone(),
            tags: Some(self.tags.iter().cloned().collect()),
            flags: Some(self.flags.iter().cloned().collect()),
            platforms: Some(self.platforms.iter().cloned().collect()),
            versions: self
                .versions
                .iter()
                .map(|(key, v)| (key.clone(), v.to_raw()))
                .collect(),
            installed_version: self.installed_version.clone(),
            active: Some(self.active),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Available versions, newest first
    pub fn versions(&self) -> &IndexMap<String, ModVersion> {
        &self.versions
    }

    pub fn version(&self, semver: &str) -> Option<&ModVersion> {
        self.versions.get(semver)
    }

    /// Semver key of the installed version
    pub fn installed_version(&self) -> Option<&str> {
        self.installed_version.as_deref()
    }

    pub fn installed(&self) -> Option<&ModVersion> {
        self.installed_version
            .as_deref()
            .and_then(|key| self.versions.get(key))
    }

    pub fn is_installed(&self) -> bool {
        self.installed_version.is_some()
    }

    /// Point the installed version at one of this mod's versions, or clear it
    pub(crate) fn set_installed_version(&mut self, semver: Option<&str>) -> Result<()> {
        match semver {
            Some(key) if !self.versions.contains_key(key) => Err(CatalogError::VersionNotFound {
                mod_id: self.id.clone(),
                version: key.to_string(),
            }),
            _ => {
                self.installed_version = semver.map(str::to_string);
                Ok(())
            }
        }
    }

    pub fn latest_version(&self) -> Option<&ModVersion> {
        self.versions.values().next()
    }

    /// Whether the installed version is older than the latest version
    pub fn has_update(&self) -> bool {
        match (self.installed(), self.latest_version()) {
            (Some(installed), Some(latest)) => {
                installed.precedence.cmp_precedence(&latest.precedence) == Ordering::Less
            }
            _ => false,
        }
    }

    /// Rank for list sorting: 0 for update available, 1 for installed, 2 for not installed
    pub fn sortable_version_status(&self) -> u8 {
        if self.has_update() {
            0
        } else if self.is_installed() {
            1
        } else {
            2
        }
    }

    pub fn version_status(&self) -> VersionStatus {
        if !self.is_installed() {
            VersionStatus::NotInstalled
        } else if self.is_unrecognized() {
            VersionStatus::Unrecognized
        } else if self.has_update() {
            VersionStatus::UpdateAvailable
        } else {
            VersionStatus::UpToDate
        }
    }

    pub fn is_unrecognized(&self) -> bool {
        self.id.starts_with(UNRECOGNIZED_MOD_PREFIX)
    }

    pub fn is_deprecated(&self) -> bool {
        self.flags.contains("deprecated")
    }

    pub fn primary_author(&self) -> Option<&ModAuthor> {
        self.authors.first()
    }
}

impl TryFrom<RawMod> for ResoluteMod {
    type Error = CatalogError;

    fn try_from(raw: RawMod) -> Result<Self> {
        Self::from_raw(raw)
    }
}

/// Contributor to a mod
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModAuthor {
    pub name: String,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub support: Option<String>,
}

impl From<RawAuthor> for ModAuthor {
    fn from(raw: RawAuthor) -> Self {
        Self {
            name: raw.name,
            url: raw.url,
            icon: raw.icon,
            support: raw.support,
        }
    }
}

impl From<&ModAuthor> for RawAuthor {
    fn from(author: &ModAuthor) -> Self {
        Self {
            name: author.name.clone(),
            url: author.url.clone(),
            icon: author.icon.clone(),
            support: author.support.clone(),
        }
    }
}

/// Released version of a mod
#[derive(Debug, Clone, PartialEq)]
pub struct ModVersion {
    pub semver: String,
    pub artifacts: Vec<ModArtifact>,
    /// Required mods: mod id -> acceptable semver range
    pub dependencies: ModDependencyMap,
    /// Conflicting mods: mod id -> conflicting semver range
    pub conflicts: ModDependencyMap,
    pub release_url: Option<String>,
    pub changelog: Option<String>,
    precedence: Version,
}

impl ModVersion {
    fn from_raw(raw: RawVersion, key: &str, precedence: Version) -> Self {
        Self {
            semver: if raw.semver.is_empty() {
                key.to_string()
            } else {
                raw.semver
            },
            artifacts: raw.artifacts.into_iter().map(ModArtifact::from).collect(),
            dependencies: raw.dependencies,
            conflicts: raw.conflicts,
            release_url: raw.release_url,
            changelog: raw.changelog,
            precedence,
        }
    }

    pub fn to_raw(&self) -> RawVersion {
        RawVersion {
            semver: self.semver.clone(),
            artifacts: self.artifacts.iter().map(RawArtifact::from).collect(),
            dependencies: self.dependencies.clone(),
            conflicts: self.conflicts.clone(),
            release_url: self.release_url.clone(),
            changelog: self.changelog.clone(),
        }
    }

    /// Parsed version this entry is ordered by
    pub fn precedence(&self) -> &Version {
        &self.precedence
    }

    pub fn is_unrecognized(&self) -> bool {
        self.semver == UNRECOGNIZED_VERSION
    }

    /// Text label for the version
    pub fn label(&self) -> &str {
        if self.is_unrecognized() {
            "Unknown"
        } else {
            &self.semver
        }
    }
}

/// File to install for a mod version
///
/// Everything here is opaque to the catalog; the backend downloads and verifies it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModArtifact {
    pub url: String,
    pub sha256: String,
    pub filename: Option<String>,
    pub install_location: Option<String>,
}

impl ModArtifact {
    /// Filename taken from the last path segment of the URL
    pub fn inferred_filename(&self) -> &str {
        let without_scheme = self
            .url
            .split_once("://")
            .map_or(self.url.as_str(), |(_, rest)| rest);
        let path = without_scheme
            .split(['?', '#'])
            .next()
            .unwrap_or(without_scheme);

        match path.find('/') {
            Some(start) => path[start..].rsplit('/').next().unwrap_or_default(),
            None => "",
        }
    }

    /// Install location used when the artifact doesn't specify one
    pub fn inferred_install_location(category: &str) -> &'static str {
        if category == "Plugins" {
            "/Libraries"
        } else {
            "/rml_mods"
        }
    }

    pub fn effective_filename(&self) -> &str {
        self.filename
            .as_deref()
            .unwrap_or_else(|| self.inferred_filename())
    }

    pub fn effective_install_location<'a>(&'a self, category: &str) -> &'a str {
        self.install_location
            .as_deref()
            .unwrap_or_else(|| Self::inferred_install_location(category))
    }
}

impl From<RawArtifact> for ModArtifact {
    fn from(raw: RawArtifact) -> Self {
        Self {
            url: raw.url,
            sha256: raw.sha256,
            filename: raw.filename,
            install_location: raw.install_location,
        }
    }
}

impl From<&ModArtifact> for RawArtifact {
    fn from(artifact: &ModArtifact) -> Self {
        Self {
            url: artifact.url.clone(),
            sha256: artifact.sha256.clone(),
            filename: artifact.filename.clone(),
            install_location: artifact.install_location.clone(),
        }
    }
}
