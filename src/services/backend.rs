use crate::models::{LoadedMods, RawMod, RawModMap, RawVersion};
use anyhow::Result;
use async_trait::async_trait;

/// The executor that performs the actual mod work: manifest fetching, downloads, checksum
/// verification, filesystem scans and deletion
///
/// The catalog treats every call as an opaque RPC. A returned error is a backend failure;
/// its contents are only used for logging and notification text.
#[async_trait]
pub trait ModBackend: Send + Sync {
    /// Fetch the complete remote + local catalog
    async fn load_all_mods(&self, bypass_cache: bool) -> Result<LoadedMods>;

    /// Fetch the mods that have a version installed
    async fn load_installed_mods(&self) -> Result<LoadedMods>;

    /// Scan the install location for mods that were installed outside the client
    async fn discover_installed_mods(&self) -> Result<RawModMap>;

    async fn install_mod_version(&self, rmod: &RawMod, version: &RawVersion) -> Result<()>;

    async fn uninstall_mod(&self, rmod: &RawMod) -> Result<()>;

    /// Install a different version in place of the installed one
    async fn replace_mod_version(&self, rmod: &RawMod, version: &RawVersion) -> Result<()>;
}
