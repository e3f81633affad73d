//! Data models for the mod catalog.
//!
//! - [`ResoluteMod`], [`ModVersion`], [`ModArtifact`], [`ModAuthor`]: value objects built from
//!   backend payloads, with derived properties such as [`ResoluteMod::has_update`]
//! - [`wire`]: the payload shapes exchanged with the backend executor
//! - [`ClientSettings`]: settings loaded by [`ConfigManager`](crate::config::ConfigManager)
//!
//! # Architecture Note
//!
//! Mods are owned by [`CatalogStore`](crate::state::CatalogStore). Callers get clones, and the
//! only field that changes after construction is the installed version.

pub mod config;
pub mod mods;
pub mod wire;

pub use config::{ClientSettings, LogSettings};
pub use mods::{
    ModArtifact, ModAuthor, ModVersion, ResoluteMod, ResoluteModMap, UNRECOGNIZED_MOD_PREFIX,
    UNRECOGNIZED_VERSION, VersionStatus,
};
pub use wire::{LoadedMods, ModDependencyMap, RawArtifact, RawAuthor, RawMod, RawModMap, RawVersion};
