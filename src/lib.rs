// Resolute Catalog - mod catalog state and operation orchestration
//
// This library owns the view of every known mod and its installation status, serializes
// install/uninstall/update and bulk loads against each other, and hands the actual work to
// a pluggable backend executor.

pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod state;
pub mod version;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use error::{CatalogError, Result};
pub use models::{ClientSettings, ModVersion, ResoluteMod, ResoluteModMap};
pub use services::{ModBackend, Notifier, TracingNotifier};
pub use state::{
    BulkOperation, CatalogEvent, CatalogState, CatalogStore, ModRef, OperationKind, VersionRef,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
