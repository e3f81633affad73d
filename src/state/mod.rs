// Catalog state management
//
// This module provides the CatalogStore, the sole owner of the mod catalog. It serializes
// operations through per-mod slots and bulk flags, drives the backend executor, applies
// results, and emits change events for frontends.

mod gates;
pub mod operations;

pub use operations::{OperationKind, OperationTracker};

use crate::error::{CatalogError, Result};
use crate::metrics::Metrics;
use crate::models::{
    ClientSettings, LoadedMods, ModVersion, RawMod, RawVersion, ResoluteMod, ResoluteModMap,
};
use crate::services::{ModBackend, Notifier};
use gates::{BulkGuard, OperationGuard};
use indexmap::IndexSet;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Instant;
use tokio::sync::broadcast;

/// Default buffer size of the event channel
pub const DEFAULT_EVENT_CAPACITY: usize = 100;

/// Change events emitted when the catalog is modified
///
/// Frontends subscribe to these instead of polling. Reads after receiving an event
/// always observe the change it describes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogEvent {
    /// A load, load-installed or discover result was merged into the catalog
    CatalogReplaced { count: usize },

    /// A mod's installed version changed
    ModUpdated { mod_id: String },

    /// A mod's operation slot was taken (`Some`) or released (`None`)
    OperationChanged {
        mod_id: String,
        operation: Option<OperationKind>,
    },

    BulkOperationChanged {
        operation: BulkOperation,
        running: bool,
    },
}

/// Catalog-wide operations, each serialized only against itself
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BulkOperation {
    Load,
    LoadInstalled,
    Discover,
}

impl BulkOperation {
    fn is_running(self, state: &CatalogState) -> bool {
        match self {
            Self::Load => state.loading,
            Self::LoadInstalled => state.loading_installed,
            Self::Discover => state.discovering,
        }
    }

    fn set_running(self, state: &mut CatalogState, running: bool) {
        match self {
            Self::Load => state.loading = running,
            Self::LoadInstalled => state.loading_installed = running,
            Self::Discover => state.discovering = running,
        }
    }

    fn mark_completed(self, state: &mut CatalogState) {
        match self {
            Self::Load => state.has_loaded = true,
            Self::LoadInstalled => state.has_loaded_installed = true,
            Self::Discover => {}
        }
    }

    fn error_title(self) -> &'static str {
        match self {
            Self::Load => "Error loading mods",
            Self::LoadInstalled => "Error loading installed mods",
            Self::Discover => "Error discovering mods",
        }
    }
}

impl fmt::Display for BulkOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Load => "loading mods",
            Self::LoadInstalled => "loading installed mods",
            Self::Discover => "discovering installed mods",
        })
    }
}

/// Everything the catalog store owns
///
/// Handed out by reference through [`CatalogStore::read`] or cloned through
/// [`CatalogStore::snapshot`]; only the store mutates it.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub mods: ResoluteModMap,
    pub operations: OperationTracker,
    pub loading: bool,
    pub loading_installed: bool,
    pub discovering: bool,
    /// Set by the first successful full load, never cleared
    pub has_loaded: bool,
    /// Set by the first successful installed-mods load, never cleared
    pub has_loaded_installed: bool,
}

impl CatalogState {
    /// Merge a batch into the catalog
    ///
    /// Removals are applied to the prior catalog first, then every batch entry replaces
    /// (or adds) its mod wholesale. An id both removed and present in the batch ends up
    /// present. Mods mentioned in neither are left alone.
    pub fn reconcile(&mut self, batch: &ResoluteModMap, removed: Option<&IndexSet<String>>) {
        for id in removed.into_iter().flatten() {
            if self.mods.shift_remove(id).is_some() {
                tracing::debug!("Removed mod {} from catalog", id);
            }
        }

        for (id, rmod) in batch {
            self.mods.insert(id.clone(), rmod.clone());
        }
    }
}

/// Mod to operate on: by id, or by a (possibly stale) copy of the mod
#[derive(Clone, Copy, Debug)]
pub enum ModRef<'a> {
    ById(&'a str),
    ByValue(&'a ResoluteMod),
}

impl<'a> ModRef<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            Self::ById(id) => id,
            Self::ByValue(rmod) => rmod.id(),
        }
    }
}

impl<'a> From<&'a str> for ModRef<'a> {
    fn from(id: &'a str) -> Self {
        Self::ById(id)
    }
}

impl<'a> From<&'a String> for ModRef<'a> {
    fn from(id: &'a String) -> Self {
        Self::ById(id)
    }
}

impl<'a> From<&'a ResoluteMod> for ModRef<'a> {
    fn from(rmod: &'a ResoluteMod) -> Self {
        Self::ByValue(rmod)
    }
}

/// Version to install or update to
#[derive(Clone, Copy, Debug, Default)]
pub enum VersionRef<'a> {
    /// The newest available version
    #[default]
    Latest,
    BySemver(&'a str),
    ByValue(&'a ModVersion),
}

impl<'a> From<&'a str> for VersionRef<'a> {
    fn from(semver: &'a str) -> Self {
        Self::BySemver(semver)
    }
}

impl<'a> From<&'a String> for VersionRef<'a> {
    fn from(semver: &'a String) -> Self {
        Self::BySemver(semver)
    }
}

impl<'a> From<&'a ModVersion> for VersionRef<'a> {
    fn from(version: &'a ModVersion) -> Self {
        Self::ByValue(version)
    }
}

impl<'a, T: Into<VersionRef<'a>>> From<Option<T>> for VersionRef<'a> {
    fn from(version: Option<T>) -> Self {
        version.map_or(Self::Latest, Into::into)
    }
}

/// Whether a version change moves forward or backward
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeDirection {
    Update,
    Downgrade,
}

impl ChangeDirection {
    /// Downgrade when the target is strictly older than the installed version
    pub fn between(old: Option<&ModVersion>, new: &ModVersion) -> Self {
        match old {
            Some(old) if new.precedence().cmp_precedence(old.precedence()).is_lt() => {
                Self::Downgrade
            }
            _ => Self::Update,
        }
    }

    pub fn past(self) -> &'static str {
        match self {
            Self::Update => "updated",
            Self::Downgrade => "downgraded",
        }
    }

    pub fn progressive(self) -> &'static str {
        match self {
            Self::Update => "updating",
            Self::Downgrade => "downgrading",
        }
    }
}

/// A mod operation that has passed resolution and holds its slot
struct PreparedOperation {
    mod_id: String,
    name: String,
    raw_mod: RawMod,
    version: ModVersion,
    old_version: Option<ModVersion>,
}

impl PreparedOperation {
    fn raw_version(&self) -> RawVersion {
        self.version.to_raw()
    }
}

/// Owner of the mod catalog and orchestrator of every operation on it
///
/// - Holds the catalog, the per-mod [`OperationTracker`] and the bulk flags in one
///   `Arc<RwLock<CatalogState>>`
/// - Validates, resolves and takes gates in a single critical section, so two callers can
///   never both take the same slot
/// - Never holds the lock across a backend call
/// - Emits [`CatalogEvent`]s over a tokio broadcast channel
///
/// # Usage
///
/// ```ignore
/// let store = CatalogStore::new(Arc::new(backend), Arc::new(TracingNotifier));
/// store.load(false, true).await?;
/// store.install("com.example.mod", VersionRef::Latest).await?;
/// ```
pub struct CatalogStore {
    state: Arc<RwLock<CatalogState>>,
    events: broadcast::Sender<CatalogEvent>,
    backend: Arc<dyn ModBackend>,
    notifier: Arc<dyn Notifier>,
    metrics: Arc<Metrics>,
}

impl CatalogStore {
    pub fn new(backend: Arc<dyn ModBackend>, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_capacity(backend, notifier, DEFAULT_EVENT_CAPACITY)
    }

    pub fn with_settings(
        backend: Arc<dyn ModBackend>,
        notifier: Arc<dyn Notifier>,
        settings: &ClientSettings,
    ) -> Self {
        Self::with_capacity(backend, notifier, settings.event_capacity)
    }

    /// Create a store whose event channel buffers `capacity` events per subscriber
    pub fn with_capacity(
        backend: Arc<dyn ModBackend>,
        notifier: Arc<dyn Notifier>,
        capacity: usize,
    ) -> Self {
        let (events, _) = broadcast::channel(capacity.max(1));
        Self {
            state: Arc::new(RwLock::new(CatalogState::default())),
            events,
            backend,
            notifier,
            metrics: Arc::new(Metrics::new()),
        }
    }

    // Locking and events

    /// Execute a function with read access to the catalog state
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CatalogState) -> R,
    {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    fn write<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CatalogState) -> R,
    {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }

    fn emit(&self, event: CatalogEvent) {
        tracing::trace!("Catalog event: {:?}", event);
        // No subscribers is fine
        let delivered = self.events.send(event).is_ok();
        self.metrics.record_broadcast(delivered);
    }

    /// Subscribe to catalog change events
    pub fn subscribe(&self) -> broadcast::Receiver<CatalogEvent> {
        self.events.subscribe()
    }

    /// Clone of the entire state
    pub fn snapshot(&self) -> CatalogState {
        self.read(CatalogState::clone)
    }

    pub fn metrics(&self) -> Arc<Metrics> {
        Arc::clone(&self.metrics)
    }

    // Queries

    pub fn get<'a>(&self, target: impl Into<ModRef<'a>>) -> Option<ResoluteMod> {
        let id = target.into().id();
        self.read(|state| state.mods.get(id).cloned())
    }

    pub fn mods(&self) -> ResoluteModMap {
        self.read(|state| state.mods.clone())
    }

    pub fn len(&self) -> usize {
        self.read(|state| state.mods.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mods ordered for listing: updates first, then installed, then the rest, each by name
    pub fn mods_sorted(&self) -> Vec<ResoluteMod> {
        let mut mods: Vec<ResoluteMod> = self.read(|state| state.mods.values().cloned().collect());
        mods.sort_by_cached_key(|rmod| (rmod.sortable_version_status(), rmod.name.to_lowercase()));
        mods
    }

    pub fn installed_mods(&self) -> Vec<ResoluteMod> {
        self.filtered(ResoluteMod::is_installed)
    }

    pub fn updatable_mods(&self) -> Vec<ResoluteMod> {
        self.filtered(ResoluteMod::has_update)
    }

    fn filtered(&self, predicate: fn(&ResoluteMod) -> bool) -> Vec<ResoluteMod> {
        self.read(|state| {
            state
                .mods
                .values()
                .filter(|rmod| predicate(rmod))
                .cloned()
                .collect()
        })
    }

    pub fn has_loaded(&self) -> bool {
        self.read(|state| state.has_loaded)
    }

    pub fn has_loaded_installed(&self) -> bool {
        self.read(|state| state.has_loaded_installed)
    }

    pub fn is_loading(&self) -> bool {
        self.read(|state| state.loading)
    }

    pub fn is_loading_installed(&self) -> bool {
        self.read(|state| state.loading_installed)
    }

    pub fn is_discovering(&self) -> bool {
        self.read(|state| state.discovering)
    }

    pub fn operation_of<'a>(&self, target: impl Into<ModRef<'a>>) -> Option<OperationKind> {
        let id = target.into().id();
        self.read(|state| state.operations.kind_of(id))
    }

    pub fn is_busy<'a>(&self, target: impl Into<ModRef<'a>>) -> bool {
        self.operation_of(target).is_some()
    }

    pub fn is_installing<'a>(&self, target: impl Into<ModRef<'a>>) -> bool {
        self.operation_of(target) == Some(OperationKind::Install)
    }

    pub fn is_uninstalling<'a>(&self, target: impl Into<ModRef<'a>>) -> bool {
        self.operation_of(target) == Some(OperationKind::Uninstall)
    }

    pub fn is_updating<'a>(&self, target: impl Into<ModRef<'a>>) -> bool {
        self.operation_of(target) == Some(OperationKind::Update)
    }

    // Bulk operations

    /// Load the complete catalog from the backend
    ///
    /// On failure the catalog is left untouched; an error notification is shown when `alert`
    /// is set, and the error is returned either way.
    pub async fn load(&self, bypass_cache: bool, alert: bool) -> Result<ResoluteModMap> {
        let _guard = self.begin_bulk(BulkOperation::Load)?;
        if bypass_cache {
            tracing::info!("Forcing fresh manifest for catalog load");
        }
        let loaded = self.timed(self.backend.load_all_mods(bypass_cache)).await;
        self.apply_bulk(BulkOperation::Load, loaded, alert)
    }

    /// Load the mods that are installed; failures are always notified
    pub async fn load_installed(&self) -> Result<ResoluteModMap> {
        let _guard = self.begin_bulk(BulkOperation::LoadInstalled)?;
        let loaded = self.timed(self.backend.load_installed_mods()).await;
        self.apply_bulk(BulkOperation::LoadInstalled, loaded, true)
    }

    /// Have the backend scan for installed mods and merge what it finds
    pub async fn discover(&self) -> Result<ResoluteModMap> {
        let _guard = self.begin_bulk(BulkOperation::Discover)?;
        self.notifier.log_info("Discovering installed mods");
        let discovered = self
            .timed(self.backend.discover_installed_mods())
            .await
            .map(LoadedMods::from);
        self.apply_bulk(BulkOperation::Discover, discovered, true)
    }

    /// Run the startup loads described by the settings
    ///
    /// A failed installed-mods load is logged and doesn't stop the full load,
    /// whose result is returned.
    pub async fn startup(&self, settings: &ClientSettings) -> Result<()> {
        if settings.load_installed_on_startup {
            if let Err(err) = self.load_installed().await {
                tracing::warn!("Installed mods unavailable at startup: {}", err);
            }
        }

        self.load(
            settings.bypass_cache_on_startup,
            settings.alert_on_load_failure,
        )
        .await
        .map(|mods| tracing::info!("Startup complete with {} mods", mods.len()))
    }

    fn begin_bulk(&self, operation: BulkOperation) -> Result<BulkGuard<'_>> {
        let acquired = self.write(|state| {
            if operation.is_running(state) {
                false
            } else {
                operation.set_running(state, true);
                true
            }
        });

        if !acquired {
            tracing::debug!("Rejected {}: already running", operation);
            self.metrics.record_rejected();
            return Err(CatalogError::in_progress(operation.to_string()));
        }

        tracing::debug!("Started {}", operation);
        self.emit(CatalogEvent::BulkOperationChanged {
            operation,
            running: true,
        });
        Ok(BulkGuard::new(self, operation))
    }

    fn apply_bulk(
        &self,
        operation: BulkOperation,
        loaded: anyhow::Result<LoadedMods>,
        alert: bool,
    ) -> Result<ResoluteModMap> {
        let outcome = loaded
            .map_err(CatalogError::Backend)
            .and_then(|loaded| Ok((build_batch(loaded.mods)?, loaded.removed)));

        let (batch, removed) = match outcome {
            Ok(parts) => parts,
            Err(err) => {
                self.metrics.record_bulk(operation, false);
                self.notifier
                    .log_error(&format!("Error {}: {}", operation, err));
                if alert {
                    self.notifier.notify_error(
                        operation.error_title(),
                        &format!("Unable to finish {}: {}", operation, err),
                    );
                }
                return Err(err);
            }
        };

        let count = self.write(|state| {
            state.reconcile(&batch, removed.as_ref());
            operation.mark_completed(state);
            state.mods.len()
        });

        self.metrics.record_bulk(operation, true);
        tracing::info!(
            "Finished {}: {} received, {} removed, {} in catalog",
            operation,
            batch.len(),
            removed.as_ref().map_or(0, IndexSet::len),
            count
        );
        self.emit(CatalogEvent::CatalogReplaced { count });
        Ok(batch)
    }

    // Per-mod operations

    /// Install a version of a mod (the latest with [`VersionRef::Latest`])
    pub async fn install<'a>(
        &self,
        target: impl Into<ModRef<'a>>,
        version: impl Into<VersionRef<'a>>,
    ) -> Result<()> {
        let (op, _guard) =
            self.begin_operation(target.into(), OperationKind::Install, version.into())?;
        let label = format!("{} v{}", op.name, op.version.semver);

        self.notifier.log_info(&format!("Installing mod {label}"));
        let result = self
            .timed(self.backend.install_mod_version(&op.raw_mod, &op.raw_version()))
            .await;

        match result {
            Ok(()) => {
                self.apply_installed_version(&op.mod_id, Some(&op.version.semver));
                self.metrics.record_operation(OperationKind::Install, true);
                self.notifier
                    .log_info(&format!("Successfully installed mod {label}"));
                self.notifier.notify_success(
                    "Mod installed",
                    &format!("{label} was successfully installed."),
                );
                Ok(())
            }
            Err(err) => {
                self.metrics.record_operation(OperationKind::Install, false);
                self.notifier
                    .log_error(&format!("Failed to install mod {label}: {err:#}"));
                self.notifier.notify_error(
                    "Error installing mod",
                    &format!("{label} couldn't be installed: {err:#}"),
                );
                Err(CatalogError::Backend(err))
            }
        }
    }

    /// Uninstall a mod's installed version
    pub async fn uninstall<'a>(&self, target: impl Into<ModRef<'a>>) -> Result<()> {
        let (op, _guard) =
            self.begin_operation(target.into(), OperationKind::Uninstall, VersionRef::Latest)?;
        let label = format!("{} v{}", op.name, op.version.semver);

        self.notifier.log_info(&format!("Uninstalling mod {label}"));
        let result = self.timed(self.backend.uninstall_mod(&op.raw_mod)).await;

        match result {
            Ok(()) => {
                self.apply_installed_version(&op.mod_id, None);
                self.metrics.record_operation(OperationKind::Uninstall, true);
                self.notifier
                    .log_info(&format!("Successfully uninstalled mod {label}"));
                self.notifier.notify_success(
                    "Mod uninstalled",
                    &format!("{label} was successfully uninstalled."),
                );
                Ok(())
            }
            Err(err) => {
                self.metrics.record_operation(OperationKind::Uninstall, false);
                self.notifier
                    .log_error(&format!("Failed to uninstall mod {label}: {err:#}"));
                self.notifier.notify_error(
                    "Error uninstalling mod",
                    &format!("{label} couldn't be uninstalled: {err:#}"),
                );
                Err(CatalogError::Backend(err))
            }
        }
    }

    /// Replace a mod's installed version with another one, newer or older
    ///
    /// With `alert` unset nothing is notified, but the slot is still taken and
    /// failures are still returned.
    pub async fn update<'a>(
        &self,
        target: impl Into<ModRef<'a>>,
        version: impl Into<VersionRef<'a>>,
        alert: bool,
    ) -> Result<()> {
        let (op, _guard) =
            self.begin_operation(target.into(), OperationKind::Update, version.into())?;
        let direction = ChangeDirection::between(op.old_version.as_ref(), &op.version);
        let label = match &op.old_version {
            Some(old) => format!("{} v{} to v{}", op.name, old.semver, op.version.semver),
            None => format!("{} to v{}", op.name, op.version.semver),
        };

        self.notifier
            .log_info(&format!("{} mod {label}", capitalize(direction.progressive())));
        let result = self
            .timed(self.backend.replace_mod_version(&op.raw_mod, &op.raw_version()))
            .await;

        match result {
            Ok(()) => {
                self.apply_installed_version(&op.mod_id, Some(&op.version.semver));
                self.metrics.record_operation(OperationKind::Update, true);
                self.notifier
                    .log_info(&format!("Successfully {} mod {label}", direction.past()));
                if alert {
                    self.notifier.notify_success(
                        &format!("Mod {}", direction.past()),
                        &format!("{label} was successfully {}.", direction.past()),
                    );
                }
                Ok(())
            }
            Err(err) => {
                self.metrics.record_operation(OperationKind::Update, false);
                self.notifier.log_error(&format!(
                    "Failed {} mod {label}: {err:#}",
                    direction.progressive()
                ));
                if alert {
                    self.notifier.notify_error(
                        &format!("Error {} mod", direction.progressive()),
                        &format!("{label} couldn't be {}: {err:#}", direction.past()),
                    );
                }
                Err(CatalogError::Backend(err))
            }
        }
    }

    /// Resolve the target and version, then take the mod's slot, all under one write lock
    fn begin_operation(
        &self,
        target: ModRef<'_>,
        kind: OperationKind,
        version: VersionRef<'_>,
    ) -> Result<(PreparedOperation, OperationGuard<'_>)> {
        let mod_id = target.id();
        let prepared = self.write(|state| {
            let rmod = state
                .mods
                .get(mod_id)
                .ok_or_else(|| CatalogError::ModNotFound(mod_id.to_string()))?;

            let old_version = rmod.installed().cloned();
            let version = match kind {
                OperationKind::Uninstall => old_version
                    .clone()
                    .ok_or_else(|| CatalogError::NotInstalled(mod_id.to_string()))?,
                OperationKind::Install | OperationKind::Update => {
                    resolve_version(rmod, version)?.clone()
                }
            };

            if let Some(current) = state.operations.kind_of(mod_id) {
                return Err(CatalogError::in_progress(format!(
                    "{current} of mod \"{mod_id}\""
                )));
            }

            let prepared = PreparedOperation {
                mod_id: mod_id.to_string(),
                name: rmod.name.clone(),
                raw_mod: rmod.to_raw(),
                version,
                old_version,
            };
            state.operations.begin(mod_id, kind);
            Ok(prepared)
        });

        let prepared = prepared.inspect_err(|err| {
            if err.is_already_in_progress() {
                self.metrics.record_rejected();
            }
            tracing::debug!("Rejected {} of {}: {}", kind, mod_id, err);
        })?;

        self.emit(CatalogEvent::OperationChanged {
            mod_id: prepared.mod_id.clone(),
            operation: Some(kind),
        });
        let guard = OperationGuard::new(self, prepared.mod_id.clone());
        Ok((prepared, guard))
    }

    /// Set the installed version on the catalog's copy of a mod
    ///
    /// A load may have replaced or removed the mod while the backend was busy; in that case
    /// the fresh payload already reflects the backend and nothing is written.
    fn apply_installed_version(&self, mod_id: &str, semver: Option<&str>) {
        let applied = self.write(|state| match state.mods.get_mut(mod_id) {
            Some(rmod) => rmod.set_installed_version(semver).map_err(|err| {
                tracing::warn!("Not recording installed version: {}", err);
            }),
            None => {
                tracing::warn!("Mod {} left the catalog during its operation", mod_id);
                Err(())
            }
        });

        if applied.is_ok() {
            self.emit(CatalogEvent::ModUpdated {
                mod_id: mod_id.to_string(),
            });
        }
    }

    async fn timed<T>(&self, call: impl Future<Output = anyhow::Result<T>>) -> anyhow::Result<T> {
        let start = Instant::now();
        let result = call.await;
        self.metrics.record_backend_time(start.elapsed());
        result
    }
}

impl Clone for CatalogStore {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            events: self.events.clone(),
            backend: Arc::clone(&self.backend),
            notifier: Arc::clone(&self.notifier),
            metrics: Arc::clone(&self.metrics),
        }
    }
}

fn build_batch(mods: crate::models::RawModMap) -> Result<ResoluteModMap> {
    mods.into_values()
        .map(|raw| {
            let rmod = ResoluteMod::from_raw(raw)?;
            Ok((rmod.id().to_string(), rmod))
        })
        .collect()
}

fn resolve_version<'m>(rmod: &'m ResoluteMod, version: VersionRef<'_>) -> Result<&'m ModVersion> {
    let not_found = |version: &str| CatalogError::VersionNotFound {
        mod_id: rmod.id().to_string(),
        version: version.to_string(),
    };

    match version {
        VersionRef::Latest => rmod.latest_version().ok_or_else(|| not_found("latest")),
        VersionRef::BySemver(semver) => rmod.version(semver).ok_or_else(|| not_found(semver)),
        VersionRef::ByValue(wanted) => rmod
            .versions()
            .values()
            .find(|candidate| candidate.semver == wanted.semver)
            .ok_or_else(|| not_found(&wanted.semver)),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}
