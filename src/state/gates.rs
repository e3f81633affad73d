// Scoped gate release for the catalog store
//
// A guard is created right after its gate is taken and clears it on drop, so the slot or
// flag is released exactly once on success, on failure, and when the owning future is dropped.

use super::{BulkOperation, CatalogEvent, CatalogStore};

/// Holds a mod's operation slot
pub(super) struct OperationGuard<'a> {
    store: &'a CatalogStore,
    mod_id: String,
}

impl<'a> OperationGuard<'a> {
    pub(super) fn new(store: &'a CatalogStore, mod_id: String) -> Self {
        Self { store, mod_id }
    }
}

impl Drop for OperationGuard<'_> {
    fn drop(&mut self) {
        let ended = self.store.write(|state| state.operations.end(&self.mod_id));
        tracing::debug!("Released operation slot for {} (was {:?})", self.mod_id, ended);
        self.store.emit(CatalogEvent::OperationChanged {
            mod_id: std::mem::take(&mut self.mod_id),
            operation: None,
        });
    }
}

/// Holds one of the bulk flags (loading, loading installed, discovering)
pub(super) struct BulkGuard<'a> {
    store: &'a CatalogStore,
    operation: BulkOperation,
}

impl<'a> BulkGuard<'a> {
    pub(super) fn new(store: &'a CatalogStore, operation: BulkOperation) -> Self {
        Self { store, operation }
    }
}

impl Drop for BulkGuard<'_> {
    fn drop(&mut self) {
        self.store
            .write(|state| self.operation.set_running(state, false));
        tracing::debug!("Finished {}", self.operation);
        self.store.emit(CatalogEvent::BulkOperationChanged {
            operation: self.operation,
            running: false,
        });
    }
}
