// Catalog metrics
//
// Counters for catalog operations, readable at any time without taking the catalog lock

use crate::state::{BulkOperation, OperationKind};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Operation counters for one [`CatalogStore`](crate::state::CatalogStore)
///
/// Uses relaxed atomics; the values are for logging and diagnostics, not for synchronization.
#[derive(Debug)]
pub struct Metrics {
    pub installs_succeeded: AtomicU64,
    pub installs_failed: AtomicU64,
    pub uninstalls_succeeded: AtomicU64,
    pub uninstalls_failed: AtomicU64,
    pub updates_succeeded: AtomicU64,
    pub updates_failed: AtomicU64,

    /// Completed load, load-installed and discover calls
    pub bulk_loads_succeeded: AtomicU64,
    pub bulk_loads_failed: AtomicU64,

    /// Calls turned away because their gate was occupied
    pub operations_rejected: AtomicU64,

    /// Total time spent waiting on the backend, in milliseconds
    pub backend_time_ms: AtomicU64,

    pub events_broadcast: AtomicU64,

    /// Events sent while nobody was subscribed
    pub events_undelivered: AtomicU64,

    start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            installs_succeeded: AtomicU64::new(0),
            installs_failed: AtomicU64::new(0),
            uninstalls_succeeded: AtomicU64::new(0),
            uninstalls_failed: AtomicU64::new(0),
            updates_succeeded: AtomicU64::new(0),
            updates_failed: AtomicU64::new(0),
            bulk_loads_succeeded: AtomicU64::new(0),
            bulk_loads_failed: AtomicU64::new(0),
            operations_rejected: AtomicU64::new(0),
            backend_time_ms: AtomicU64::new(0),
            events_broadcast: AtomicU64::new(0),
            events_undelivered: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record the outcome of a per-mod operation
    pub fn record_operation(&self, kind: OperationKind, succeeded: bool) {
        let counter = match (kind, succeeded) {
            (OperationKind::Install, true) => &self.installs_succeeded,
            (OperationKind::Install, false) => &self.installs_failed,
            (OperationKind::Uninstall, true) => &self.uninstalls_succeeded,
            (OperationKind::Uninstall, false) => &self.uninstalls_failed,
            (OperationKind::Update, true) => &self.updates_succeeded,
            (OperationKind::Update, false) => &self.updates_failed,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_bulk(&self, operation: BulkOperation, succeeded: bool) {
        tracing::trace!("Recording {} outcome: succeeded={}", operation, succeeded);
        if succeeded {
            self.bulk_loads_succeeded.fetch_add(1, Ordering::Relaxed);
        } else {
            self.bulk_loads_failed.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_rejected(&self) {
        self.operations_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_backend_time(&self, duration: Duration) {
        self.backend_time_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record an event send; `delivered` is false when there were no subscribers
    pub fn record_broadcast(&self, delivered: bool) {
        self.events_broadcast.fetch_add(1, Ordering::Relaxed);
        if !delivered {
            self.events_undelivered.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Operations that reached the backend, successful or not
    pub fn operations_completed(&self) -> u64 {
        [
            &self.installs_succeeded,
            &self.installs_failed,
            &self.uninstalls_succeeded,
            &self.uninstalls_failed,
            &self.updates_succeeded,
            &self.updates_failed,
        ]
        .iter()
        .map(|counter| counter.load(Ordering::Relaxed))
        .sum()
    }

    pub fn summary(&self) -> String {
        format!(
            "installs {} ok / {} failed, uninstalls {} ok / {} failed, updates {} ok / {} failed, loads {} ok / {} failed, {} rejected, backend {:.2}s, events {} ({} undelivered), uptime {:.0}s",
            self.installs_succeeded.load(Ordering::Relaxed),
            self.installs_failed.load(Ordering::Relaxed),
            self.uninstalls_succeeded.load(Ordering::Relaxed),
            self.uninstalls_failed.load(Ordering::Relaxed),
            self.updates_succeeded.load(Ordering::Relaxed),
            self.updates_failed.load(Ordering::Relaxed),
            self.bulk_loads_succeeded.load(Ordering::Relaxed),
            self.bulk_loads_failed.load(Ordering::Relaxed),
            self.operations_rejected.load(Ordering::Relaxed),
            self.backend_time_ms.load(Ordering::Relaxed) as f64 / 1000.0,
            self.events_broadcast.load(Ordering::Relaxed),
            self.events_undelivered.load(Ordering::Relaxed),
            self.uptime().as_secs_f64()
        )
    }

    pub fn log_summary(&self) {
        tracing::info!("Catalog metrics: {}", self.summary());
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new();
        assert_eq!(metrics.operations_completed(), 0);
        assert_eq!(metrics.operations_rejected.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_record_operations() {
        let metrics = Metrics::new();

        metrics.record_operation(OperationKind::Install, true);
        metrics.record_operation(OperationKind::Install, false);
        metrics.record_operation(OperationKind::Update, true);
        metrics.record_operation(OperationKind::Uninstall, true);

        assert_eq!(metrics.installs_succeeded.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.installs_failed.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.updates_succeeded.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.uninstalls_succeeded.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.operations_completed(), 4);
    }

    #[test]
    fn test_record_bulk_and_broadcasts() {
        let metrics = Metrics::new();

        metrics.record_bulk(BulkOperation::Load, true);
        metrics.record_bulk(BulkOperation::Discover, false);
        metrics.record_broadcast(true);
        metrics.record_broadcast(false);
        metrics.record_backend_time(Duration::from_millis(250));

        assert_eq!(metrics.bulk_loads_succeeded.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.bulk_loads_failed.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.events_broadcast.load(Ordering::Relaxed), 2);
        assert_eq!(metrics.events_undelivered.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.backend_time_ms.load(Ordering::Relaxed), 250);
    }

    #[test]
    fn test_summary_mentions_counts() {
        let metrics = Metrics::new();
        metrics.record_rejected();

        let summary = metrics.summary();
        assert!(summary.contains("1 rejected"));
        assert!(summary.contains("installs 0 ok / 0 failed"));
    }
}
