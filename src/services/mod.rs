//! Services module - the collaborators the catalog drives but doesn't implement.
//!
//! # Components
//!
//! - [`ModBackend`]: the backend executor. Loading, discovery, installation, replacement and
//!   removal of mods all happen behind this trait; the catalog only sees success or failure.
//! - [`Notifier`]: where success/error notifications and operation log lines go.
//!   [`TracingNotifier`] is the default, routing everything to `tracing`.
//!
//! Both are injected into [`CatalogStore`](crate::state::CatalogStore) at construction, so tests
//! and alternative frontends can substitute their own.

pub mod backend;
pub mod notifier;

pub use backend::ModBackend;
pub use notifier::{Notifier, TracingNotifier};

#[cfg(test)]
pub use notifier::MockNotifier;
