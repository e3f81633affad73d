use std::collections::HashMap;
use std::fmt;

/// Kind of long-running operation a mod can be busy with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Install,
    Uninstall,
    Update,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Install => "install",
            Self::Uninstall => "uninstall",
            Self::Update => "update",
        })
    }
}

/// Single-slot gate per mod id
///
/// This is bookkeeping only: there's no queue, no retries and no timeouts. The catalog store
/// checks the slot and calls [`begin`](Self::begin) under the same lock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationTracker {
    slots: HashMap<String, OperationKind>,
}

impl OperationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Occupy the slot for a mod
    pub fn begin(&mut self, mod_id: &str, kind: OperationKind) {
        self.slots.insert(mod_id.to_string(), kind);
    }

    /// Clear the slot for a mod; clearing an empty slot does nothing
    pub fn end(&mut self, mod_id: &str) -> Option<OperationKind> {
        self.slots.remove(mod_id)
    }

    pub fn kind_of(&self, mod_id: &str) -> Option<OperationKind> {
        self.slots.get(mod_id).copied()
    }

    pub fn is_busy(&self, mod_id: &str) -> bool {
        self.slots.contains_key(mod_id)
    }

    pub fn is_installing(&self, mod_id: &str) -> bool {
        self.kind_of(mod_id) == Some(OperationKind::Install)
    }

    pub fn is_uninstalling(&self, mod_id: &str) -> bool {
        self.kind_of(mod_id) == Some(OperationKind::Uninstall)
    }

    pub fn is_updating(&self, mod_id: &str) -> bool {
        self.kind_of(mod_id) == Some(OperationKind::Update)
    }

    /// Number of mods with an operation in flight
    pub fn active_count(&self) -> usize {
        self.slots.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, OperationKind)> {
        self.slots.iter().map(|(id, kind)| (id.as_str(), *kind))
    }
}
