//! Shared fakes for the integration tests

#![allow(dead_code)]

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use resolute_catalog::models::{LoadedMods, RawMod, RawModMap, RawVersion};
use resolute_catalog::Notifier;
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Semaphore;

/// In-memory backend with programmable failures and an optional hold point
///
/// While `hold` is enabled every call parks until [`FakeBackend::release`] hands it a permit,
/// which lets tests observe the catalog while an operation is in flight.
pub struct FakeBackend {
    pub catalog: Mutex<LoadedMods>,
    pub installed: Mutex<LoadedMods>,
    pub discovered: Mutex<RawModMap>,
    failing: Mutex<HashSet<String>>,
    fail_loads: AtomicBool,
    hold: AtomicBool,
    permits: Semaphore,
    calls: Mutex<Vec<String>>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            catalog: Mutex::default(),
            installed: Mutex::default(),
            discovered: Mutex::default(),
            failing: Mutex::default(),
            fail_loads: AtomicBool::new(false),
            hold: AtomicBool::new(false),
            permits: Semaphore::new(0),
            calls: Mutex::default(),
        }
    }
}

impl FakeBackend {
    pub fn with_catalog(mods: Vec<RawMod>) -> Self {
        let backend = Self::default();
        *backend.catalog.lock().unwrap() = loaded(mods, &[]);
        backend
    }

    pub fn set_catalog(&self, mods: Vec<RawMod>, removed: &[&str]) {
        *self.catalog.lock().unwrap() = loaded(mods, removed);
    }

    /// Make every per-mod call for `mod_id` fail
    pub fn fail_mod(&self, mod_id: &str) {
        self.failing.lock().unwrap().insert(mod_id.to_string());
    }

    pub fn fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    pub fn hold(&self) {
        self.hold.store(true, Ordering::SeqCst);
    }

    /// Let `count` parked calls finish
    pub fn release(&self, count: usize) {
        self.permits.add_permits(count);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    async fn enter(&self, call: String) {
        self.calls.lock().unwrap().push(call);
        if self.hold.load(Ordering::SeqCst) {
            self.permits.acquire().await.unwrap().forget();
        }
    }

    fn mod_result(&self, mod_id: &str) -> Result<()> {
        if self.failing.lock().unwrap().contains(mod_id) {
            Err(anyhow!("checksum mismatch for {mod_id}"))
        } else {
            Ok(())
        }
    }

    fn load_result(&self, source: &Mutex<LoadedMods>) -> Result<LoadedMods> {
        if self.fail_loads.load(Ordering::SeqCst) {
            Err(anyhow!("manifest download failed"))
        } else {
            Ok(source.lock().unwrap().clone())
        }
    }
}

#[async_trait]
impl resolute_catalog::ModBackend for FakeBackend {
    async fn load_all_mods(&self, bypass_cache: bool) -> Result<LoadedMods> {
        self.enter(format!("load_all_mods({bypass_cache})")).await;
        self.load_result(&self.catalog)
    }

    async fn load_installed_mods(&self) -> Result<LoadedMods> {
        self.enter("load_installed_mods".to_string()).await;
        self.load_result(&self.installed)
    }

    async fn discover_installed_mods(&self) -> Result<RawModMap> {
        self.enter("discover_installed_mods".to_string()).await;
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(anyhow!("install folder unreadable"));
        }
        Ok(self.discovered.lock().unwrap().clone())
    }

    async fn install_mod_version(&self, rmod: &RawMod, version: &RawVersion) -> Result<()> {
        self.enter(format!("install {} {}", rmod.id, version.semver)).await;
        self.mod_result(&rmod.id)
    }

    async fn uninstall_mod(&self, rmod: &RawMod) -> Result<()> {
        self.enter(format!("uninstall {}", rmod.id)).await;
        self.mod_result(&rmod.id)
    }

    async fn replace_mod_version(&self, rmod: &RawMod, version: &RawVersion) -> Result<()> {
        self.enter(format!("replace {} {}", rmod.id, version.semver)).await;
        self.mod_result(&rmod.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success { title: String, message: String },
    Error { title: String, message: String },
}

impl Notice {
    pub fn title(&self) -> &str {
        match self {
            Self::Success { title, .. } | Self::Error { title, .. } => title,
        }
    }
}

/// Notifier that keeps every notification for later inspection
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<Notice> {
        self.notices()
            .into_iter()
            .filter(|notice| matches!(notice, Notice::Error { .. }))
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify_success(&self, title: &str, message: &str) {
        self.notices.lock().unwrap().push(Notice::Success {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    fn notify_error(&self, title: &str, message: &str) {
        self.notices.lock().unwrap().push(Notice::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}

pub fn raw_mod(id: &str, versions: &[&str], installed: Option<&str>) -> RawMod {
    RawMod {
        id: id.to_string(),
        name: format!("Mod {id}"),
        category: "Plugins".to_string(),
        versions: versions
            .iter()
            .map(|semver| {
                (
                    semver.to_string(),
                    RawVersion {
                        semver: semver.to_string(),
                        ..Default::default()
                    },
                )
            })
            .collect(),
        installed_version: installed.map(str::to_string),
        ..Default::default()
    }
}

pub fn loaded(mods: Vec<RawMod>, removed: &[&str]) -> LoadedMods {
    LoadedMods {
        mods: mods.into_iter().map(|m| (m.id.clone(), m)).collect(),
        removed: (!removed.is_empty()).then(|| removed.iter().map(|id| id.to_string()).collect()),
    }
}
