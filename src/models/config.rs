use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Client settings from resolute.yaml
///
/// Every field has a default, so a partial file (or none at all) is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Buffer size of the catalog event channel
    pub event_capacity: usize,

    /// Show an error notification when the startup catalog load fails
    pub alert_on_load_failure: bool,

    /// Force a fresh manifest download on startup
    pub bypass_cache_on_startup: bool,

    /// Load installed mods before the full catalog on startup
    pub load_installed_on_startup: bool,

    #[serde(flatten)]
    pub logging: LogSettings,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            event_capacity: default_event_capacity(),
            alert_on_load_failure: true,
            bypass_cache_on_startup: false,
            load_installed_on_startup: true,
            logging: LogSettings::default(),
        }
    }
}

fn default_event_capacity() -> usize {
    100
}

/// Logging options, stored alongside the client settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub debug_mode: bool,
    pub log_dir: Utf8PathBuf,
    pub log_prefix: String,
    pub console_logging: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            debug_mode: false,
            log_dir: Utf8PathBuf::from("logs"),
            log_prefix: "resolute".to_string(),
            console_logging: false,
        }
    }
}
