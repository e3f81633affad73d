use crate::models::ClientSettings;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use config::{Config as LayeredConfig, Environment, File, FileFormat};
use std::collections::HashMap;
use std::fs;

/// Prefix for environment overrides, e.g. `RESOLUTE_DEBUG_MODE=true`
pub const ENV_PREFIX: &str = "RESOLUTE";

/// Name of the settings file inside the configuration directory
pub const SETTINGS_FILE: &str = "resolute.yaml";

/// Configuration manager for the client settings file.
///
/// Settings are layered: defaults, then `resolute.yaml` (if present), then
/// `RESOLUTE_*` environment variables.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: Utf8PathBuf,
    settings_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager, creating the directory if needed.
    pub fn new<P: AsRef<Utf8Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref().to_path_buf();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {}", config_dir))?;
        }

        Ok(Self {
            settings_path: config_dir.join(SETTINGS_FILE),
            config_dir,
        })
    }

    /// Load the client settings from the file and the process environment.
    pub fn load_settings(&self) -> Result<ClientSettings> {
        self.load_settings_with_env(None)
    }

    /// Load the client settings, taking environment overrides from `env` instead of the
    /// process environment when given.
    pub fn load_settings_with_env(
        &self,
        env: Option<HashMap<String, String>>,
    ) -> Result<ClientSettings> {
        if !self.settings_path.exists() {
            tracing::debug!(
                "Settings file not found at {}, using defaults",
                self.settings_path
            );
        }

        let layered = LayeredConfig::builder()
            .add_source(
                File::with_name(self.settings_path.as_str())
                    .format(FileFormat::Yaml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(env),
            )
            .build()
            .with_context(|| format!("Failed to read settings: {}", self.settings_path))?;

        let settings: ClientSettings = layered
            .try_deserialize()
            .with_context(|| format!("Failed to parse settings: {}", self.settings_path))?;

        tracing::info!("Loaded client settings from {}", self.config_dir);
        Ok(settings)
    }

    /// Save the client settings file.
    pub fn save_settings(&self, settings: &ClientSettings) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(settings).context("Failed to serialize settings to YAML")?;

        fs::write(&self.settings_path, yaml_string)
            .with_context(|| format!("Failed to write settings: {}", self.settings_path))?;

        tracing::info!("Saved client settings to {}", self.settings_path);
        Ok(())
    }

    /// Get the configuration directory path.
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }

    pub fn settings_path(&self) -> &Utf8Path {
        &self.settings_path
    }
}
