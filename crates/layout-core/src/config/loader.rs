//! Hierarchical configuration loader with precedence
//!
//! Loads configuration from multiple sources with the following precedence (low to high):
//! 1. Embedded defaults (built into binary)
//! 2. Global config (~/.layout/config.yaml), or an explicit `--config` file
//! 3. Environment variables (LAYOUT_* prefix)

use crate::config::types::LayoutConfig;
use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use serde_yaml_ng::Value;
use std::env;
use std::fs;
use tracing::debug;

/// Embedded configuration files
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/embedded/config/"]
#[prefix = ""]
struct EmbeddedConfigs;

/// Name of the embedded defaults file
const DEFAULTS_FILE: &str = "defaults.yaml";

/// Name of the global config file inside the config directory
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Configuration hierarchy loader
pub struct ConfigLoader {
    /// Base directory for configuration files
    config_dir: Utf8PathBuf,
}

impl ConfigLoader {
    /// Create a loader rooted at the standard config directory (~/.layout)
    pub fn new() -> Result<Self> {
        let config_dir = Self::get_config_dir()?;
        Ok(Self { config_dir })
    }

    /// Create a loader with a custom config directory
    pub fn with_dir(config_dir: Utf8PathBuf) -> Self {
        Self { config_dir }
    }

    /// Get the standard config directory (~/.layout)
    ///
    /// HOME wins over the platform lookup so containers with a remapped
    /// home behave like the shell does.
    fn get_config_dir() -> Result<Utf8PathBuf> {
        let home = match env::var("HOME").or_else(|_| env::var("USERPROFILE")) {
            Ok(home) => Utf8PathBuf::from(home),
            Err(_) => dirs::home_dir()
                .and_then(|p| Utf8PathBuf::from_path_buf(p).ok())
                .ok_or_else(|| Error::invalid_config("Could not determine home directory"))?,
        };

        Ok(home.join(".layout"))
    }

    /// Load the effective configuration
    ///
    /// `explicit` replaces the global config file and must exist.
    pub fn load(&self, explicit: Option<&Utf8Path>) -> Result<LayoutConfig> {
        let mut merged = Self::load_embedded_value(DEFAULTS_FILE)?;

        let overlay_path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::config_not_found(path.as_str()));
                }
                Some(path.to_owned())
            }
            None => {
                let path = self.config_dir.join(CONFIG_FILE_NAME);
                path.exists().then_some(path)
            }
        };

        if let Some(path) = overlay_path {
            debug!("Loading configuration overrides from {}", path);
            let overlay = self.load_yaml_file(&path)?;
            // An empty file parses as null and overrides nothing
            if !overlay.is_null() {
                merge_values(&mut merged, overlay);
            }
        }

        let config: LayoutConfig = serde_yaml_ng::from_value(merged)
            .map_err(|e| Error::invalid_config(format!("Failed to parse configuration: {}", e)))?;

        let config = self.apply_env_overrides(config)?;
        validate(config)
    }

    /// Load an embedded configuration file as a raw YAML value
    fn load_embedded_value(filename: &str) -> Result<Value> {
        let embedded_file = EmbeddedConfigs::get(filename).ok_or_else(|| {
            Error::config_not_found(format!("Embedded config not found: {}", filename))
        })?;

        let content = std::str::from_utf8(&embedded_file.data).map_err(|_| {
            Error::invalid_config(format!("Invalid UTF-8 in embedded config: {}", filename))
        })?;

        serde_yaml_ng::from_str(content).map_err(|e| {
            Error::invalid_config(format!(
                "Failed to parse embedded config {}: {}",
                filename, e
            ))
        })
    }

    /// Load a YAML file and parse it into a raw value
    fn load_yaml_file(&self, path: &Utf8Path) -> Result<Value> {
        let content = fs::read_to_string(path)?;
        let value: Value = serde_yaml_ng::from_str(&content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse {}: {}", path, e)))?;
        Ok(value)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&self, mut config: LayoutConfig) -> Result<LayoutConfig> {
        if let Ok(val) = env::var("LAYOUT_TEMPLATE_URL") {
            config.template.url = val;
        }

        if let Ok(val) = env::var("LAYOUT_TEMPLATE_BRANCH") {
            config.template.branch = (!val.is_empty()).then_some(val);
        }

        if let Ok(val) = env::var("LAYOUT_TEMPLATE_DEPTH") {
            config.template.depth = Some(val.parse().map_err(|_| {
                Error::invalid_config("LAYOUT_TEMPLATE_DEPTH must be a valid number")
            })?);
        }

        if let Ok(val) = env::var("LAYOUT_VCS_PROGRAM") {
            config.vcs.program = val;
        }

        if let Ok(val) = env::var("LAYOUT_TOOLCHAIN_PROGRAM") {
            config.toolchain.program = val;
        }

        Ok(config)
    }

    /// Get the config directory path
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }
}

/// Deep-merge `overlay` into `base`; mappings merge key by key, anything else replaces
///
/// An explicit null clears a scalar, so `branch: null` undoes a branch set by
/// a lower layer.
fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        // A bare section header (`template:`) keeps the section's defaults
        (Value::Mapping(_), Value::Null) => {}
        (base, overlay) => *base = overlay,
    }
}

/// Reject configurations the pipeline cannot work with
fn validate(mut config: LayoutConfig) -> Result<LayoutConfig> {
    if config.template.url.trim().is_empty() {
        return Err(Error::missing_field("template.url"));
    }
    if config.template.depth == Some(0) {
        return Err(Error::invalid_config(
            "template.depth must be at least 1 (omit it for a full clone)",
        ));
    }
    if config.vcs.program.trim().is_empty() {
        return Err(Error::missing_field("vcs.program"));
    }
    if config.vcs.metadata_dir.trim().is_empty() {
        return Err(Error::missing_field("vcs.metadata-dir"));
    }
    if config.toolchain.program.trim().is_empty() {
        return Err(Error::missing_field("toolchain.program"));
    }
    if config.toolchain.manifest.trim().is_empty() {
        return Err(Error::missing_field("toolchain.manifest"));
    }

    config.toolchain.source_extension = config
        .toolchain
        .source_extension
        .trim_start_matches('.')
        .to_string();
    if config.toolchain.source_extension.is_empty() {
        return Err(Error::missing_field("toolchain.source-extension"));
    }

    Ok(config)
}
