//! Configuration file support for sbom-viewer.
//!
//! Provides YAML-based configuration through `sbom-viewer.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use sbom_viewer::application::dto::OutputFormat;
use sbom_viewer::shared::error::ViewerError;
use sbom_viewer::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "sbom-viewer.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub sbom: Option<String>,
    pub vulnerabilities: Option<String>,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub filter: Option<FilterConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Initial values of the dashboard filters.
#[derive(Debug, Deserialize, Default)]
pub struct FilterConfig {
    pub term: Option<String>,
    pub severity: Option<String>,
    pub package: Option<String>,
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured output format, if any.
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format.as_deref().and_then(|f| f.parse().ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config, path)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile, path: &Path) -> Result<()> {
    if let Some(format) = config.format.as_deref() {
        if let Err(reason) = format.parse::<OutputFormat>() {
            return Err(ViewerError::InvalidConfig {
                path: path.to_path_buf(),
                reason,
                hint: "Set 'format' to one of: html, markdown, md, json.".to_string(),
            }
            .into());
        }
    }

    for (key, value) in [
        ("sbom", config.sbom.as_deref()),
        ("vulnerabilities", config.vulnerabilities.as_deref()),
    ] {
        if value.is_some_and(|v| v.trim().is_empty()) {
            return Err(ViewerError::InvalidConfig {
                path: path.to_path_buf(),
                reason: format!("'{}' must not be empty", key),
                hint: format!(
                    "Remove '{}' to use the default location, or set a file path or URL.",
                    key
                ),
            }
            .into());
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
    if let Some(filter) = &config.filter {
        for key in filter.unknown_fields.keys() {
            eprintln!(
                "⚠️  Warning: Unknown config field 'filter.{}' will be ignored.",
                key
            );
        }
    }
}
