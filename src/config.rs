//! Configuration file support for pdc-tangle.
//!
//! Provides YAML-based configuration through `pdc-tangle.config.yml` files,
//! and the merge of file values with command-line overrides and built-in
//! defaults (command line first, then the file, then the defaults).

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::adapters::outbound::network::{DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS};
use crate::application::dto::OutputFormat;
use crate::application::use_cases::DEFAULT_MAX_CONCURRENCY;
use crate::shared::security::{validate_config_file, MAX_CONFIG_FILE_SIZE};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "pdc-tangle.config.yml";

pub const DEFAULT_SERVER: &str = "pdc.stg.fedoraproject.org";
pub const DEFAULT_RELEASE: &str = "fedora-26";
pub const DEFAULT_DEPENDENCY_TYPES: [&str; 2] = ["RPMBuildRequires", "RPMRequires"];

const MAX_PAGE_SIZE: usize = 1000;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub server: Option<String>,
    pub release: Option<String>,
    pub dependency_types: Option<Vec<String>>,
    pub format: Option<String>,
    pub page_size: Option<usize>,
    pub max_concurrency: Option<usize>,
    pub timeout_secs: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_config_file(path, MAX_CONFIG_FILE_SIZE)
        .with_context(|| format!("Cannot use config file: {}", path.display()))?;

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    validate_config(&config)?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if std::fs::symlink_metadata(&config_path).is_err() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(server) = &config.server {
        if server.trim().is_empty() {
            bail!("Invalid config: server must not be empty.");
        }
    }

    if let Some(release) = &config.release {
        if release.trim().is_empty() {
            bail!("Invalid config: release must not be empty.");
        }
    }

    if let Some(types) = &config.dependency_types {
        if types.is_empty() {
            bail!(
                "Invalid config: dependency_types must list at least one type (remove the key to use {}).",
                DEFAULT_DEPENDENCY_TYPES.join(", ")
            );
        }
        for (i, label) in types.iter().enumerate() {
            if label.trim().is_empty() {
                bail!("Invalid config: dependency_types[{}] must not be empty.", i);
            }
        }
    }

    if let Some(format) = &config.format {
        OutputFormat::from_str(format)
            .map_err(|e| anyhow::anyhow!("Invalid config: format: {}", e))?;
    }

    if let Some(page_size) = config.page_size {
        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            bail!(
                "Invalid config: page_size must be between 1 and {} (got {}).",
                MAX_PAGE_SIZE,
                page_size
            );
        }
    }

    if config.max_concurrency == Some(0) {
        bail!("Invalid config: max_concurrency must be at least 1.");
    }

    if config.timeout_secs == Some(0) {
        bail!("Invalid config: timeout_secs must be at least 1.");
    }

    Ok(())
}

impl ConfigFile {
    /// One warning per unknown field, in key order
    pub fn unknown_field_warnings(&self) -> Vec<String> {
        let mut keys: Vec<&String> = self.unknown_fields.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| format!("⚠️  Warning: Unknown config field '{}' will be ignored.", key))
            .collect()
    }
}

/// Values given on the command line; `None` / empty means "not given"
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub server: Option<String>,
    pub release: Option<String>,
    pub dependency_types: Vec<String>,
    pub format: Option<OutputFormat>,
    pub max_concurrency: Option<usize>,
}

/// Effective settings of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server: String,
    pub release: String,
    pub dependency_types: Vec<String>,
    pub format: OutputFormat,
    pub page_size: usize,
    pub max_concurrency: usize,
    pub timeout: Duration,
}

impl Settings {
    /// Merges command-line overrides over the config file over the defaults
    pub fn resolve(overrides: Overrides, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let format = match (overrides.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(value)) => OutputFormat::from_str(value).map_err(anyhow::Error::msg)?,
            (None, None) => OutputFormat::default(),
        };

        let dependency_types = if !overrides.dependency_types.is_empty() {
            overrides.dependency_types
        } else {
            config.dependency_types.unwrap_or_else(|| {
                DEFAULT_DEPENDENCY_TYPES
                    .iter()
                    .map(|t| t.to_string())
                    .collect()
            })
        };

        Ok(Self {
            server: overrides
                .server
                .or(config.server)
                .unwrap_or_else(|| DEFAULT_SERVER.to_string()),
            release: overrides
                .release
                .or(config.release)
                .unwrap_or_else(|| DEFAULT_RELEASE.to_string()),
            dependency_types,
            format,
            page_size: config.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            max_concurrency: overrides
                .max_concurrency
                .or(config.max_concurrency)
                .unwrap_or(DEFAULT_MAX_CONCURRENCY)
                .max(1),
            timeout: Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        })
    }
}
