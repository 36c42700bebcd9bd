use crate::core::ConfigProvider;
use crate::utils::error::{PrintError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: Option<bool>,
}

impl TomlConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PrintError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| PrintError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn monitor_enabled(&self) -> bool {
        self.monitoring
            .as_ref()
            .and_then(|m| m.enabled)
            .unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn source_path(&self) -> &str {
        &self.source.path
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("source.path", &self.source.path)
    }
}
