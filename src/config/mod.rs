pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "contact-printer")]
#[command(about = "Prints every contact in a JSON address book")]
pub struct CliConfig {
    /// Path to the address book JSON document
    #[arg(long, default_value = "addressbook.json")]
    pub source: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Report process resource usage after the run
    #[arg(long)]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn source_path(&self) -> &str {
        &self.source
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("source", &self.source)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_default_source_is_addressbook_json() {
        let config = CliConfig::parse_from(["contact-printer"]);
        assert_eq!(config.source_path(), "addressbook.json");
        assert!(!config.verbose);
        assert!(!config.monitor);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_source_fails_validation() {
        let config = CliConfig::parse_from(["contact-printer", "--source", ""]);
        assert!(config.validate().is_err());
    }
}
