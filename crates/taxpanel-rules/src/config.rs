//! Engine configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use taxpanel_core::{Error, Result};

/// Panel rule engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Legal basis definition label identifying shipping or aviation relief
    #[serde(default = "default_shipping_aviation_label")]
    pub shipping_aviation_label: String,

    /// Skip catalog and legal basis lookups on panel open when the module is disabled
    #[serde(default)]
    pub skip_disabled_module: bool,
}

impl EngineConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file, or use defaults when the file is missing
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    fn validate(&self) -> Result<()> {
        if self.shipping_aviation_label.trim().is_empty() {
            return Err(Error::config("shipping_aviation_label must not be empty"));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            shipping_aviation_label: default_shipping_aviation_label(),
            skip_disabled_module: false,
        }
    }
}

fn default_shipping_aviation_label() -> String {
    "SHIPPING_OR_AVIATION".to_string()
}
