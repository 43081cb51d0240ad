//! Registry configuration.

use cv_document::DocumentFormat;
use serde::{Deserialize, Serialize};

/// Store key the user variables are saved under.
pub const DEFAULT_STORAGE_KEY: &str = "calc_vars";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub storage_key: String,
    pub format: DocumentFormat,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            format: DocumentFormat::default(),
        }
    }
}

impl RegistryConfig {
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RegistryConfig::default();
        assert_eq!(config.storage_key, "calc_vars");
        assert_eq!(config.format, DocumentFormat::Json);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = RegistryConfig::from_yaml("format: yaml\n").unwrap();
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.format, DocumentFormat::Yaml);

        let config = RegistryConfig::from_yaml("storage_key: my_vars\n").unwrap();
        assert_eq!(config.storage_key, "my_vars");
        assert_eq!(config.format, DocumentFormat::Json);
    }
}
