use serde::Deserialize;

use crate::error::{Error, Result};

/// Runtime settings, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Upper bound on commit passes within one `settle` call.
    pub max_rerenders: usize,
    /// Id of the host element the DOM sink writes into.
    pub sink_element_id: String,
    /// Id of the container the browser mount renders into; created under
    /// `<body>` when the page does not have one.
    pub root_element_id: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            max_rerenders: 16,
            sink_element_id: "otherRoot".to_owned(),
            root_element_id: "root".to_owned(),
        }
    }
}

impl RuntimeConfig {
    /// Parse a TOML document, falling back to defaults for missing keys.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw).map_err(|err| Error::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.max_rerenders == 0 {
            return Err(Error::Config("max_rerenders must be at least 1".to_owned()));
        }
        if self.sink_element_id.trim().is_empty() {
            return Err(Error::Config("sink_element_id must not be empty".to_owned()));
        }
        if self.root_element_id.trim().is_empty() {
            return Err(Error::Config("root_element_id must not be empty".to_owned()));
        }
        if self.root_element_id == self.sink_element_id {
            return Err(Error::Config(
                "root_element_id and sink_element_id must name different elements".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = RuntimeConfig::from_toml_str("").unwrap();
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.sink_element_id, "otherRoot");
    }

    #[test]
    fn partial_document_overrides_keys() {
        let config = RuntimeConfig::from_toml_str("max_rerenders = 3").unwrap();
        assert_eq!(config.max_rerenders, 3);
        assert_eq!(config.sink_element_id, "otherRoot");

        let config = RuntimeConfig::from_toml_str(r#"sink_element_id = "log""#).unwrap();
        assert_eq!(config.sink_element_id, "log");
        assert_eq!(config.root_element_id, "root");

        let config = RuntimeConfig::from_toml_str(r#"root_element_id = "app""#).unwrap();
        assert_eq!(config.root_element_id, "app");
    }

    #[test]
    fn rejects_unknown_keys_and_bad_values() {
        assert!(matches!(
            RuntimeConfig::from_toml_str("colour = \"red\""),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            RuntimeConfig::from_toml_str("max_rerenders = 0"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            RuntimeConfig::from_toml_str(r#"sink_element_id = " ""#),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            RuntimeConfig::from_toml_str(r#"root_element_id = "otherRoot""#),
            Err(Error::Config(_))
        ));
    }
}
