//! Aggregate NLU configuration
//!
//! Bundles the lexicon, extraction tables, templates and training corpus.
//! The built-in default is the production data; `load` replaces it from a
//! YAML file when an override is configured.

use serde::{Deserialize, Serialize};
use std::path::Path;

use aqarkam_core::{Error, Result};

use crate::corpus::TrainingCorpus;
use crate::extraction::ExtractionConfig;
use crate::lexicon::LexiconConfig;
use crate::templates::TemplateConfig;

/// Everything the chat pipeline reads at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NluConfig {
    #[serde(default)]
    pub lexicon: LexiconConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub templates: TemplateConfig,
    #[serde(default)]
    pub corpus: TrainingCorpus,
}

impl NluConfig {
    /// Load from a YAML file; missing sections keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::Config(format!(
                "NLU config not found at {}: {e}",
                path.as_ref().display()
            ))
        })?;
        serde_yaml::from_str(&content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load from the configured path, falling back to the built-in tables.
    pub fn load_or_default(path: Option<&str>) -> Self {
        match path {
            Some(path) => match Self::load(path) {
                Ok(config) => {
                    tracing::info!(path, "loaded NLU config override");
                    config
                }
                Err(e) => {
                    tracing::warn!("failed to load NLU config override: {e}; using built-in tables");
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_sections_are_consistent() {
        let config = NluConfig::default();
        assert!(!config.lexicon.triggers.is_empty());
        assert!(!config.extraction.locations.is_empty());
        assert!(!config.templates.default_replies.is_empty());
        assert!(!config.corpus.examples.is_empty());
    }

    #[test]
    fn yaml_override_round_trip() {
        let config = NluConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let loaded = NluConfig::load(file.path()).unwrap();
        assert_eq!(loaded.lexicon.triggers.len(), config.lexicon.triggers.len());
        assert_eq!(loaded.corpus.examples.len(), config.corpus.examples.len());
    }

    #[test]
    fn missing_override_falls_back() {
        let config = NluConfig::load_or_default(Some("/nonexistent/nlu.yaml"));
        assert_eq!(
            config.lexicon.triggers.len(),
            NluConfig::default().lexicon.triggers.len()
        );
    }
}
