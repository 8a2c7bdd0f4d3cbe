//! Runtime settings
//!
//! Loaded once at startup. Priority: `AQARKAM_*` environment variables >
//! `config/{env}.yaml` > `config/default.yaml` > built-in defaults.

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use aqarkam_core::{Error, Result};

/// Top-level application settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Chat pipeline configuration
    #[serde(default)]
    pub chat: ChatConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// When false, a permissive CORS layer is used (development only).
    #[serde(default = "default_cors_enabled")]
    pub cors_enabled: bool,
    /// Allowed CORS origins; empty means localhost only.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_cors_enabled() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: default_cors_enabled(),
            cors_origins: Vec::new(),
        }
    }
}

/// Chat pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Context key used when a request carries no userId. All such callers
    /// share one conversation context.
    #[serde(default = "default_anonymous_user_id")]
    pub anonymous_user_id: String,

    /// Where the trained classifier model is persisted and auto-loaded from.
    #[serde(default = "default_model_path")]
    pub model_path: String,

    /// Minimum classifier confidence before its verdict is trusted.
    #[serde(default = "default_classifier_threshold")]
    pub classifier_threshold: f32,

    /// Maximum listings returned per search.
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,

    /// Maximum remembered searches per user context.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Optional YAML file overriding the built-in NLU tables.
    #[serde(default)]
    pub nlu_config_path: Option<String>,
}

fn default_anonymous_user_id() -> String {
    "anonymous".to_string()
}

fn default_model_path() -> String {
    "model.json".to_string()
}

fn default_classifier_threshold() -> f32 {
    0.5
}

fn default_search_limit() -> usize {
    3
}

fn default_history_limit() -> usize {
    5
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            anonymous_user_id: default_anonymous_user_id(),
            model_path: default_model_path(),
            classifier_threshold: default_classifier_threshold(),
            search_limit: default_search_limit(),
            history_limit: default_history_limit(),
            nlu_config_path: None,
        }
    }
}

/// Load settings from files and environment.
pub fn load_settings(env: Option<&str>) -> Result<Settings> {
    let mut builder = Config::builder().add_source(File::with_name("config/default").required(false));

    if let Some(env) = env {
        builder = builder.add_source(File::with_name(&format!("config/{env}")).required(false));
    }

    builder
        .add_source(Environment::with_prefix("AQARKAM").separator("__"))
        .build()
        .and_then(|config| config.try_deserialize())
        .map_err(|e| Error::Config(e.to_string()))
}
