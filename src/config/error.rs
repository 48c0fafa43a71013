use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirResolution,

    #[error("Failed to read config file '{0}'")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse config file '{0}'")]
    Parse(PathBuf, #[source] Box<toml::de::Error>),

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("No API key configured for {provider}; set {env_var} or add `{key}` to the config file")]
    MissingApiKey {
        provider: &'static str,
        env_var: &'static str,
        key: &'static str,
    },
}
