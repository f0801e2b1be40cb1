use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlackboardError {
    #[error("blackboard type mismatch for key `{key}` (stored type differs from requested)")]
    TypeMismatch { key: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "serde")]
    #[error("failed to parse engine config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid engine config: {0}")]
    Invalid(String),
}
