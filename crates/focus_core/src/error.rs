//! Error types for focus_core

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced outside the frame loop
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read a config file
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::FocusConfig`]
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Failed to serialize a config
    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Config parsed but holds unusable values
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for focus_core operations
pub type Result<T> = std::result::Result<T, Error>;
