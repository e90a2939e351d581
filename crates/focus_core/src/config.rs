//! Runtime configuration
//!
//! Loaded from a TOML file such as:
//!
//! ```toml
//! [attach]
//! threshold = 0.08
//! surface_inset = 0.03
//!
//! [pose_sync]
//! interval = 0.2
//! ```
//!
//! Every field is optional and falls back to its default.

use crate::error::{Error, Result};
use crate::geometry::DEFAULT_SURFACE_INSET;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level configuration
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct FocusConfig {
    #[serde(default)]
    pub attach: AttachConfig,
    #[serde(default)]
    pub pose_sync: PoseSyncConfig,
}

/// Board attachment tuning
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AttachConfig {
    /// Distance (meters) under which a grabbed tool sticks to a board
    #[serde(default = "default_threshold")]
    pub threshold: f32,
    /// Offset (meters) applied along the board normal for the inside test
    #[serde(default = "default_surface_inset")]
    pub surface_inset: f32,
}

fn default_threshold() -> f32 {
    0.08
}

fn default_surface_inset() -> f32 {
    DEFAULT_SURFACE_INSET
}

impl Default for AttachConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            surface_inset: default_surface_inset(),
        }
    }
}

/// Pose persistence throttling
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PoseSyncConfig {
    /// Seconds between pose writes for grabbed tools
    #[serde(default = "default_interval")]
    pub interval: f32,
}

fn default_interval() -> f32 {
    0.2
}

impl Default for PoseSyncConfig {
    fn default() -> Self {
        Self {
            interval: default_interval(),
        }
    }
}

impl FocusConfig {
    /// Parse and validate a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: FocusConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Reject values the systems cannot work with
    pub fn validate(&self) -> Result<()> {
        let attach = &self.attach;
        if !(attach.threshold.is_finite() && attach.threshold > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "attach.threshold must be a positive distance, got {}",
                attach.threshold
            )));
        }
        if !(attach.surface_inset.is_finite() && attach.surface_inset >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "attach.surface_inset must be zero or positive, got {}",
                attach.surface_inset
            )));
        }
        if !(self.pose_sync.interval.is_finite() && self.pose_sync.interval > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "pose_sync.interval must be positive, got {}",
                self.pose_sync.interval
            )));
        }
        Ok(())
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
