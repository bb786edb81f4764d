//! Configuration for the dodge core
//!
//! Loaded once from a YAML file by the host port; the core only ever reads
//! it. The bound key lives in the flattened comparison space from
//! [`crate::input::keycode`] (keyboard 0.., mouse 256.., gamepad 266..).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Operator-facing settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DodgeConfig {
    /// Bound dodge control in the flattened key space, or `None` to
    /// disable the dedicated-key sink.
    #[serde(default)]
    pub dodge_key: Option<u32>,

    /// Repurpose the sprint button: tap dodges, hold sprints.
    #[serde(default = "default_use_sprint_button")]
    pub use_sprint_button: bool,

    /// Seconds a press must last before it counts as a sprint hold
    /// rather than a dodge tap.
    #[serde(default = "default_hold_duration")]
    pub sprint_hold_duration: f32,
}

impl Default for DodgeConfig {
    fn default() -> Self {
        Self {
            dodge_key: None,
            use_sprint_button: default_use_sprint_button(),
            sprint_hold_duration: default_hold_duration(),
        }
    }
}

/// Validation failures for operator-supplied settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("sprint_hold_duration must be a positive finite number of seconds, got {0}")]
    InvalidHoldDuration(f32),
}

impl DodgeConfig {
    /// Load and validate configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: DodgeConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?;

        config.validate()?;
        info!(
            "Loaded dodge config: key={:?} use_sprint_button={} hold={}s",
            config.dodge_key, config.use_sprint_button, config.sprint_hold_duration
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.sprint_hold_duration.is_finite() || self.sprint_hold_duration <= 0.0 {
            return Err(ConfigError::InvalidHoldDuration(self.sprint_hold_duration));
        }
        Ok(())
    }
}

fn default_use_sprint_button() -> bool {
    true
}

fn default_hold_duration() -> f32 {
    0.3
}
