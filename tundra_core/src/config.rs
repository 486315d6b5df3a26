//! Configuration system.
//!
//! Loads scene configuration from JSON strings or files.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Scene settings for headless runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Fixed simulation tick rate.
    #[serde(default = "default_tick_hz")]
    pub tick_hz: u32,
    /// Number of ticks a demo run lasts.
    #[serde(default = "default_ticks")]
    pub ticks: u32,
    /// Static boxes placed in the demo scene.
    #[serde(default = "default_targets")]
    pub targets: u32,
    /// Seed for layout jitter.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Pace ticks against the wall clock.
    #[serde(default)]
    pub realtime: bool,
}

fn default_tick_hz() -> u32 {
    64
}

fn default_ticks() -> u32 {
    128
}

fn default_targets() -> u32 {
    4
}

fn default_seed() -> u64 {
    7
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            tick_hz: default_tick_hz(),
            ticks: default_ticks(),
            targets: default_targets(),
            seed: default_seed(),
            realtime: false,
        }
    }
}

impl SceneConfig {
    /// Parses config from JSON.
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    /// Reads and parses a JSON config file.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let cfg = Self::from_json_str(&text)
            .with_context(|| format!("parse config {}", path.display()))?;
        debug!(path = %path.display(), ?cfg, "Scene config loaded");
        Ok(cfg)
    }

    /// Seconds per tick.
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_hz.max(1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let cfg = SceneConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, SceneConfig::default());
    }

    #[test]
    fn partial_override() {
        let cfg = SceneConfig::from_json_str(r#"{"tick_hz": 30, "realtime": true}"#).unwrap();
        assert_eq!(cfg.tick_hz, 30);
        assert!(cfg.realtime);
        assert_eq!(cfg.targets, 4);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SceneConfig::from_path(Path::new("/nonexistent/scene.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/scene.json"));
    }

    #[test]
    fn zero_tick_rate_does_not_divide_by_zero() {
        let cfg = SceneConfig {
            tick_hz: 0,
            ..Default::default()
        };
        assert_eq!(cfg.tick_dt(), 1.0);
    }
}
