//! Synthesis configuration.
//!
//! The config file is optional; every field has a default, so `{}` is a valid
//! config and matches [`SynthConfig::default`]. Free-form tuning knobs live in
//! `params` and are read with the [`params`](crate::params) helpers.

use crate::error::TextureError;
use crate::raster::MAX_SURFACE_DIMENSION;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// How generation seeds are derived from a (color, style) key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedPolicy {
    /// Seed is a pure function of the key; renders are bit-identical across runs.
    #[default]
    Deterministic,
    /// Key seed is mixed with a salt drawn once per cache, so each session
    /// gets fresh textures while repeated lookups within it stay identical.
    PerSession,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SynthConfig {
    pub seed_policy: SeedPolicy,
    /// Side length of full textures, in pixels.
    pub resolution: i32,
    /// Side length of preview thumbnails, in pixels.
    pub preview_resolution: i32,
    pub params: Value,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            seed_policy: SeedPolicy::Deterministic,
            resolution: 1024,
            preview_resolution: 256,
            params: Value::Object(Default::default()),
        }
    }
}

impl SynthConfig {
    /// Parses and validates a JSON config.
    pub fn from_json(json: &str) -> Result<Self, TextureError> {
        let config: SynthConfig =
            serde_json::from_str(json).map_err(|e| TextureError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, TextureError> {
        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        log::debug!("loading config from {}", path.display());
        let contents = std::fs::read_to_string(path)
            .map_err(|e| TextureError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json(&contents)
    }

    pub fn validate(&self) -> Result<(), TextureError> {
        for (name, value) in [
            ("resolution", self.resolution),
            ("preview_resolution", self.preview_resolution),
        ] {
            if !(1..=MAX_SURFACE_DIMENSION).contains(&value) {
                return Err(TextureError::Config(format!(
                    "{name} must be in 1..={MAX_SURFACE_DIMENSION}, got {value}"
                )));
            }
        }
        if !self.params.is_object() {
            return Err(TextureError::Config("params must be a JSON object".into()));
        }
        Ok(())
    }
}

/// Mixes a per-session salt into a key seed (splitmix64 finalizer).
pub fn salted_seed(seed: u64, salt: u64) -> u64 {
    let mut z = seed ^ salt.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = SynthConfig::from_json("{}").unwrap();
        assert_eq!(config, SynthConfig::default());
        assert_eq!(config.seed_policy, SeedPolicy::Deterministic);
        assert_eq!(config.resolution, 1024);
        assert_eq!(config.preview_resolution, 256);
    }

    #[test]
    fn parses_all_fields() {
        let config = SynthConfig::from_json(
            r#"{"seed_policy": "per_session", "resolution": 512,
                "preview_resolution": 64, "params": {"stroke_count": 10}}"#,
        )
        .unwrap();
        assert_eq!(config.seed_policy, SeedPolicy::PerSession);
        assert_eq!(config.resolution, 512);
        assert_eq!(config.params["stroke_count"], 10);
    }

    #[test]
    fn rejects_unknown_fields_and_bad_values() {
        for bad in [
            r#"{"resolutoin": 512}"#,
            r#"{"resolution": 0}"#,
            r#"{"preview_resolution": 9000}"#,
            r#"{"params": [1, 2]}"#,
            r#"{"seed_policy": "random"}"#,
            "not json",
        ] {
            assert!(
                matches!(SynthConfig::from_json(bad), Err(TextureError::Config(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn load_missing_file_gives_defaults() {
        let config = SynthConfig::load(Path::new("/nonexistent/canvas-gallery.json")).unwrap();
        assert_eq!(config, SynthConfig::default());
    }

    #[test]
    fn salted_seed_depends_on_salt() {
        assert_ne!(salted_seed(42, 1), salted_seed(42, 2));
        assert_eq!(salted_seed(42, 7), salted_seed(42, 7));
    }
}
