//! Scene configuration.
//!
//! Plain struct with defaults matching the reference scripts. An optional
//! `octave3d.toml` in the working directory overrides any subset of fields.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::collatz::DEFAULT_MAX_STEPS;
use crate::engine::pipeline::OctaveEngine;
use crate::error::{OctaveError, Result};
use crate::overlay::OverlayConstants;

/// File name looked up in the working directory at startup.
pub const CONFIG_FILE: &str = "octave3d.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Seeds `1..=seed_count` are generated.
    pub seed_count: u64,
    /// Height between consecutive depths.
    pub stack_spacing: f64,
    /// Generator iteration cap.
    pub max_steps: usize,
    /// Half-width of the observer cone, in degrees.
    pub threshold_deg: f64,
    /// Observer angle at startup, in degrees.
    pub initial_observer_deg: f64,
    /// CSV target for visible-node export.
    pub export_path: PathBuf,
    /// PNG target for the residual snapshot.
    pub snapshot_path: PathBuf,
    pub constants: OverlayConstants,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed_count: 20,
            stack_spacing: 1.0,
            max_steps: DEFAULT_MAX_STEPS,
            threshold_deg: 15.0,
            initial_observer_deg: 0.0,
            export_path: PathBuf::from("visible_nodes.csv"),
            snapshot_path: PathBuf::from("octave3d_residual.png"),
            constants: OverlayConstants::default(),
        }
    }
}

impl SceneConfig {
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| OctaveError::Config {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|e| OctaveError::io(path, e))?;
        Self::from_toml_str(&text, path)
    }

    /// Load [`CONFIG_FILE`], falling back to defaults on any error.
    pub fn discover() -> Self {
        match Self::load(Path::new(CONFIG_FILE)) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Cone half-width in radians.
    pub fn threshold_rad(&self) -> f64 {
        self.threshold_deg.to_radians()
    }

    /// Engine configured from this scene.
    pub fn engine(&self) -> OctaveEngine {
        OctaveEngine::new(self.seed_count)
            .with_spacing(self.stack_spacing)
            .with_max_steps(self.max_steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_run() {
        let cfg = SceneConfig::default();
        assert_eq!(cfg.seed_count, 20);
        assert_eq!(cfg.stack_spacing, 1.0);
        assert!((cfg.threshold_rad() - std::f64::consts::PI / 12.0).abs() < 1e-15);
        assert_eq!(cfg.export_path, PathBuf::from("visible_nodes.csv"));
    }

    #[test]
    fn partial_override() {
        let text = r#"
            seed_count = 5
            export_path = "out.csv"

            [constants]
            hqs = 0.3
        "#;
        let cfg = SceneConfig::from_toml_str(text, Path::new("test.toml")).unwrap();
        assert_eq!(cfg.seed_count, 5);
        assert_eq!(cfg.export_path, PathBuf::from("out.csv"));
        assert_eq!(cfg.constants.hqs, 0.3);
        assert_eq!(cfg.constants.lz, OverlayConstants::default().lz);
        assert_eq!(cfg.threshold_deg, 15.0);
    }

    #[test]
    fn malformed_is_config_error() {
        let err = SceneConfig::from_toml_str("seed_count = \"many\"", Path::new("bad.toml"))
            .unwrap_err();
        assert!(matches!(err, OctaveError::Config { .. }));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("octave3d-no-such-config.toml");
        let _ = std::fs::remove_file(&path);
        assert_eq!(SceneConfig::load(&path).unwrap(), SceneConfig::default());
    }

    #[test]
    fn engine_follows_config() {
        let cfg = SceneConfig {
            seed_count: 3,
            ..SceneConfig::default()
        };
        assert_eq!(cfg.engine().build().unwrap().len(), 1 + 2 + 8);
    }
}
