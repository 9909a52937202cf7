//! Runtime configuration.
//!
//! Loaded from a JSON file; every field is optional and falls back to the
//! defaults in [`crate::constants`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::camera_controller::FramingSettings;
use crate::constants::*;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Camera framing and motion tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub view_extension: f32,
    pub friction: f32,
    pub drag_smoothing: f32,
    pub stop_speed: f32,
    /// Orthographic half-height (world units)
    pub half_height: f32,
    /// Fixed camera depth, kept through every move
    pub depth: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            view_extension: CAMERA_VIEW_EXTENSION,
            friction: CAMERA_FRICTION,
            drag_smoothing: CAMERA_DRAG_SMOOTHING,
            stop_speed: CAMERA_STOP_SPEED,
            half_height: CAMERA_HALF_HEIGHT,
            depth: CAMERA_DEPTH,
        }
    }
}

impl CameraConfig {
    pub fn framing_settings(&self) -> FramingSettings {
        FramingSettings {
            view_extension: self.view_extension,
            friction: self.friction,
            drag_smoothing: self.drag_smoothing,
            stop_speed: self.stop_speed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Hold time before a press becomes a drag (seconds)
    pub click_to_drag_duration: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            click_to_drag_duration: CLICK_TO_DRAG_DURATION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub node_count: usize,
    /// Nodes are scattered in [-spread, spread] on both axes
    pub spread: f32,
    pub node_radius: f32,
    /// Fixed layout seed; a random one is drawn when absent
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            node_count: BOARD_NODE_COUNT,
            spread: BOARD_SPREAD,
            node_radius: NODE_RADIUS,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub camera: CameraConfig,
    pub input: InputConfig,
    pub board: BoardConfig,
    /// Start the puffin HTTP server
    pub profiling: bool,
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn try_load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load the config file, falling back to defaults when it is missing or broken.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(config) => {
                log::info!("Config loaded from {}", path.display());
                config
            }
            Err(ConfigError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                log::info!("No config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let camera = &self.camera;
        if !(camera.friction > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "camera.friction must be positive, got {}",
                camera.friction
            )));
        }
        if !(camera.half_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "camera.half_height must be positive, got {}",
                camera.half_height
            )));
        }
        if !(camera.drag_smoothing >= 0.0) || !camera.drag_smoothing.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "camera.drag_smoothing must be a finite non-negative rate, got {}",
                camera.drag_smoothing
            )));
        }
        if !camera.view_extension.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "camera.view_extension must be finite, got {}",
                camera.view_extension
            )));
        }
        if !(camera.stop_speed >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "camera.stop_speed must not be negative, got {}",
                camera.stop_speed
            )));
        }
        if !(self.input.click_to_drag_duration >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "input.click_to_drag_duration must not be negative, got {}",
                self.input.click_to_drag_duration
            )));
        }
        if !(self.board.node_radius >= 0.0) || !(self.board.spread >= 0.0) {
            return Err(ConfigError::Invalid(
                "board.node_radius and board.spread must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}
