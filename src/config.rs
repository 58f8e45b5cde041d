//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HCUBE_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use hcube_core::{HypercubeEngine, HypercubeError, RotationPlane};
use hcube_render::Camera;
use serde::{Serialize, Deserialize};
use std::path::Path;
use thiserror::Error;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Hypercube configuration
    #[serde(default)]
    pub hypercube: HypercubeConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HCUBE_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // HCUBE_HYPERCUBE__DIMENSION=5 -> hypercube.dimension = 5
        figment = figment.merge(Env::prefixed("HCUBE_").split("__"));

        let config: Self = figment.extract()?;
        config.hypercube.validate()?;
        Ok(config)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Allow the user to resize the window
    pub resizable: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "HCube".to_string(),
            width: 480,
            height: 480,
            resizable: false,
            vsync: true,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Eye position [x, y, z]
    pub eye: [f32; 3],
    /// Look-at target [x, y, z]
    pub target: [f32; 3],
    /// Up direction [x, y, z]
    pub up: [f32; 3],
    /// Field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let camera = Camera::default();
        Self {
            eye: camera.eye,
            target: camera.target,
            up: camera.up,
            fov: camera.fov,
            near: camera.near,
            far: camera.far,
        }
    }
}

impl CameraConfig {
    pub fn to_camera(&self) -> Camera {
        Camera {
            eye: self.eye,
            target: self.target,
            up: self.up,
            fov: self.fov,
            near: self.near,
            far: self.far,
        }
    }
}

/// Hypercube configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HypercubeConfig {
    /// Number of dimensions (at least 3)
    pub dimension: usize,
    /// Perspective focal distance for every collapse step
    pub focal_distance: f64,
    /// Radians of rotation per second of elapsed time
    pub rotation_speed: f64,
    /// Planes rotated every frame
    pub rotation_planes: Vec<RotationPlane>,
    /// Amplitude of the focal distance pulse (0 disables pulsing)
    pub focal_pulse_amplitude: f64,
    /// Frequency of the focal distance pulse in Hz
    pub focal_pulse_frequency: f64,
    /// Clamp perspective denominators to this magnitude (unset = no clamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_denominator: Option<f64>,
    /// Largest elapsed time applied in a single frame, in seconds
    pub max_frame_delta: f64,
}

impl Default for HypercubeConfig {
    fn default() -> Self {
        Self {
            dimension: 4,
            focal_distance: 2.5,
            rotation_speed: 1.0,
            rotation_planes: vec![RotationPlane::ZW],
            focal_pulse_amplitude: 0.0,
            focal_pulse_frequency: 0.0,
            min_denominator: None,
            max_frame_delta: 0.25,
        }
    }
}

impl HypercubeConfig {
    /// Check the numeric settings the animation depends on
    ///
    /// The dimension and rotation planes are checked when the engine is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.focal_distance.is_finite() && self.focal_distance > 0.0) {
            return Err(invalid("focal_distance", "must be a positive number"));
        }
        if !self.rotation_speed.is_finite() {
            return Err(invalid("rotation_speed", "must be finite"));
        }
        if !self.focal_pulse_amplitude.is_finite() {
            return Err(invalid("focal_pulse_amplitude", "must be finite"));
        }
        if self.focal_distance - self.focal_pulse_amplitude.abs() <= 0.0 {
            return Err(invalid(
                "focal_pulse_amplitude",
                "must be smaller than focal_distance",
            ));
        }
        if !(self.focal_pulse_frequency.is_finite() && self.focal_pulse_frequency >= 0.0) {
            return Err(invalid("focal_pulse_frequency", "must be zero or positive"));
        }
        if !(self.max_frame_delta.is_finite() && self.max_frame_delta > 0.0) {
            return Err(invalid("max_frame_delta", "must be a positive number"));
        }
        if let Some(min) = self.min_denominator {
            if !(min.is_finite() && min > 0.0) {
                return Err(invalid("min_denominator", "must be a positive number"));
            }
        }
        Ok(())
    }

    /// Build the engine described by this section
    ///
    /// Planes that need an axis the hypercube does not have are skipped with a
    /// warning, so the default (2, 3) plane leaves a 3-cube static.
    pub fn build_engine(&self) -> Result<HypercubeEngine, HypercubeError> {
        let dimension = self.dimension;
        let planes: Vec<RotationPlane> = self
            .rotation_planes
            .iter()
            .copied()
            .filter(|plane| match plane.validate(dimension) {
                Ok(()) => true,
                Err(e) => {
                    log::warn!("Ignoring rotation plane: {}", e);
                    false
                }
            })
            .collect();

        Ok(HypercubeEngine::new(dimension)?
            .with_rotation_planes(planes)?
            .with_min_denominator(self.min_denominator))
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Edge color [r, g, b]
    pub line_color: [f32; 3],
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            line_color: [1.0, 1.0, 1.0],
            background_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or did not match the schema
    #[error("Configuration error: {0}")]
    Load(#[from] figment::Error),

    /// A value parsed but is out of range
    #[error("Invalid configuration value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 480);
        assert_eq!(config.window.title, "HCube");
        assert_eq!(config.hypercube.dimension, 4);
        assert_eq!(config.hypercube.focal_distance, 2.5);
        assert_eq!(config.hypercube.rotation_planes, vec![RotationPlane::new(2, 3)]);
        assert!(config.hypercube.min_denominator.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("focal_distance"));
        assert!(toml.contains("rotation_planes"));
    }

    #[test]
    fn test_partial_section_uses_defaults() {
        let config: AppConfig = toml::from_str("[hypercube]\ndimension = 6\n").unwrap();
        assert_eq!(config.hypercube.dimension, 6);
        assert_eq!(config.hypercube.focal_distance, 2.5);
        assert_eq!(config.window.height, 480);
    }

    #[test]
    fn test_rotation_planes_from_toml() {
        let config: AppConfig = toml::from_str(
            "[hypercube]\nrotation_planes = [{ first = 2, second = 3 }, { first = 0, second = 4 }]\n",
        )
        .unwrap();
        assert_eq!(
            config.hypercube.rotation_planes,
            vec![RotationPlane::ZW, RotationPlane::new(0, 4)]
        );
    }

    fn hypercube_from(toml: &str) -> HypercubeConfig {
        let config: AppConfig = toml::from_str(toml).unwrap();
        config.hypercube
    }

    #[test]
    fn test_default_hypercube_is_valid() {
        assert!(HypercubeConfig::default().validate().is_ok());
    }

    #[test]
    fn test_three_cube_from_config_builds_static_engine() {
        let config = hypercube_from("[hypercube]\ndimension = 3\n");
        assert_eq!(config.rotation_planes, vec![RotationPlane::ZW]);

        let engine = config.build_engine().unwrap();
        assert_eq!(engine.dimension(), 3);
        assert!(engine.rotation_planes().is_empty());
    }

    #[test]
    fn test_build_engine_keeps_fitting_planes() {
        let config = hypercube_from(
            "[hypercube]\ndimension = 4\nrotation_planes = [{ first = 0, second = 5 }, { first = 2, second = 3 }]\n",
        );
        let engine = config.build_engine().unwrap();
        assert_eq!(engine.rotation_planes(), &[RotationPlane::ZW]);
    }

    #[test]
    fn test_build_engine_rejects_bad_dimension() {
        let config = hypercube_from("[hypercube]\ndimension = 2\n");
        assert!(matches!(
            config.build_engine(),
            Err(HypercubeError::DimensionTooSmall { dimension: 2, .. })
        ));
    }

    #[test]
    fn test_build_engine_forwards_min_denominator() {
        let config = hypercube_from("[hypercube]\nmin_denominator = 0.01\n");
        let mut engine = config.build_engine().unwrap();
        assert!(engine.project(0.5).points().all(|p| p.iter().all(|c| c.is_finite())));
    }

    #[test]
    fn test_negative_max_frame_delta_rejected() {
        let config = hypercube_from("[hypercube]\nmax_frame_delta = -1.0\n");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "max_frame_delta", .. })
        ));
    }

    #[test]
    fn test_non_positive_focal_distance_rejected() {
        for value in ["0.0", "-2.5"] {
            let config = hypercube_from(&format!("[hypercube]\nfocal_distance = {}\n", value));
            assert!(matches!(
                config.validate(),
                Err(ConfigError::Invalid { field: "focal_distance", .. })
            ));
        }
    }

    #[test]
    fn test_pulse_reaching_zero_rejected() {
        let config = hypercube_from(
            "[hypercube]\nfocal_distance = 2.5\nfocal_pulse_amplitude = 2.5\nfocal_pulse_frequency = 1.0\n",
        );
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "focal_pulse_amplitude", .. })
        ));

        let config = hypercube_from("[hypercube]\nfocal_pulse_amplitude = 1.0\n");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let mut config = HypercubeConfig::default();
        config.rotation_speed = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = HypercubeConfig::default();
        config.focal_pulse_frequency = -1.0;
        assert!(config.validate().is_err());

        let mut config = HypercubeConfig::default();
        config.min_denominator = Some(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_error_display() {
        assert_eq!(
            invalid("max_frame_delta", "must be a positive number").to_string(),
            "Invalid configuration value for max_frame_delta: must be a positive number"
        );
    }

    #[test]
    fn test_camera_config_round_trip() {
        let config = CameraConfig::default();
        assert_eq!(config.to_camera(), Camera::default());
    }
}
