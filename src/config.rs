use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::glm;
use crate::target::PlacementBounds;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(error) => write!(f, "could not read config: {}", error),
            ConfigError::Parse(error) => write!(f, "could not parse config: {}", error),
            ConfigError::Invalid(reason) => write!(f, "invalid config: {}", reason),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(error) => Some(error),
            ConfigError::Parse(error) => Some(error),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(error: std::io::Error) -> Self {
        ConfigError::Io(error)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::Parse(error)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            title: "Aim Trainer - OpenGL".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    pub count: usize,
    #[serde(flatten)]
    pub bounds: PlacementBounds,
    pub radius: f64,
    /// seed for target placement, placement differs on every run if
    /// not set
    pub seed: Option<u64>,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            count: 10,
            bounds: PlacementBounds::default(),
            radius: 0.25,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: glm::DVec3,
    pub movement_speed: f64,
    pub mouse_sensitivity: f64,
    /// vertical field of view in degrees
    pub fov: f64,
    pub near_plane: f64,
    pub far_plane: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: glm::vec3(0.0, 0.0, 3.0),
            movement_speed: 5.0,
            mouse_sensitivity: 0.1,
            fov: 45.0,
            near_plane: 0.1,
            far_plane: 100.0,
        }
    }
}

impl CameraConfig {
    /// Camera looking down the negative z axis towards the targets
    pub fn build_camera(&self) -> Camera {
        let mut camera = Camera::new(
            self.position,
            glm::vec3(0.0, 1.0, 0.0),
            -90.0,
            0.0,
            self.fov,
        );
        camera.set_movement_speed(self.movement_speed);
        camera.set_mouse_sensitivity(self.mouse_sensitivity);
        camera.set_near_plane(self.near_plane);
        camera.set_far_plane(self.far_plane);
        camera
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub targets: TargetConfig,
    pub camera: CameraConfig,
}

impl Config {
    /// Load the config from a json file. Fields missing in the file
    /// take their default values.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if !self.targets.bounds.is_valid() {
            return Err(ConfigError::Invalid(format!(
                "target bounds must be finite with min <= max and a finite width, got {:?}",
                self.targets.bounds
            )));
        }
        if !(self.targets.radius.is_finite() && self.targets.radius > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "target radius must be positive, got {}",
                self.targets.radius
            )));
        }
        if !(self.camera.fov > 0.0 && self.camera.fov < 180.0) {
            return Err(ConfigError::Invalid(format!(
                "camera fov must be within (0, 180) degrees, got {}",
                self.camera.fov
            )));
        }
        if !(self.camera.movement_speed.is_finite() && self.camera.mouse_sensitivity.is_finite())
        {
            return Err(ConfigError::Invalid(
                "camera speed and sensitivity must be finite".to_string(),
            ));
        }
        if !(self.camera.near_plane > 0.0
            && self.camera.far_plane.is_finite()
            && self.camera.near_plane < self.camera.far_plane)
        {
            return Err(ConfigError::Invalid(format!(
                "camera clipping planes must satisfy 0 < near < far, got near {} far {}",
                self.camera.near_plane, self.camera.far_plane
            )));
        }
        if !self.camera.position.iter().all(|v| v.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "camera position must be finite, got {:?}",
                self.camera.position
            )));
        }
        Ok(())
    }
}
