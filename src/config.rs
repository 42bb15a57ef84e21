//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HV_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use hyperview_core::DisplayColor;
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    /// Starting rotation speed and color
    #[serde(default)]
    pub viewer: ViewerConfig,
    /// Mouse orbit and zoom
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub rendering: RenderingConfig,
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HV_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    ///
    /// Missing files are skipped, so an empty directory yields the defaults
    /// plus any environment overrides.
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

        // HV_VIEWER__ROTATION_SPEED=2.0 -> viewer.rotation_speed = 2.0
        figment = figment.merge(Env::prefixed("HV_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hyperview - Tesseract".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// 3D camera placement and zoom range
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Eye position [x, y, z]
    pub position: [f32; 3],
    /// Point the camera looks at
    pub target: [f32; 3],
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Closest the scroll wheel can bring the eye to the target
    pub min_distance: f32,
    /// Furthest the scroll wheel can move the eye from the target
    pub max_distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 5.0],
            target: [0.0, 0.0, 0.0],
            fov: 60.0,
            near: 0.1,
            far: 100.0,
            min_distance: 1.5,
            max_distance: 30.0,
        }
    }
}

/// Viewer controls at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Initial speed multiplier, snapped to 0.0..=3.0 in steps of 0.1
    pub rotation_speed: f32,
    /// Initial wireframe color as `#rrggbb`
    pub color: DisplayColor,
    /// Longest frame time fed to the rotation, in seconds
    pub max_frame_seconds: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            rotation_speed: 1.0,
            color: DisplayColor::default(),
            max_frame_seconds: 0.25,
        }
    }
}

/// Mouse input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Radians of orbit per pixel of drag
    pub mouse_sensitivity: f32,
    /// Distance multiplier per scroll line
    pub zoom_factor: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 0.005,
            zoom_factor: 0.95,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    pub background_color: DisplayColor,
    /// Vertex marker diameter in world units
    pub point_size: f32,
    /// Edge alpha
    pub line_opacity: f32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: DisplayColor::rgb(0x0a, 0x0a, 0x0f),
            point_size: 0.08,
            line_opacity: 0.8,
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
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.camera.position, [0.0, 0.0, 5.0]);
        assert_eq!(config.camera.fov, 60.0);
        assert_eq!(config.camera.min_distance, 1.5);
        assert_eq!(config.camera.max_distance, 30.0);
        assert_eq!(config.input.mouse_sensitivity, 0.005);
        assert_eq!(config.input.zoom_factor, 0.95);
        assert_eq!(config.viewer.rotation_speed, 1.0);
        assert_eq!(config.viewer.color, DisplayColor::CYAN);
        assert_eq!(config.rendering.background_color.to_hex(), "#0a0a0f");
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("rotation_speed"));
        assert!(toml.contains("color = \"#00ffff\""));
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let config: AppConfig = toml::from_str(
            r##"
            [viewer]
            color = "#ff6b6b"

            [rendering]
            point_size = 0.1

            [input]
            zoom_factor = 0.9
            "##,
        )
        .unwrap();
        assert_eq!(config.viewer.color, DisplayColor::CORAL);
        assert_eq!(config.viewer.rotation_speed, 1.0);
        assert_eq!(config.rendering.point_size, 0.1);
        assert_eq!(config.rendering.line_opacity, 0.8);
        assert_eq!(config.window.title, WindowConfig::default().title);
        assert_eq!(config.input.zoom_factor, 0.9);
        assert_eq!(config.input.mouse_sensitivity, 0.005);
    }

    #[test]
    fn test_bad_color_rejected() {
        let result: Result<AppConfig, _> = toml::from_str(
            r#"
            [viewer]
            color = "cyan"
            "#,
        );
        assert!(result.is_err());
    }
}
