//! Configuration system
//!
//! Scene settings are plain serde structs. Binaries embed their TOML at
//! compile time and parse it with [`Config::from_toml_str`], so nothing is
//! read from disk while the program runs.

pub use serde::{Serialize, Deserialize};

use crate::animation::AnimationState;
use crate::input::InputConfig;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Parse configuration from TOML text and validate it
    fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML text
    fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Check semantic constraints the type system cannot express
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Parsed but semantically invalid
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Window and context settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,

    /// Initial window width in screen coordinates
    pub width: u32,

    /// Initial window height in screen coordinates
    pub height: u32,

    /// Requested OpenGL version (major, minor), core profile
    pub gl_version: (u32, u32),

    /// Whether the user may resize the window
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Scene".to_string(),
            width: 800,
            height: 600,
            gl_version: (3, 3),
            resizable: true,
        }
    }
}

/// Everything a binary needs to run one scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Window and context settings
    pub window: WindowConfig,

    /// Background color the framebuffer is cleared to each frame (RGBA)
    pub clear_color: [f32; 4],

    /// Key bindings and step sizes
    pub input: InputConfig,

    /// Animation state at startup
    pub initial: AnimationState,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            clear_color: [0.2, 0.3, 0.3, 1.0],
            input: InputConfig::default(),
            initial: AnimationState::default(),
        }
    }
}

impl Config for SceneConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.window.title.is_empty() {
            return Err(ConfigError::Invalid("window title cannot be empty".to_string()));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.window.gl_version.0 < 3 {
            return Err(ConfigError::Invalid(format!(
                "OpenGL {}.{} has no core profile",
                self.window.gl_version.0, self.window.gl_version.1
            )));
        }

        let steps = [
            ("translation_step", self.input.translation_step),
            ("rotation_step", self.input.rotation_step),
            ("scale_step", self.input.scale_step),
        ];
        for (name, value) in steps {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("{name} must be finite")));
            }
        }

        Ok(())
    }
}
