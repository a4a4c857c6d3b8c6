//! # Scene Engine
//!
//! A small OpenGL renderer for fixed 2D scenes.
//!
//! ## Features
//!
//! - **OpenGL 3.3 core**: window and context through GLFW, calls through `glow`
//! - **Data-driven scenes**: geometry and draw lists described as plain data
//! - **Polled input**: held keys move, rotate and scale the scene each frame
//! - **Testable loop**: window and GPU sit behind traits
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scene_engine::prelude::*;
//!
//! fn main() -> Result<(), EngineError> {
//!     scene_engine::foundation::logging::init();
//!     let config = SceneConfig::default();
//!     Engine::launch(&scenes::house(), &config)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod foundation;
pub mod config;
pub mod animation;
pub mod input;
pub mod window;
pub mod render;
pub mod scene;
pub mod scenes;

mod engine;

pub use engine::{Engine, EngineError, EngineResult};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Engine, EngineError, EngineResult,
        animation::AnimationState,
        config::{Config, ConfigError, SceneConfig, WindowConfig},
        foundation::math::{Mat4, Vec2, Vec3},
        input::{Controls, InputConfig, InputHandler, KeyCode, KeySource},
        render::{FrameRenderer, GraphicsBackend, UniformBinding},
        scene::Scene,
        scenes,
        window::{GlfwWindow, WindowBackend},
    };
}
