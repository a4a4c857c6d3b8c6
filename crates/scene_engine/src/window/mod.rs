//! Window and context management
//!
//! The engine talks to the platform through the [`WindowBackend`] trait so
//! the render loop can be driven by a scripted window in tests. The only
//! production implementation is [`GlfwWindow`].

mod backend;
mod glfw_window;

pub use backend::WindowBackend;
pub use glfw_window::GlfwWindow;

use thiserror::Error;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// GLFW itself could not be initialized
    #[error("GLFW initialization failed: {0}")]
    InitializationFailed(String),

    /// The window or its OpenGL context could not be created
    #[error("Failed to create GLFW window \"{0}\"")]
    CreationFailed(String),

    /// OpenGL entry points could not be resolved for the current context
    #[error("Failed to load OpenGL functions: {0} is unavailable")]
    LoaderFailed(String),
}

/// Result type for window operations
pub type WindowResult<T> = Result<T, WindowError>;
