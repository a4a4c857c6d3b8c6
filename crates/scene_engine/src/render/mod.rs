//! # Rendering System
//!
//! Backend-agnostic rendering for fixed 2D scenes.
//!
//! ## Architecture
//!
//! - **GraphicsBackend**: the handful of GPU calls the scenes need
//! - **ShaderProgram**: compiles and links the scene's shader pair
//! - **GeometryBuffers**: one-time upload of vertex and index data
//! - **FrameRenderer**: clears, sets uniforms and replays the draw list
//! - **GlBackend**: OpenGL implementation on top of `glow`
//!
//! No depth test and no blending are configured. Draw order alone decides
//! which shape ends up on top.

pub mod backend;
pub mod geometry;
pub mod gl;
pub mod renderer;
pub mod shader;

#[cfg(test)]
pub(crate) mod recording;

pub use backend::{BufferTarget, GraphicsBackend, ShaderStage, Topology};
pub use geometry::{
    DrawCommand, GeometryBuffers, GeometryBuilder, GeometryData, VertexAttribute, VertexLayout,
};
pub use gl::GlBackend;
pub use renderer::{FrameRenderer, UniformBinding};
pub use shader::{ShaderDiagnostic, ShaderProgram, ShaderSources, INFO_LOG_CAPACITY};

use thiserror::Error;

/// Rendering system errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// A GPU object (buffer, vertex array, shader, program) could not be created
    #[error("Resource creation failed: {0}")]
    ResourceCreationFailed(String),

    /// A scene description refers to data it does not contain
    #[error("Invalid scene: {0}")]
    InvalidScene(String),
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
