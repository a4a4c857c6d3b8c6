//! Scene descriptions
//!
//! A scene is everything the renderer needs, described as data: shader
//! sources, geometry objects and the ordered draw list.

use crate::render::{DrawCommand, GeometryData, ShaderSources, UniformBinding};

/// A fixed scene: built once, drawn every frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Name used in log messages
    pub name: String,
    /// Vertex and fragment shader sources
    pub shaders: ShaderSources,
    /// Geometry objects, each uploaded into its own vertex array
    pub geometries: Vec<GeometryData>,
    /// Draws in painter's order; later draws cover earlier ones
    pub draws: Vec<DrawCommand>,
    /// Uniform the shaders expect from the host
    pub uniform: UniformBinding,
}

impl Scene {
    /// Total vertices across all geometry objects
    pub fn vertex_count(&self) -> usize {
        self.geometries.iter().map(GeometryData::vertex_count).sum()
    }
}
