//! Backend abstraction traits for the rendering system
//!
//! This module defines the trait that rendering backends must implement to
//! provide a consistent interface for the shader builder, the geometry
//! upload and the frame renderer. Handles are associated types so each
//! backend keeps its own native object names.

use std::fmt::Debug;

use crate::foundation::math::Mat4;
use crate::render::geometry::VertexAttribute;
use crate::render::RenderResult;

/// Programmable pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Fragment shader
    Fragment,
}

impl ShaderStage {
    /// Lower-case stage name used in diagnostics
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::Fragment => "fragment",
        }
    }
}

/// How a flat vertex sequence is grouped into primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Independent triangles, three vertices each
    Triangles,
    /// Strip where every vertex after the second forms a triangle
    TriangleStrip,
    /// Independent line segments, two vertices each
    Lines,
}

/// Buffer binding point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferTarget {
    /// Per-vertex attribute data
    Array,
    /// Index data for indexed draws
    ElementArray,
}

/// Main rendering backend trait
pub trait GraphicsBackend {
    /// Compiled shader object
    type Shader: Copy + Debug;
    /// Linked program object
    type Program: Copy + Debug;
    /// GPU buffer object
    type Buffer: Copy + Debug;
    /// Vertex array (attribute layout) object
    type VertexArray: Copy + Debug + PartialEq;

    /// Create a shader object for `stage` and compile `source` into it
    fn compile_shader(&mut self, stage: ShaderStage, source: &str) -> RenderResult<Self::Shader>;

    /// Whether the last compilation of `shader` succeeded
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;

    /// Compiler output for `shader`
    fn shader_info_log(&self, shader: Self::Shader) -> String;

    /// Release a shader object
    fn delete_shader(&mut self, shader: Self::Shader);

    /// Create a program, attach `shaders` and link it
    fn link_program(&mut self, shaders: &[Self::Shader]) -> RenderResult<Self::Program>;

    /// Whether the last link of `program` succeeded
    fn program_link_status(&self, program: Self::Program) -> bool;

    /// Linker output for `program`
    fn program_info_log(&self, program: Self::Program) -> String;

    /// Release a program object
    fn delete_program(&mut self, program: Self::Program);

    /// Create a vertex array object
    fn create_vertex_array(&mut self) -> RenderResult<Self::VertexArray>;

    /// Bind a vertex array, or unbind with `None`
    fn bind_vertex_array(&mut self, vertex_array: Option<Self::VertexArray>);

    /// Release a vertex array object
    fn delete_vertex_array(&mut self, vertex_array: Self::VertexArray);

    /// Create a buffer, bind it to `target` and upload `data` as static draw data
    ///
    /// The buffer stays bound so an element buffer is captured by the
    /// currently bound vertex array.
    fn create_buffer(&mut self, target: BufferTarget, data: &[u8]) -> RenderResult<Self::Buffer>;

    /// Bind a buffer to `target`, or unbind with `None`
    fn bind_buffer(&mut self, target: BufferTarget, buffer: Option<Self::Buffer>);

    /// Release a buffer object
    fn delete_buffer(&mut self, buffer: Self::Buffer);

    /// Describe and enable one float attribute of the bound array buffer
    fn enable_vertex_attribute(&mut self, attribute: &VertexAttribute, stride_bytes: i32);

    /// Set the viewport rectangle in framebuffer pixels
    fn set_viewport(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// Clear the color buffer to `color`
    fn clear(&mut self, color: [f32; 4]);

    /// Make `program` current
    fn use_program(&mut self, program: Self::Program);

    /// Upload a vec4 uniform of the current program by name
    fn set_uniform_vec4(&mut self, program: Self::Program, name: &str, value: [f32; 4]);

    /// Upload a mat4 uniform of the current program by name, column major
    fn set_uniform_mat4(&mut self, program: Self::Program, name: &str, value: &Mat4);

    /// Draw `count` vertices starting at `first` from the bound vertex array
    fn draw_arrays(&mut self, topology: Topology, first: i32, count: i32);

    /// Draw `count` `u32` indices starting `offset_bytes` into the bound element buffer
    fn draw_elements(&mut self, topology: Topology, count: i32, offset_bytes: i32);
}
