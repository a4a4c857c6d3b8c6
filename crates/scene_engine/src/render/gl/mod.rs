//! OpenGL backend
//!
//! Implements [`GraphicsBackend`] on top of a `glow` function table loaded
//! from the window's context. All calls must happen on the thread where that
//! context is current.

use glow::HasContext;

use crate::foundation::math::Mat4;
use crate::render::backend::{BufferTarget, GraphicsBackend, ShaderStage, Topology};
use crate::render::geometry::VertexAttribute;
use crate::render::{RenderError, RenderResult};

/// OpenGL 3.3 core implementation of the rendering backend
pub struct GlBackend {
    gl: glow::Context,
}

impl GlBackend {
    /// Wrap a loaded function table
    pub fn new(gl: glow::Context) -> Self {
        // SAFETY: reading strings from a valid, current context.
        let (version, renderer) = unsafe {
            (gl.get_parameter_string(glow::VERSION), gl.get_parameter_string(glow::RENDERER))
        };
        log::info!("OpenGL {version} on {renderer}");
        Self { gl }
    }
}

const fn gl_stage(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    }
}

const fn gl_target(target: BufferTarget) -> u32 {
    match target {
        BufferTarget::Array => glow::ARRAY_BUFFER,
        BufferTarget::ElementArray => glow::ELEMENT_ARRAY_BUFFER,
    }
}

const fn gl_mode(topology: Topology) -> u32 {
    match topology {
        Topology::Triangles => glow::TRIANGLES,
        Topology::TriangleStrip => glow::TRIANGLE_STRIP,
        Topology::Lines => glow::LINES,
    }
}

// SAFETY (all blocks below): every handle passed to GL was created by this
// same context, and the context is current on this thread for the lifetime
// of the backend.
impl GraphicsBackend for GlBackend {
    type Shader = <glow::Context as HasContext>::Shader;
    type Program = <glow::Context as HasContext>::Program;
    type Buffer = <glow::Context as HasContext>::Buffer;
    type VertexArray = <glow::Context as HasContext>::VertexArray;

    fn compile_shader(&mut self, stage: ShaderStage, source: &str) -> RenderResult<Self::Shader> {
        unsafe {
            let shader = self.gl.create_shader(gl_stage(stage)).map_err(|e| {
                RenderError::ResourceCreationFailed(format!("{} shader: {e}", stage.name()))
            })?;
            self.gl.shader_source(shader, source);
            self.gl.compile_shader(shader);
            Ok(shader)
        }
    }

    fn shader_compile_status(&self, shader: Self::Shader) -> bool {
        unsafe { self.gl.get_shader_compile_status(shader) }
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        unsafe { self.gl.get_shader_info_log(shader) }
    }

    fn delete_shader(&mut self, shader: Self::Shader) {
        unsafe { self.gl.delete_shader(shader) }
    }

    fn link_program(&mut self, shaders: &[Self::Shader]) -> RenderResult<Self::Program> {
        unsafe {
            let program = self
                .gl
                .create_program()
                .map_err(|e| RenderError::ResourceCreationFailed(format!("program: {e}")))?;
            for &shader in shaders {
                self.gl.attach_shader(program, shader);
            }
            self.gl.link_program(program);
            Ok(program)
        }
    }

    fn program_link_status(&self, program: Self::Program) -> bool {
        unsafe { self.gl.get_program_link_status(program) }
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        unsafe { self.gl.get_program_info_log(program) }
    }

    fn delete_program(&mut self, program: Self::Program) {
        unsafe { self.gl.delete_program(program) }
    }

    fn create_vertex_array(&mut self) -> RenderResult<Self::VertexArray> {
        unsafe {
            self.gl
                .create_vertex_array()
                .map_err(|e| RenderError::ResourceCreationFailed(format!("vertex array: {e}")))
        }
    }

    fn bind_vertex_array(&mut self, vertex_array: Option<Self::VertexArray>) {
        unsafe { self.gl.bind_vertex_array(vertex_array) }
    }

    fn delete_vertex_array(&mut self, vertex_array: Self::VertexArray) {
        unsafe { self.gl.delete_vertex_array(vertex_array) }
    }

    fn create_buffer(&mut self, target: BufferTarget, data: &[u8]) -> RenderResult<Self::Buffer> {
        unsafe {
            let buffer = self.gl.create_buffer().map_err(|e| {
                RenderError::ResourceCreationFailed(format!("{target:?} buffer: {e}"))
            })?;
            self.gl.bind_buffer(gl_target(target), Some(buffer));
            self.gl.buffer_data_u8_slice(gl_target(target), data, glow::STATIC_DRAW);
            Ok(buffer)
        }
    }

    fn bind_buffer(&mut self, target: BufferTarget, buffer: Option<Self::Buffer>) {
        unsafe { self.gl.bind_buffer(gl_target(target), buffer) }
    }

    fn delete_buffer(&mut self, buffer: Self::Buffer) {
        unsafe { self.gl.delete_buffer(buffer) }
    }

    fn enable_vertex_attribute(&mut self, attribute: &VertexAttribute, stride_bytes: i32) {
        unsafe {
            self.gl.vertex_attrib_pointer_f32(
                attribute.location,
                attribute.components,
                glow::FLOAT,
                false,
                stride_bytes,
                attribute.offset_bytes(),
            );
            self.gl.enable_vertex_attrib_array(attribute.location);
        }
    }

    fn set_viewport(&mut self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { self.gl.viewport(x, y, width, height) }
    }

    fn clear(&mut self, color: [f32; 4]) {
        unsafe {
            self.gl.clear_color(color[0], color[1], color[2], color[3]);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }
    }

    fn use_program(&mut self, program: Self::Program) {
        unsafe { self.gl.use_program(Some(program)) }
    }

    fn set_uniform_vec4(&mut self, program: Self::Program, name: &str, value: [f32; 4]) {
        unsafe {
            let location = self.gl.get_uniform_location(program, name);
            self.gl.uniform_4_f32(location.as_ref(), value[0], value[1], value[2], value[3]);
        }
    }

    fn set_uniform_mat4(&mut self, program: Self::Program, name: &str, value: &Mat4) {
        unsafe {
            let location = self.gl.get_uniform_location(program, name);
            self.gl.uniform_matrix_4_f32_slice(location.as_ref(), false, value.as_slice());
        }
    }

    fn draw_arrays(&mut self, topology: Topology, first: i32, count: i32) {
        unsafe { self.gl.draw_arrays(gl_mode(topology), first, count) }
    }

    fn draw_elements(&mut self, topology: Topology, count: i32, offset_bytes: i32) {
        unsafe { self.gl.draw_elements(gl_mode(topology), count, glow::UNSIGNED_INT, offset_bytes) }
    }
}
