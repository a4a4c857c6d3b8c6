//! Recording backend for GPU-free tests
//!
//! Every trait call is appended to `calls`. Object names are handed out per
//! kind starting at 1, the way OpenGL names them.

use crate::foundation::math::Mat4;
use crate::render::backend::{BufferTarget, GraphicsBackend, ShaderStage, Topology};
use crate::render::geometry::VertexAttribute;
use crate::render::{RenderError, RenderResult};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    CompileShader { id: u32, stage: ShaderStage },
    DeleteShader(u32),
    LinkProgram { id: u32, shaders: Vec<u32> },
    DeleteProgram(u32),
    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    DeleteVertexArray(u32),
    CreateBuffer { id: u32, target: BufferTarget, bytes: usize },
    BindBuffer(BufferTarget, Option<u32>),
    DeleteBuffer(u32),
    EnableVertexAttribute { location: u32, components: i32, stride_bytes: i32, offset_bytes: i32 },
    SetViewport(i32, i32, i32, i32),
    Clear([f32; 4]),
    UseProgram(u32),
    UniformVec4 { program: u32, name: String, value: [f32; 4] },
    UniformMat4 { program: u32, name: String, value: [f32; 16] },
    DrawArrays { topology: Topology, first: i32, count: i32 },
    DrawElements { topology: Topology, count: i32, offset_bytes: i32 },
}

#[derive(Debug, Default)]
pub(crate) struct RecordingBackend {
    pub calls: Vec<Call>,
    /// Stage whose compile status reports failure
    pub failing_stage: Option<ShaderStage>,
    /// Whether link status reports failure
    pub fail_link: bool,
    /// Log returned for failed compiles and links
    pub info_log: String,
    /// Number of buffers created successfully before creation starts failing
    pub fail_buffer_after: Option<u32>,
    pub(crate) shader_stages: Vec<ShaderStage>,
    pub(crate) programs: u32,
    pub(crate) vertex_arrays: u32,
    pub(crate) buffers: u32,
}

impl RecordingBackend {
    pub fn draw_calls(&self) -> Vec<&Call> {
        self.calls
            .iter()
            .filter(|call| matches!(call, Call::DrawArrays { .. } | Call::DrawElements { .. }))
            .collect()
    }
}

impl GraphicsBackend for RecordingBackend {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type VertexArray = u32;

    fn compile_shader(&mut self, stage: ShaderStage, _source: &str) -> RenderResult<u32> {
        self.shader_stages.push(stage);
        let id = self.shader_stages.len() as u32;
        self.calls.push(Call::CompileShader { id, stage });
        Ok(id)
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.failing_stage != Some(self.shader_stages[shader as usize - 1])
    }

    fn shader_info_log(&self, _shader: u32) -> String {
        self.info_log.clone()
    }

    fn delete_shader(&mut self, shader: u32) {
        self.calls.push(Call::DeleteShader(shader));
    }

    fn link_program(&mut self, shaders: &[u32]) -> RenderResult<u32> {
        self.programs += 1;
        self.calls.push(Call::LinkProgram { id: self.programs, shaders: shaders.to_vec() });
        Ok(self.programs)
    }

    fn program_link_status(&self, _program: u32) -> bool {
        !self.fail_link
    }

    fn program_info_log(&self, _program: u32) -> String {
        self.info_log.clone()
    }

    fn delete_program(&mut self, program: u32) {
        self.calls.push(Call::DeleteProgram(program));
    }

    fn create_vertex_array(&mut self) -> RenderResult<u32> {
        self.vertex_arrays += 1;
        self.calls.push(Call::CreateVertexArray(self.vertex_arrays));
        Ok(self.vertex_arrays)
    }

    fn bind_vertex_array(&mut self, vertex_array: Option<u32>) {
        self.calls.push(Call::BindVertexArray(vertex_array));
    }

    fn delete_vertex_array(&mut self, vertex_array: u32) {
        self.calls.push(Call::DeleteVertexArray(vertex_array));
    }

    fn create_buffer(&mut self, target: BufferTarget, data: &[u8]) -> RenderResult<u32> {
        if self.fail_buffer_after.is_some_and(|limit| self.buffers >= limit) {
            return Err(RenderError::ResourceCreationFailed(format!("{target:?} buffer")));
        }
        self.buffers += 1;
        self.calls.push(Call::CreateBuffer { id: self.buffers, target, bytes: data.len() });
        Ok(self.buffers)
    }

    fn bind_buffer(&mut self, target: BufferTarget, buffer: Option<u32>) {
        self.calls.push(Call::BindBuffer(target, buffer));
    }

    fn delete_buffer(&mut self, buffer: u32) {
        self.calls.push(Call::DeleteBuffer(buffer));
    }

    fn enable_vertex_attribute(&mut self, attribute: &VertexAttribute, stride_bytes: i32) {
        self.calls.push(Call::EnableVertexAttribute {
            location: attribute.location,
            components: attribute.components,
            stride_bytes,
            offset_bytes: attribute.offset_bytes(),
        });
    }

    fn set_viewport(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.calls.push(Call::SetViewport(x, y, width, height));
    }

    fn clear(&mut self, color: [f32; 4]) {
        self.calls.push(Call::Clear(color));
    }

    fn use_program(&mut self, program: u32) {
        self.calls.push(Call::UseProgram(program));
    }

    fn set_uniform_vec4(&mut self, program: u32, name: &str, value: [f32; 4]) {
        self.calls.push(Call::UniformVec4 { program, name: name.to_string(), value });
    }

    fn set_uniform_mat4(&mut self, program: u32, name: &str, value: &Mat4) {
        let mut columns = [0.0; 16];
        columns.copy_from_slice(value.as_slice());
        self.calls.push(Call::UniformMat4 { program, name: name.to_string(), value: columns });
    }

    fn draw_arrays(&mut self, topology: Topology, first: i32, count: i32) {
        self.calls.push(Call::DrawArrays { topology, first, count });
    }

    fn draw_elements(&mut self, topology: Topology, count: i32, offset_bytes: i32) {
        self.calls.push(Call::DrawElements { topology, count, offset_bytes });
    }
}
