//! Frame renderer
//!
//! Owns the scene's GPU resources for the whole run and replays the scene's
//! fixed draw list every frame.

use crate::animation::AnimationState;
use crate::render::backend::GraphicsBackend;
use crate::render::geometry::{DrawCommand, GeometryBuffers};
use crate::render::shader::ShaderProgram;
use crate::render::{RenderError, RenderResult};
use crate::scene::Scene;

/// Name of the per-draw color uniform
pub const COLOR_UNIFORM: &str = "color";

/// Name of the per-frame model matrix uniform
pub const TRANSFORM_UNIFORM: &str = "transform";

/// Which uniform a scene's shaders expect from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UniformBinding {
    /// No uniforms; colors come from vertex data
    #[default]
    None,

    /// `vec4 color`, uploaded before each draw that carries a color
    Color,

    /// `mat4 transform`, uploaded once per frame from the animation state
    Transform,
}

/// Draws one scene every frame
pub struct FrameRenderer<B: GraphicsBackend> {
    program: ShaderProgram<B>,
    geometries: Vec<GeometryBuffers<B>>,
    draws: Vec<DrawCommand>,
    binding: UniformBinding,
}

impl<B: GraphicsBackend> FrameRenderer<B> {
    /// Build the scene's program and upload all of its geometry
    ///
    /// Fails if a draw refers to a geometry object the scene does not have,
    /// or if the backend cannot allocate an object. Resources created before
    /// a failure are released.
    pub fn new(backend: &mut B, scene: &Scene) -> RenderResult<Self> {
        let missing = scene.draws.iter().find(|draw| draw.geometry >= scene.geometries.len());
        if let Some(draw) = missing {
            return Err(RenderError::InvalidScene(format!(
                "scene \"{}\" draws geometry {} but has only {}",
                scene.name,
                draw.geometry,
                scene.geometries.len()
            )));
        }

        let program = ShaderProgram::build(backend, &scene.shaders)?;

        let mut geometries = Vec::with_capacity(scene.geometries.len());
        for data in &scene.geometries {
            match GeometryBuffers::upload(backend, data) {
                Ok(buffers) => geometries.push(buffers),
                Err(e) => {
                    for buffers in geometries.into_iter().rev() {
                        buffers.destroy(backend);
                    }
                    program.destroy(backend);
                    return Err(e);
                }
            }
        }

        log::info!(
            "Scene \"{}\" ready: {} geometry object(s), {} draw(s)",
            scene.name,
            geometries.len(),
            scene.draws.len()
        );

        Ok(Self {
            program,
            geometries,
            draws: scene.draws.clone(),
            binding: scene.uniform,
        })
    }

    /// Number of draw calls issued per frame
    pub fn draw_count(&self) -> usize {
        self.draws.len()
    }

    /// Clear and draw one frame
    ///
    /// Draws are issued strictly in list order. A vertex array is only
    /// rebound when the next draw uses a different geometry object.
    pub fn render_frame(&self, backend: &mut B, clear_color: [f32; 4], state: &AnimationState) {
        backend.clear(clear_color);

        let program = self.program.handle();
        backend.use_program(program);

        if self.binding == UniformBinding::Transform {
            backend.set_uniform_mat4(program, TRANSFORM_UNIFORM, &state.model_matrix());
        }

        let mut bound = None;
        for draw in &self.draws {
            if self.binding == UniformBinding::Color {
                if let Some(color) = draw.color {
                    backend.set_uniform_vec4(program, COLOR_UNIFORM, color);
                }
            }

            let geometry = &self.geometries[draw.geometry];
            let vertex_array = geometry.vertex_array();
            if bound != Some(vertex_array) {
                backend.bind_vertex_array(Some(vertex_array));
                bound = Some(vertex_array);
            }

            if geometry.is_indexed() {
                let offset = GeometryBuffers::<B>::index_offset_bytes(draw.first);
                backend.draw_elements(draw.topology, draw.count, offset);
            } else {
                backend.draw_arrays(draw.topology, draw.first, draw.count);
            }
        }

        log::trace!("Issued {} draw(s)", self.draws.len());
    }

    /// Release geometry (last created first) and then the program
    pub fn destroy(self, backend: &mut B) {
        for buffers in self.geometries.into_iter().rev() {
            buffers.destroy(backend);
        }
        self.program.destroy(backend);
        log::debug!("Released scene resources");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec2;
    use crate::render::geometry::{GeometryData, VertexLayout};
    use crate::render::recording::{Call, RecordingBackend};
    use crate::render::{ShaderSources, Topology};
    use approx::assert_relative_eq;

    const CLEAR: [f32; 4] = [0.2, 0.3, 0.3, 1.0];
    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];

    fn draw(geometry: usize, topology: Topology, first: i32, count: i32) -> DrawCommand {
        DrawCommand { geometry, topology, first, count, color: None }
    }

    fn color_uniform(value: [f32; 4]) -> Call {
        Call::UniformVec4 { program: 1, name: "color".to_string(), value }
    }

    fn two_object_scene(uniform: UniformBinding) -> Scene {
        Scene {
            name: "test".to_string(),
            shaders: ShaderSources::new("vs", "fs"),
            geometries: vec![
                GeometryData::indexed(
                    VertexLayout::position(),
                    &[0.0; 12],
                    &[0, 1, 2, 2, 3, 0],
                ),
                GeometryData::new(VertexLayout::position(), &[0.0; 9]),
            ],
            draws: vec![
                DrawCommand { color: Some(RED), ..draw(0, Topology::Triangles, 0, 6) },
                DrawCommand { color: Some(GREEN), ..draw(1, Topology::Triangles, 0, 3) },
            ],
            uniform,
        }
    }

    fn single_object_scene() -> Scene {
        Scene {
            name: "strip".to_string(),
            shaders: ShaderSources::new("vs", "fs"),
            geometries: vec![GeometryData::new(VertexLayout::position_color(), &[0.0; 36])],
            draws: vec![
                draw(0, Topology::TriangleStrip, 0, 4),
                draw(0, Topology::Lines, 4, 2),
            ],
            uniform: UniformBinding::Transform,
        }
    }

    fn frame_calls(scene: &Scene, state: &AnimationState) -> Vec<Call> {
        let mut backend = RecordingBackend::default();
        let renderer = FrameRenderer::new(&mut backend, scene).unwrap();
        backend.calls.clear();
        renderer.render_frame(&mut backend, CLEAR, state);
        backend.calls
    }

    #[test]
    fn test_color_scene_frame_sequence() {
        let scene = two_object_scene(UniformBinding::Color);
        let calls = frame_calls(&scene, &AnimationState::default());

        assert_eq!(
            calls,
            vec![
                Call::Clear(CLEAR),
                Call::UseProgram(1),
                color_uniform(RED),
                Call::BindVertexArray(Some(1)),
                Call::DrawElements { topology: Topology::Triangles, count: 6, offset_bytes: 0 },
                color_uniform(GREEN),
                Call::BindVertexArray(Some(2)),
                Call::DrawArrays { topology: Topology::Triangles, first: 0, count: 3 },
            ]
        );
    }

    #[test]
    fn test_colors_ignored_without_color_binding() {
        let scene = two_object_scene(UniformBinding::None);
        let calls = frame_calls(&scene, &AnimationState::default());
        assert!(!calls
            .iter()
            .any(|call| matches!(call, Call::UniformVec4 { .. } | Call::UniformMat4 { .. })));
    }

    #[test]
    fn test_transform_uploaded_once_before_draws() {
        let state = AnimationState {
            translation: Vec2::new(0.1, -0.2),
            rotation_degrees: 45.0,
            scale: Vec2::new(1.3, 0.7),
        };
        let calls = frame_calls(&single_object_scene(), &state);

        let uniforms: Vec<_> = calls
            .iter()
            .filter(|call| matches!(call, Call::UniformMat4 { .. }))
            .collect();
        assert_eq!(uniforms.len(), 1);
        assert!(matches!(calls[2], Call::UniformMat4 { .. }));

        let Call::UniformMat4 { name, value, .. } = &calls[2] else { unreachable!() };
        assert_eq!(name, "transform");
        let (sin, cos) = 45.0_f32.to_radians().sin_cos();
        let expected = [
            cos * 1.3, sin * 1.3, 0.0, 0.0,
            -sin * 0.7, cos * 0.7, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.1, -0.2, 0.0, 1.0,
        ];
        for (actual, expected) in value.iter().zip(expected) {
            assert_relative_eq!(*actual, expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_shared_vertex_array_bound_once() {
        let calls = frame_calls(&single_object_scene(), &AnimationState::default());

        let binds = calls.iter().filter(|call| matches!(call, Call::BindVertexArray(_))).count();
        assert_eq!(binds, 1);
        assert_eq!(
            calls[calls.len() - 2..],
            [
                Call::DrawArrays { topology: Topology::TriangleStrip, first: 0, count: 4 },
                Call::DrawArrays { topology: Topology::Lines, first: 4, count: 2 },
            ]
        );
    }

    #[test]
    fn test_frames_are_identical_for_same_state() {
        let scene = two_object_scene(UniformBinding::Color);
        let mut backend = RecordingBackend::default();
        let renderer = FrameRenderer::new(&mut backend, &scene).unwrap();
        backend.calls.clear();

        renderer.render_frame(&mut backend, CLEAR, &AnimationState::default());
        let first = std::mem::take(&mut backend.calls);
        renderer.render_frame(&mut backend, CLEAR, &AnimationState::default());

        assert_eq!(first, backend.calls);
    }

    #[test]
    fn test_rejects_draw_of_missing_geometry() {
        let mut scene = single_object_scene();
        scene.draws[1].geometry = 3;
        let mut backend = RecordingBackend::default();

        let result = FrameRenderer::new(&mut backend, &scene);

        assert!(matches!(result, Err(RenderError::InvalidScene(_))));
        assert!(backend.calls.is_empty());
    }

    #[test]
    fn test_failed_upload_releases_everything_created() {
        let scene = two_object_scene(UniformBinding::Color);
        let mut backend = RecordingBackend {
            fail_buffer_after: Some(2),
            ..RecordingBackend::default()
        };

        let result = FrameRenderer::new(&mut backend, &scene);

        assert!(matches!(result, Err(RenderError::ResourceCreationFailed(_))));
        let mut created = Vec::new();
        let mut deleted = Vec::new();
        for call in &backend.calls {
            match call {
                Call::CreateVertexArray(id) => created.push(("vertex array", *id)),
                Call::CreateBuffer { id, .. } => created.push(("buffer", *id)),
                Call::LinkProgram { id, .. } => created.push(("program", *id)),
                Call::DeleteVertexArray(id) => deleted.push(("vertex array", *id)),
                Call::DeleteBuffer(id) => deleted.push(("buffer", *id)),
                Call::DeleteProgram(id) => deleted.push(("program", *id)),
                _ => {}
            }
        }
        created.sort_unstable();
        deleted.sort_unstable();
        assert_eq!(created, deleted);
        assert!(created.contains(&("vertex array", 2)));
    }

    #[test]
    fn test_destroy_releases_geometry_then_program() {
        let scene = two_object_scene(UniformBinding::Color);
        let mut backend = RecordingBackend::default();
        let renderer = FrameRenderer::new(&mut backend, &scene).unwrap();
        backend.calls.clear();

        renderer.destroy(&mut backend);

        assert_eq!(
            backend.calls,
            vec![
                Call::DeleteVertexArray(2),
                Call::DeleteBuffer(3),
                Call::DeleteVertexArray(1),
                Call::DeleteBuffer(1),
                Call::DeleteBuffer(2),
                Call::DeleteProgram(1),
            ]
        );
    }
}
