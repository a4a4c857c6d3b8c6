//! Building facade with per-vertex colors and a user-controlled transform
//!
//! All parts live in one interleaved position+color buffer. Each part is a
//! contiguous run of vertices drawn with a single call, so the draw list is
//! derived from the part sizes.

use crate::render::{GeometryBuilder, ShaderSources, Topology, UniformBinding, VertexLayout};
use crate::scene::Scene;

const VERTEX_SHADER: &str = "#version 330 core
layout (location = 0) in vec3 aPos;
layout (location = 1) in vec3 aColor;
out vec3 colorInfo;
uniform mat4 transform;
void main()
{
   gl_Position = transform * vec4(aPos, 1.0);
   colorInfo = aColor;
}
";

const FRAGMENT_SHADER: &str = "#version 330 core
in vec3 colorInfo;
out vec4 FragColor;
void main()
{
   FragColor = vec4(colorInfo, 1.0f);
}
";

// x, y, z, r, g, b

#[rustfmt::skip]
const FACADE: [f32; 24] = [
     0.3, -0.5, 0.0,  0.6, 0.5, 0.74,
    -0.3, -0.5, 0.0,  0.6, 0.5, 0.74,
     0.3,  0.5, 0.0,  0.6, 0.5, 0.74,
    -0.3,  0.5, 0.0,  0.6, 0.5, 0.74,
];

#[rustfmt::skip]
const WINDOW_BOTTOM_LEFT: [f32; 24] = [
    -0.1, -0.3, 0.0,  0.0, 1.0, 1.0,
    -0.1, -0.2, 0.0,  0.0, 1.0, 1.0,
    -0.2, -0.3, 0.0,  0.0, 1.0, 1.0,
    -0.2, -0.2, 0.0,  0.0, 1.0, 1.0,
];

#[rustfmt::skip]
const WINDOW_BOTTOM_RIGHT: [f32; 24] = [
    0.2, -0.3, 0.0,  0.0, 1.0, 1.0,
    0.1, -0.3, 0.0,  0.0, 1.0, 1.0,
    0.2, -0.2, 0.0,  0.0, 1.0, 1.0,
    0.1, -0.2, 0.0,  0.0, 1.0, 1.0,
];

#[rustfmt::skip]
const WINDOW_TOP_RIGHT: [f32; 24] = [
    0.2, 0.2, 0.0,  0.0, 1.0, 1.0,
    0.1, 0.2, 0.0,  0.0, 1.0, 1.0,
    0.2, 0.3, 0.0,  0.0, 1.0, 1.0,
    0.1, 0.3, 0.0,  0.0, 1.0, 1.0,
];

#[rustfmt::skip]
const WINDOW_TOP_LEFT: [f32; 24] = [
    -0.1, 0.2, 0.0,  0.0, 1.0, 1.0,
    -0.2, 0.2, 0.0,  0.0, 1.0, 1.0,
    -0.1, 0.3, 0.0,  0.0, 1.0, 1.0,
    -0.2, 0.3, 0.0,  0.0, 1.0, 1.0,
];

#[rustfmt::skip]
const BOTTOM_BAR: [f32; 24] = [
    -0.45, -0.54, 0.0,  0.25, 0.25, 0.25,
    -0.45, -0.5,  0.0,  0.25, 0.25, 0.25,
     0.34, -0.54, 0.0,  0.25, 0.25, 0.25,
     0.34, -0.5,  0.0,  0.25, 0.25, 0.25,
];

#[rustfmt::skip]
const TOP_STAIR: [f32; 24] = [
    0.1, 0.5, 0.0,  0.21, 0.21,  0.21,
    0.1, 0.6, 0.0,  0.21, 0.21,  0.21,
    0.2, 0.5, 0.0,  1.0,  0.612, 0.506,
    0.2, 0.6, 0.0,  1.0,  0.612, 0.506,
];

#[rustfmt::skip]
const TOP_ROOF: [f32; 18] = [
    0.075, 0.6,  0.0,  0.23, 0.43, 0.55,
    0.225, 0.6,  0.0,  0.23, 0.43, 0.55,
    0.15,  0.65, 0.0,  0.23, 0.43, 0.55,
];

#[rustfmt::skip]
const DOOR: [f32; 24] = [
    -0.06, -0.5,  0.0,  0.29, 0.21, 0.15,
    -0.06, -0.36, 0.0,  0.29, 0.21, 0.15,
     0.06, -0.5,  0.0,  0.29, 0.21, 0.15,
     0.06, -0.36, 0.0,  0.29, 0.21, 0.15,
];

#[rustfmt::skip]
const MIDLINE: [f32; 24] = [
    -0.3, -0.025, 0.0,  0.21, 0.21, 0.21,
    -0.3,  0.025, 0.0,  0.21, 0.21, 0.21,
     0.3, -0.025, 0.0,  0.0,  0.5,  0.5,
     0.3,  0.025, 0.0,  0.0,  0.5,  0.5,
];

#[rustfmt::skip]
const MIDLINE_STRIPE: [f32; 12] = [
     0.3, 0.0, 0.0,  1.0, 1.0, 1.0,
    -0.3, 0.0, 0.0,  1.0, 1.0, 1.0,
];

#[rustfmt::skip]
const DOOR_ARCH: [f32; 18] = [
    -0.06, -0.36, 0.0,  1.0,  1.0,  1.0,
     0.06, -0.36, 0.0,  1.0,  1.0,  1.0,
     0.0,  -0.4,  0.0,  0.63, 0.27, 0.0,
];

#[rustfmt::skip]
const DOOR_SPLIT: [f32; 12] = [
    0.0, -0.4, 0.0,  1.0, 1.0, 1.0,
    0.0, -0.5, 0.0,  1.0, 1.0, 1.0,
];

#[rustfmt::skip]
const SIDE_WALL: [f32; 30] = [
    -0.3,  0.5, 0.0,  0.6, 0.5, 0.74,
    -0.3,  0.4, 0.0,  0.6, 0.5, 0.74,
    -0.4,  0.4, 0.0,  0.6, 0.5, 0.74,
    -0.3, -0.5, 0.0,  0.6, 0.5, 0.74,
    -0.4, -0.5, 0.0,  0.6, 0.5, 0.74,
];

/// Vertical bar through each window: bottom-left, bottom-right, top-right, top-left
#[rustfmt::skip]
const WINDOW_MULLIONS: [f32; 48] = [
    -0.15, -0.3, 0.0,  0.0, 0.0, 0.0,
    -0.15, -0.2, 0.0,  0.0, 0.0, 0.0,
     0.15, -0.3, 0.0,  0.0, 0.0, 0.0,
     0.15, -0.2, 0.0,  0.0, 0.0, 0.0,
     0.15,  0.2, 0.0,  0.0, 0.0, 0.0,
     0.15,  0.3, 0.0,  0.0, 0.0, 0.0,
    -0.15,  0.2, 0.0,  0.0, 0.0, 0.0,
    -0.15,  0.3, 0.0,  0.0, 0.0, 0.0,
];

#[rustfmt::skip]
const SIDE_MIDLINE: [f32; 24] = [
    -0.3, -0.025, 0.0,  0.21, 0.21, 0.21,
    -0.3,  0.025, 0.0,  0.21, 0.21, 0.21,
    -0.4, -0.05,  0.0,  0.0,  0.5,  0.5,
    -0.4,  0.0,   0.0,  0.0,  0.5,  0.5,
];

#[rustfmt::skip]
const SIDE_MIDLINE_STRIPE: [f32; 12] = [
    -0.4, -0.025, 0.0,  1.0, 1.0, 1.0,
    -0.3,  0.0,   0.0,  1.0, 1.0, 1.0,
];

#[rustfmt::skip]
const CORNER_LINE: [f32; 12] = [
    -0.3,  0.5, 0.0,  0.0, 0.0, 0.0,
    -0.3, -0.5, 0.0,  0.0, 0.0, 0.0,
];

#[rustfmt::skip]
const STAIR_DOOR: [f32; 24] = [
    0.14, 0.5,  0.0,  0.23, 0.43, 0.55,
    0.14, 0.56, 0.0,  0.23, 0.43, 0.55,
    0.16, 0.5,  0.0,  0.23, 0.43, 0.55,
    0.16, 0.56, 0.0,  0.23, 0.43, 0.55,
];

/// Triangular hood above each window, same order as the mullions
#[rustfmt::skip]
const WINDOW_HOODS: [f32; 72] = [
    -0.1,  -0.2,  0.0,  0.0, 0.28, 0.53,
    -0.15, -0.15, 0.0,  0.0, 0.28, 0.53,
    -0.2,  -0.2,  0.0,  0.0, 0.28, 0.53,

     0.15, -0.15, 0.0,  0.0, 0.28, 0.53,
     0.2,  -0.2,  0.0,  0.0, 0.28, 0.53,
     0.1,  -0.2,  0.0,  0.0, 0.28, 0.53,

     0.15,  0.35, 0.0,  0.0, 0.28, 0.53,
     0.2,   0.3,  0.0,  0.0, 0.28, 0.53,
     0.1,   0.3,  0.0,  0.0, 0.28, 0.53,

    -0.15,  0.35, 0.0,  0.0, 0.28, 0.53,
    -0.1,   0.3,  0.0,  0.0, 0.28, 0.53,
    -0.2,   0.3,  0.0,  0.0, 0.28, 0.53,
];

/// Build the building scene
pub fn building() -> Scene {
    let (geometry, draws) = GeometryBuilder::new(0, VertexLayout::position_color())
        .part(Topology::TriangleStrip, &FACADE)
        .part(Topology::TriangleStrip, &WINDOW_BOTTOM_LEFT)
        .part(Topology::TriangleStrip, &WINDOW_BOTTOM_RIGHT)
        .part(Topology::TriangleStrip, &WINDOW_TOP_RIGHT)
        .part(Topology::TriangleStrip, &WINDOW_TOP_LEFT)
        .part(Topology::TriangleStrip, &BOTTOM_BAR)
        .part(Topology::TriangleStrip, &TOP_STAIR)
        .part(Topology::Triangles, &TOP_ROOF)
        .part(Topology::TriangleStrip, &DOOR)
        .part(Topology::TriangleStrip, &MIDLINE)
        .part(Topology::Lines, &MIDLINE_STRIPE)
        .part(Topology::Triangles, &DOOR_ARCH)
        .part(Topology::Lines, &DOOR_SPLIT)
        .part(Topology::TriangleStrip, &SIDE_WALL)
        .part(Topology::Lines, &WINDOW_MULLIONS)
        .part(Topology::TriangleStrip, &SIDE_MIDLINE)
        .part(Topology::Lines, &SIDE_MIDLINE_STRIPE)
        .part(Topology::Lines, &CORNER_LINE)
        .part(Topology::TriangleStrip, &STAIR_DOOR)
        .part(Topology::Triangles, &WINDOW_HOODS)
        .build();

    Scene {
        name: "building".to_string(),
        shaders: ShaderSources::new(VERTEX_SHADER, FRAGMENT_SHADER),
        geometries: vec![geometry],
        draws,
        uniform: UniformBinding::Transform,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::AnimationState;
    use crate::render::recording::{Call, RecordingBackend};
    use crate::render::FrameRenderer;

    use crate::render::Topology::{Lines as L, TriangleStrip as S, Triangles as T};

    /// The facade's draw calls, in order
    #[rustfmt::skip]
    const DRAW_TABLE: [(Topology, i32, i32); 20] = [
        (S, 0, 4), (S, 4, 4), (S, 8, 4), (S, 12, 4), (S, 16, 4),
        (S, 20, 4), (S, 24, 4), (T, 28, 3), (S, 31, 4), (S, 35, 4),
        (L, 39, 2), (T, 41, 3), (L, 44, 2), (S, 46, 5), (L, 51, 8),
        (S, 59, 4), (L, 63, 2), (L, 65, 2), (S, 67, 4), (T, 71, 12),
    ];

    #[test]
    fn test_building_draw_list_matches_table() {
        let scene = building();
        let actual: Vec<_> = scene.draws.iter().map(|d| (d.topology, d.first, d.count)).collect();

        assert_eq!(actual, DRAW_TABLE);
        assert!(scene.draws.iter().all(|d| d.geometry == 0 && d.color.is_none()));
    }

    #[test]
    fn test_building_geometry_is_single_interleaved_buffer() {
        let scene = building();

        assert_eq!(scene.geometries.len(), 1);
        let geometry = &scene.geometries[0];
        assert_eq!(geometry.layout, VertexLayout::position_color());
        assert!(!geometry.is_indexed());
        assert_eq!(geometry.vertices.len() % 6, 0);
        assert_eq!(geometry.vertex_count(), 83);

        let (_, first, count) = DRAW_TABLE[DRAW_TABLE.len() - 1];
        assert_eq!((first + count) as usize, geometry.vertex_count());
    }

    #[test]
    fn test_building_frame_issues_table_in_order() {
        let scene = building();
        let mut backend = RecordingBackend::default();
        let renderer = FrameRenderer::new(&mut backend, &scene).unwrap();
        backend.calls.clear();

        renderer.render_frame(&mut backend, [0.2, 0.3, 0.3, 1.0], &AnimationState::default());

        let expected: Vec<Call> = DRAW_TABLE
            .iter()
            .map(|&(topology, first, count)| Call::DrawArrays { topology, first, count })
            .collect();
        let actual: Vec<Call> = backend.draw_calls().into_iter().cloned().collect();
        assert_eq!(actual, expected);

        let transforms = backend
            .calls
            .iter()
            .filter(|c| matches!(c, Call::UniformMat4 { .. }))
            .count();
        assert_eq!(transforms, 1);
        assert_eq!(renderer.draw_count(), 20);
    }
}
