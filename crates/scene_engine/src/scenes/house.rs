//! Flat-colored house: base, roof, door and window
//!
//! Position-only vertices, one geometry object per shape, and a constant
//! color uniform set before each draw.

use crate::render::{
    DrawCommand, GeometryData, ShaderSources, Topology, UniformBinding, VertexLayout,
};
use crate::scene::Scene;

const VERTEX_SHADER: &str = "#version 330 core
layout (location = 0) in vec3 aPos;
void main()
{
   gl_Position = vec4(aPos, 1.0);
}
";

const FRAGMENT_SHADER: &str = "#version 330 core
out vec4 FragColor;
uniform vec4 color;
void main()
{
   FragColor = color;
}
";

/// Two triangles over a quad given as bottom-left, bottom-right, top-right, top-left
const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

#[rustfmt::skip]
const BASE: [f32; 12] = [
    -0.5, -0.5, 0.0,
     0.5, -0.5, 0.0,
     0.5,  0.0, 0.0,
    -0.5,  0.0, 0.0,
];

#[rustfmt::skip]
const ROOF: [f32; 9] = [
    -0.55, 0.0, 0.0,
     0.55, 0.0, 0.0,
     0.0,  0.5, 0.0,
];

#[rustfmt::skip]
const DOOR: [f32; 12] = [
    -0.1, -0.5, 0.0,
     0.1, -0.5, 0.0,
     0.1, -0.1, 0.0,
    -0.1, -0.1, 0.0,
];

#[rustfmt::skip]
const WINDOW: [f32; 12] = [
    0.2,  -0.2,  0.0,
    0.35, -0.2,  0.0,
    0.35, -0.05, 0.0,
    0.2,  -0.05, 0.0,
];

const BASE_COLOR: [f32; 4] = [0.5, 0.35, 0.05, 1.0];
const ROOF_COLOR: [f32; 4] = [0.8, 0.1, 0.1, 1.0];
const DOOR_COLOR: [f32; 4] = [0.3, 0.2, 0.1, 1.0];
const WINDOW_COLOR: [f32; 4] = [0.2, 0.5, 0.7, 1.0];

/// Build the house scene
pub fn house() -> Scene {
    let layout = VertexLayout::position();
    let geometries = vec![
        GeometryData::indexed(layout.clone(), &BASE, &QUAD_INDICES),
        GeometryData::new(layout.clone(), &ROOF),
        GeometryData::indexed(layout.clone(), &DOOR, &QUAD_INDICES),
        GeometryData::indexed(layout, &WINDOW, &QUAD_INDICES),
    ];

    let draws = [
        (BASE_COLOR, QUAD_INDICES.len()),
        (ROOF_COLOR, ROOF.len() / 3),
        (DOOR_COLOR, QUAD_INDICES.len()),
        (WINDOW_COLOR, QUAD_INDICES.len()),
    ]
    .into_iter()
    .enumerate()
    .map(|(geometry, (color, count))| DrawCommand {
        geometry,
        topology: Topology::Triangles,
        first: 0,
        count: count as i32,
        color: Some(color),
    })
    .collect();

    Scene {
        name: "house".to_string(),
        shaders: ShaderSources::new(VERTEX_SHADER, FRAGMENT_SHADER),
        geometries,
        draws,
        uniform: UniformBinding::Color,
    }
}
