//! Math utilities and types
//!
//! Thin aliases over `nalgebra` plus the model transform used by animated
//! scenes. Matrices are column major, which is the layout OpenGL expects
//! when uniforms are uploaded without transposition.

pub use nalgebra::{Rotation3, Vector2, Vector3, Matrix4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Compose a 2D model transform as `translate · rotate_z · scale`.
///
/// The scale is applied first, then the rotation about the z axis, then the
/// translation. `angle_degrees` is counter-clockwise. Z is left untouched
/// (scale factor 1, translation 0).
pub fn model_matrix(translation: Vec2, angle_degrees: f32, scale: Vec2) -> Mat4 {
    let translation = Mat4::new_translation(&Vec3::new(translation.x, translation.y, 0.0));
    let rotation = Rotation3::from_axis_angle(&Vector3::z_axis(), angle_degrees.to_radians())
        .to_homogeneous();
    let scale = Mat4::new_nonuniform_scaling(&Vec3::new(scale.x, scale.y, 1.0));

    translation * rotation * scale
}
