//! Per-scene animation state
//!
//! The state is a plain struct owned by the engine. The input handler mutates
//! it once per frame and the renderer reads it when composing the model
//! transform. Values are never clamped: repeated input can drive the scale
//! through zero into negative values, which mirrors the geometry.

use serde::{Deserialize, Serialize};

use crate::foundation::math::{model_matrix, Mat4, Vec2};

/// Translation, rotation and scale applied to an animated scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationState {
    /// Translation in normalized device coordinates
    pub translation: Vec2,

    /// Rotation about the z axis in degrees, counter-clockwise
    pub rotation_degrees: f32,

    /// Scale factors along x and y
    pub scale: Vec2,
}

impl AnimationState {
    /// State with no translation, no rotation and the given uniform scale
    pub fn with_uniform_scale(scale: f32) -> Self {
        Self {
            translation: Vec2::zeros(),
            rotation_degrees: 0.0,
            scale: Vec2::new(scale, scale),
        }
    }

    /// Compose the model matrix `T(translation) · R(rotation) · S(scale, 1)`
    pub fn model_matrix(&self) -> Mat4 {
        model_matrix(self.translation, self.rotation_degrees, self.scale)
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::with_uniform_scale(1.0)
    }
}
