//! Keyboard input handling
//!
//! Input is polled, not event driven: once per frame the handler asks a
//! [`KeySource`] which keys are currently held and applies a fixed step for
//! each one. Holding a key for N frames therefore moves the state by N steps.

use serde::{Deserialize, Serialize};

use crate::animation::AnimationState;

/// Keys the scenes react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Q key
    Q,
    /// E key
    E,
    /// W key
    W,
    /// S key
    S,
}

/// Anything that can report whether a key is currently held down
pub trait KeySource {
    /// Returns true while `key` is pressed
    fn is_key_pressed(&self, key: KeyCode) -> bool;
}

/// Which key bindings a scene responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Controls {
    /// Escape closes the window; nothing else is bound
    #[default]
    EscapeOnly,

    /// Escape closes; arrows translate, Q/E rotate, W/S scale
    Transform,
}

/// Key bindings and per-frame step sizes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Active key bindings
    pub controls: Controls,

    /// Translation applied per frame per held arrow key
    pub translation_step: f32,

    /// Rotation in degrees applied per frame while Q or E is held
    pub rotation_step: f32,

    /// Scale change applied to both axes per frame while W or S is held
    pub scale_step: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            controls: Controls::EscapeOnly,
            translation_step: 0.01,
            rotation_step: 1.0,
            scale_step: 0.01,
        }
    }
}

/// Outcome of one input pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Keep running
    Continue,

    /// Escape was held; the window should close
    Close,
}

/// Applies held keys to the animation state once per frame
#[derive(Debug, Clone)]
pub struct InputHandler {
    config: InputConfig,
}

impl InputHandler {
    /// Create a handler with the given bindings and step sizes
    pub fn new(config: InputConfig) -> Self {
        Self { config }
    }

    /// Read the keys once and update `state`
    ///
    /// The animation state is updated even when escape is held in the same
    /// frame; the caller decides what to do with [`InputAction::Close`].
    pub fn process(&self, keys: &impl KeySource, state: &mut AnimationState) -> InputAction {
        let action = if keys.is_key_pressed(KeyCode::Escape) {
            InputAction::Close
        } else {
            InputAction::Continue
        };

        if self.config.controls == Controls::Transform {
            self.apply_transform_keys(keys, state);
        }

        action
    }

    fn apply_transform_keys(&self, keys: &impl KeySource, state: &mut AnimationState) {
        let InputConfig {
            translation_step,
            rotation_step,
            scale_step,
            ..
        } = self.config;

        if keys.is_key_pressed(KeyCode::Right) {
            state.translation.x += translation_step;
        }
        if keys.is_key_pressed(KeyCode::Left) {
            state.translation.x -= translation_step;
        }
        if keys.is_key_pressed(KeyCode::Up) {
            state.translation.y += translation_step;
        }
        if keys.is_key_pressed(KeyCode::Down) {
            state.translation.y -= translation_step;
        }

        if keys.is_key_pressed(KeyCode::Q) {
            state.rotation_degrees += rotation_step;
        }
        if keys.is_key_pressed(KeyCode::E) {
            state.rotation_degrees -= rotation_step;
        }

        if keys.is_key_pressed(KeyCode::W) {
            state.scale.x += scale_step;
            state.scale.y += scale_step;
        }
        if keys.is_key_pressed(KeyCode::S) {
            state.scale.x -= scale_step;
            state.scale.y -= scale_step;
        }
    }
}
