//! Backend-agnostic window trait

use crate::input::KeySource;

/// Interface the render loop needs from a window
///
/// Key state comes from the [`KeySource`] supertrait. All calls happen on the
/// thread that owns the window.
pub trait WindowBackend: KeySource {
    /// Check if the window should close
    ///
    /// True once the user closed the window or [`set_should_close`](Self::set_should_close)
    /// was called with `true`.
    fn should_close(&self) -> bool;

    /// Set whether the window should close
    fn set_should_close(&mut self, should_close: bool);

    /// Process pending platform events without blocking
    fn poll_events(&mut self);

    /// Present the back buffer
    fn swap_buffers(&mut self);

    /// Current framebuffer size in pixels
    fn framebuffer_size(&self) -> (i32, i32);

    /// Drain framebuffer resizes reported since the last call, oldest first
    fn take_framebuffer_resizes(&mut self) -> Vec<(i32, i32)>;
}
