//! Window management using GLFW
//!
//! Creates a window with an OpenGL core-profile context and exposes the
//! pieces of GLFW the render loop uses.

use glfw::Context;

use super::{WindowBackend, WindowError, WindowResult};
use crate::config::WindowConfig;
use crate::input::{KeyCode, KeySource};

/// Entry point probed before building the GL function table
const LOADER_PROBE: &str = "glClear";

/// GLFW window wrapper with proper resource management
///
/// GLFW is terminated when the last handle to it is dropped, which happens
/// when this wrapper goes out of scope.
pub struct GlfwWindow {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    title: String,
}

impl GlfwWindow {
    /// Create a window with an OpenGL context and make the context current
    pub fn new(config: &WindowConfig) -> WindowResult<Self> {
        let mut glfw = glfw::init(glfw::log_errors)
            .map_err(|e| WindowError::InitializationFailed(format!("{e:?}")))?;

        let (major, minor) = config.gl_version;
        glfw.window_hint(glfw::WindowHint::ContextVersion(major, minor));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
        glfw.window_hint(glfw::WindowHint::Resizable(config.resizable));
        #[cfg(target_os = "macos")]
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));

        let (mut window, events) = glfw
            .create_window(config.width, config.height, &config.title, glfw::WindowMode::Windowed)
            .ok_or_else(|| WindowError::CreationFailed(config.title.clone()))?;

        window.make_current();
        window.set_framebuffer_size_polling(true);

        log::info!(
            "Created window \"{}\" ({}x{}, OpenGL {}.{} core)",
            config.title, config.width, config.height, major, minor
        );

        Ok(Self {
            glfw,
            window,
            events,
            title: config.title.clone(),
        })
    }

    /// Build the OpenGL function table for this window's context
    ///
    /// The context must be current on the calling thread, which [`new`](Self::new)
    /// guarantees.
    pub fn load_gl(&mut self) -> WindowResult<glow::Context> {
        if self.window.get_proc_address(LOADER_PROBE).is_null() {
            return Err(WindowError::LoaderFailed(LOADER_PROBE.to_string()));
        }

        // SAFETY: the context is current and outlives the returned function table
        // for as long as this window is alive.
        let gl = unsafe {
            glow::Context::from_loader_function(|name| {
                self.window.get_proc_address(name) as *const _
            })
        };
        log::info!("Loaded OpenGL functions for \"{}\"", self.title);
        Ok(gl)
    }
}

impl KeySource for GlfwWindow {
    fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.window.get_key(glfw_key(key)) == glfw::Action::Press
    }
}

impl WindowBackend for GlfwWindow {
    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn framebuffer_size(&self) -> (i32, i32) {
        self.window.get_framebuffer_size()
    }

    fn take_framebuffer_resizes(&mut self) -> Vec<(i32, i32)> {
        framebuffer_resizes(glfw::flush_messages(&self.events))
    }
}

impl Drop for GlfwWindow {
    fn drop(&mut self) {
        log::debug!("Destroying window \"{}\"", self.title);
    }
}

fn glfw_key(key: KeyCode) -> glfw::Key {
    match key {
        KeyCode::Escape => glfw::Key::Escape,
        KeyCode::Up => glfw::Key::Up,
        KeyCode::Down => glfw::Key::Down,
        KeyCode::Left => glfw::Key::Left,
        KeyCode::Right => glfw::Key::Right,
        KeyCode::Q => glfw::Key::Q,
        KeyCode::E => glfw::Key::E,
        KeyCode::W => glfw::Key::W,
        KeyCode::S => glfw::Key::S,
    }
}

/// Keep only framebuffer size changes, in arrival order
fn framebuffer_resizes(
    events: impl Iterator<Item = (f64, glfw::WindowEvent)>,
) -> Vec<(i32, i32)> {
    events
        .filter_map(|(_, event)| match event {
            glfw::WindowEvent::FramebufferSize(width, height) => Some((width, height)),
            _ => None,
        })
        .collect()
}
