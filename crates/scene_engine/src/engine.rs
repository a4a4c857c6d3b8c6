//! Render loop
//!
//! [`Engine`] ties a window, a graphics backend and one scene together and
//! runs the per-frame cycle until the window is asked to close:
//!
//! 1. poll keys and update the animation state (escape requests close)
//! 2. clear and draw the scene
//! 3. present and process window events
//! 4. apply framebuffer resizes to the viewport

use thiserror::Error;

use crate::animation::AnimationState;
use crate::config::{ConfigError, SceneConfig};
use crate::input::{InputAction, InputHandler};
use crate::render::{FrameRenderer, GlBackend, GraphicsBackend, RenderError};
use crate::scene::Scene;
use crate::window::{GlfwWindow, WindowBackend, WindowError};

/// Engine errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Window or context setup failed
    #[error("Window error: {0}")]
    Window(#[from] WindowError),

    /// GPU resource setup failed
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Configuration could not be used
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// One scene running in one window
pub struct Engine<W: WindowBackend, B: GraphicsBackend> {
    backend: B,
    window: W,
    renderer: FrameRenderer<B>,
    input: InputHandler,
    state: AnimationState,
    clear_color: [f32; 4],
    scene_name: String,
    frames: u64,
}

impl Engine<GlfwWindow, GlBackend> {
    /// Open a GLFW window, load OpenGL and run `scene` until the window closes
    ///
    /// Returns the number of frames drawn.
    pub fn launch(scene: &Scene, config: &SceneConfig) -> EngineResult<u64> {
        let mut window = GlfwWindow::new(&config.window)?;
        let gl = window.load_gl()?;
        let backend = GlBackend::new(gl);
        Self::new(window, backend, scene, config)?.run()
    }
}

impl<W: WindowBackend, B: GraphicsBackend> Engine<W, B> {
    /// Upload the scene and size the viewport to the current framebuffer
    pub fn new(
        window: W,
        mut backend: B,
        scene: &Scene,
        config: &SceneConfig,
    ) -> EngineResult<Self> {
        let renderer = FrameRenderer::new(&mut backend, scene)?;

        let (width, height) = window.framebuffer_size();
        backend.set_viewport(0, 0, width, height);

        log::debug!("Viewport {width}x{height}, {} vertices uploaded", scene.vertex_count());

        Ok(Self {
            backend,
            window,
            renderer,
            input: InputHandler::new(config.input.clone()),
            state: config.initial,
            clear_color: config.clear_color,
            scene_name: scene.name.clone(),
            frames: 0,
        })
    }

    /// Current animation state
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Frames drawn so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one iteration of the loop
    pub fn frame(&mut self) {
        if self.input.process(&self.window, &mut self.state) == InputAction::Close {
            log::debug!("Escape pressed, closing");
            self.window.set_should_close(true);
        }

        self.renderer.render_frame(&mut self.backend, self.clear_color, &self.state);
        self.frames += 1;

        self.window.swap_buffers();
        self.window.poll_events();

        for (width, height) in self.window.take_framebuffer_resizes() {
            log::debug!("Framebuffer resized to {width}x{height}");
            self.backend.set_viewport(0, 0, width, height);
        }
    }

    /// Loop until the window should close, then release GPU resources
    ///
    /// Returns the number of frames drawn.
    pub fn run(mut self) -> EngineResult<u64> {
        log::info!("Starting render loop for \"{}\"", self.scene_name);

        while !self.window.should_close() {
            self.frame();
        }

        let Self { mut backend, renderer, frames, scene_name, .. } = self;
        renderer.destroy(&mut backend);
        log::info!("\"{scene_name}\" finished after {frames} frame(s)");
        Ok(frames)
    }
}
