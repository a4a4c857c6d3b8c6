//! Shader program building
//!
//! Compiles a vertex and a fragment shader from source text and links them.
//! Compile and link failures are reported, not fatal: the program object is
//! still returned so the caller can keep running (it will render nothing
//! useful). Only failing to allocate a GPU object is an error.

use std::fmt;

use crate::render::backend::{GraphicsBackend, ShaderStage};
use crate::render::RenderResult;

/// Longest compiler or linker log kept, in bytes
pub const INFO_LOG_CAPACITY: usize = 512;

/// Source text for the two programmable stages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSources {
    /// GLSL vertex shader
    pub vertex: String,
    /// GLSL fragment shader
    pub fragment: String,
}

impl ShaderSources {
    /// Pair a vertex and a fragment shader
    pub fn new(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self { vertex: vertex.into(), fragment: fragment.into() }
    }
}

/// A compile or link failure reported while building a program
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderDiagnostic {
    /// A stage failed to compile
    CompilationFailed {
        /// Stage that failed
        stage: ShaderStage,
        /// Compiler output, at most [`INFO_LOG_CAPACITY`] bytes
        log: String,
    },

    /// The program failed to link
    LinkingFailed {
        /// Linker output, at most [`INFO_LOG_CAPACITY`] bytes
        log: String,
    },
}

impl fmt::Display for ShaderDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CompilationFailed { stage, log } => {
                write!(f, "{} shader compilation failed\n{}", stage.name(), log)
            }
            Self::LinkingFailed { log } => write!(f, "program linking failed\n{log}"),
        }
    }
}

/// A linked (or attempted) shader program
pub struct ShaderProgram<B: GraphicsBackend> {
    program: B::Program,
    diagnostics: Vec<ShaderDiagnostic>,
}

impl<B: GraphicsBackend> ShaderProgram<B> {
    /// Compile both stages, link them and release the stage objects
    ///
    /// Every failed status check is logged at error level and kept in
    /// [`diagnostics`](Self::diagnostics).
    pub fn build(backend: &mut B, sources: &ShaderSources) -> RenderResult<Self> {
        let mut diagnostics = Vec::new();

        let vertex =
            compile_stage(backend, ShaderStage::Vertex, &sources.vertex, &mut diagnostics)?;
        let fragment = match compile_stage(
            backend,
            ShaderStage::Fragment,
            &sources.fragment,
            &mut diagnostics,
        ) {
            Ok(shader) => shader,
            Err(e) => {
                backend.delete_shader(vertex);
                return Err(e);
            }
        };

        let linked = backend.link_program(&[vertex, fragment]);
        backend.delete_shader(vertex);
        backend.delete_shader(fragment);
        let program = linked?;

        if !backend.program_link_status(program) {
            let diagnostic = ShaderDiagnostic::LinkingFailed {
                log: truncate_log(backend.program_info_log(program)),
            };
            log::error!("{diagnostic}");
            diagnostics.push(diagnostic);
        }

        if diagnostics.is_empty() {
            log::info!("Shader program {program:?} compiled and linked");
        }

        Ok(Self { program, diagnostics })
    }

    /// Backend handle of the program
    pub fn handle(&self) -> B::Program {
        self.program
    }

    /// Compile and link failures seen while building
    pub fn diagnostics(&self) -> &[ShaderDiagnostic] {
        &self.diagnostics
    }

    /// True when both stages compiled and the program linked
    pub fn is_linked(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Release the program object
    pub fn destroy(self, backend: &mut B) {
        backend.delete_program(self.program);
    }
}

fn compile_stage<B: GraphicsBackend>(
    backend: &mut B,
    stage: ShaderStage,
    source: &str,
    diagnostics: &mut Vec<ShaderDiagnostic>,
) -> RenderResult<B::Shader> {
    let shader = backend.compile_shader(stage, source)?;
    if !backend.shader_compile_status(shader) {
        let diagnostic = ShaderDiagnostic::CompilationFailed {
            stage,
            log: truncate_log(backend.shader_info_log(shader)),
        };
        log::error!("{diagnostic}");
        diagnostics.push(diagnostic);
    }
    Ok(shader)
}

fn truncate_log(mut log: String) -> String {
    if log.len() > INFO_LOG_CAPACITY {
        let mut end = INFO_LOG_CAPACITY;
        while !log.is_char_boundary(end) {
            end -= 1;
        }
        log.truncate(end);
    }
    log
}
