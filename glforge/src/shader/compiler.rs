/// ShaderCompiler - source text in, linked program out

use std::path::Path;
use std::rc::Rc;

use crate::config::CompilerConfig;
use crate::driver::{ShaderDriver, ShaderStageKind};
use crate::error::{Error, Result};
use crate::shader::builtin;
use crate::shader::{FsSourceReader, ShaderProgram, ShaderSourceReader, ShaderStage};

/// Compiles shader stages and links them into programs
///
/// Every operation runs to completion on the calling thread, which must own
/// the driver's current context. Failures come back as [`Error`] values; the
/// compiler never retries and never reports them itself (see `Forge::report`).
///
/// # Example
///
/// ```no_run
/// use std::rc::Rc;
/// use glforge::glforge::{ShaderCompiler, ShaderDriver, Forge};
///
/// fn build(driver: Rc<dyn ShaderDriver>) {
///     let compiler = ShaderCompiler::new(driver);
///     match compiler.compile_program_from_files("glsl/base.vert", "glsl/red.frag") {
///         Ok(program) => println!("program {}", program.id().get()),
///         Err(err) => Forge::report("app", &err),
///     }
/// }
/// ```
pub struct ShaderCompiler {
    driver: Rc<dyn ShaderDriver>,
    config: CompilerConfig,
    reader: Box<dyn ShaderSourceReader>,
}

impl ShaderCompiler {
    /// Compiler with the default configuration, reading from the filesystem
    pub fn new(driver: Rc<dyn ShaderDriver>) -> Self {
        Self {
            driver,
            config: CompilerConfig::default(),
            reader: Box::new(FsSourceReader),
        }
    }

    pub fn with_config(mut self, config: CompilerConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace where shader files are read from
    pub fn with_reader<R: ShaderSourceReader + 'static>(mut self, reader: R) -> Self {
        self.reader = Box::new(reader);
        self
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    pub fn driver(&self) -> &Rc<dyn ShaderDriver> {
        &self.driver
    }

    // ===== STAGES =====

    /// Compile one stage
    ///
    /// Empty source is not rejected up front; the driver's compile error is
    /// returned like any other.
    pub fn compile_stage(&self, source: &str, kind: ShaderStageKind) -> Result<ShaderStage> {
        ShaderStage::compile(&self.driver, source, kind, self.config.backtrace)
    }

    // ===== PROGRAMS =====

    /// Compile a vertex + fragment pair and link them
    pub fn link_program(&self, vertex_source: &str, fragment_source: &str) -> Result<ShaderProgram> {
        self.link_stages(&[
            (ShaderStageKind::Vertex, vertex_source),
            (ShaderStageKind::Fragment, fragment_source),
        ])
    }

    /// Compile every stage in order, then link
    ///
    /// The first stage that fails aborts the remaining compiles; its message is
    /// prefixed with the stage name (`"VertexShader failed to compile: ..."`).
    /// Stages compiled before the failure are released.
    pub fn link_stages(&self, sources: &[(ShaderStageKind, &str)]) -> Result<ShaderProgram> {
        let mut stages = Vec::with_capacity(sources.len());
        for &(kind, source) in sources {
            let stage = self
                .compile_stage(source, kind)
                .map_err(|err| err.with_context(format!("{} failed to compile: ", kind.name())))?;
            stages.push(stage);
        }
        self.link_compiled(stages)
    }

    /// Link stages that were compiled separately
    pub fn link_compiled(&self, stages: Vec<ShaderStage>) -> Result<ShaderProgram> {
        ShaderProgram::link(&self.driver, stages, &self.config)
    }

    /// Built-in pass-through vertex shader + constant colour fragment shader
    pub fn link_solid_color_program(&self, red: u8, green: u8, blue: u8, alpha: u8) -> Result<ShaderProgram> {
        let fragment = builtin::solid_color_fragment_source(red, green, blue, alpha);
        self.link_program(builtin::BASE_VERTEX_SHADER, &fragment)
    }

    // ===== FILES =====

    /// Read a vertex and a fragment shader file and link them
    pub fn compile_program_from_files(
        &self,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<ShaderProgram> {
        self.compile_stages_from_files(&[
            (ShaderStageKind::Vertex, vertex_path.as_ref()),
            (ShaderStageKind::Fragment, fragment_path.as_ref()),
        ])
    }

    /// Read one file per stage and link them
    ///
    /// Every path is checked before any file is read; a missing file yields
    /// `FileNotFound` naming it. Read failures yield `FileRead` carrying the
    /// I/O error text.
    pub fn compile_stages_from_files(&self, paths: &[(ShaderStageKind, &Path)]) -> Result<ShaderProgram> {
        for &(kind, path) in paths {
            if !self.reader.is_file(path) {
                return Err(Error::file_not_found(
                    path,
                    format!("No such {} source file: {}", kind.name(), path.display()),
                )
                .with_backtrace(self.config.backtrace));
            }
        }

        let mut sources = Vec::with_capacity(paths.len());
        for &(kind, path) in paths {
            let source = self.reader.read_to_string(path).map_err(|err| {
                Error::file_read(
                    path,
                    err.to_string(),
                    format!("Error opening {} file {}, see error: {}", kind.name(), path.display(), err),
                )
                .with_backtrace(self.config.backtrace)
            })?;
            crate::forge_trace!("glforge::compiler", "Read {} bytes from {}", source.len(), path.display());
            sources.push((kind, source));
        }

        let borrowed: Vec<(ShaderStageKind, &str)> = sources
            .iter()
            .map(|(kind, source)| (*kind, source.as_str()))
            .collect();
        self.link_stages(&borrowed)
    }
}

#[cfg(test)]
#[path = "compiler_tests.rs"]
mod tests;
