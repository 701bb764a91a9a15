/// GlDriver - OpenGL implementation of the ShaderDriver trait

use std::ffi::c_void;
use std::marker::PhantomData;

use gl::types::{GLchar, GLenum, GLint, GLsizei, GLuint};
use glforge::glforge::{DriverResult, ProgramId, ShaderDriver, ShaderId, ShaderStageKind};

/// OpenGL shader driver
///
/// Holds no GL state of its own; every call goes to the context that is
/// current on the calling thread. Neither `Send` nor `Sync`: a GL context is
/// bound to one thread.
pub struct GlDriver {
    _not_send: PhantomData<*const ()>,
}

impl GlDriver {
    /// Load GL function pointers and create the driver
    ///
    /// With the `gl-debug-output` feature the driver also routes GL debug
    /// messages into the glforge logger (see [`crate::debug`]).
    ///
    /// # Safety
    ///
    /// A GL context must be current on this thread, `loader` must return that
    /// context's function addresses, and the context must stay current for as
    /// long as the driver (and anything compiled through it) is used.
    pub unsafe fn load_with<F>(loader: F) -> Self
    where
        F: FnMut(&'static str) -> *const c_void,
    {
        gl::load_with(loader);
        glforge::forge_info!("glforge::gl", "OpenGL function pointers loaded");

        #[cfg(feature = "gl-debug-output")]
        crate::debug::install_debug_output(crate::debug::DebugConfig::default());

        Self { _not_send: PhantomData }
    }

    /// Driver for a context whose function pointers are already loaded
    ///
    /// # Safety
    ///
    /// Same contract as [`GlDriver::load_with`], and `gl::load_with` must
    /// already have been called for the current context.
    pub unsafe fn from_loaded() -> Self {
        Self { _not_send: PhantomData }
    }
}

/// OpenGL enum for a stage kind
pub(crate) fn stage_enum(kind: ShaderStageKind) -> GLenum {
    match kind {
        ShaderStageKind::Vertex => gl::VERTEX_SHADER,
        ShaderStageKind::TessControl => gl::TESS_CONTROL_SHADER,
        ShaderStageKind::TessEvaluation => gl::TESS_EVALUATION_SHADER,
        ShaderStageKind::Geometry => gl::GEOMETRY_SHADER,
        ShaderStageKind::Fragment => gl::FRAGMENT_SHADER,
        ShaderStageKind::Compute => gl::COMPUTE_SHADER,
    }
}

/// Largest byte count a single `glShaderSource` string length can express
const MAX_CHUNK: usize = GLint::MAX as usize;

/// Split `total` bytes into string lengths of at most `max` each
///
/// `glShaderSource` concatenates its strings, so a source longer than a
/// `GLint` can describe is passed as several consecutive pieces.
pub(crate) fn chunk_lengths(total: usize, max: usize) -> Vec<GLint> {
    let max = max.max(1);
    let mut lengths = Vec::with_capacity(total / max + 1);
    let mut remaining = total;
    loop {
        let len = remaining.min(max);
        lengths.push(GLint::try_from(len).unwrap_or(GLint::MAX));
        remaining -= len;
        if remaining == 0 {
            break;
        }
    }
    lengths
}

/// Decode a length-prefixed info log buffer
///
/// `written` is the count reported by the driver, excluding the terminator.
pub(crate) fn decode_info_log(mut buffer: Vec<u8>, written: GLint) -> String {
    let written = usize::try_from(written).unwrap_or(0).min(buffer.len());
    buffer.truncate(written);
    if let Some(end) = buffer.iter().position(|&b| b == 0) {
        buffer.truncate(end);
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

impl ShaderDriver for GlDriver {
    fn create_shader(&self, stage: ShaderStageKind) -> DriverResult<ShaderId> {
        let raw = unsafe { gl::CreateShader(stage_enum(stage)) };
        ShaderId::from_raw(raw).ok_or_else(|| {
            format!("glCreateShader({}) returned 0 (error 0x{:04X})", stage, unsafe { gl::GetError() })
        })
    }

    fn shader_source(&self, shader: ShaderId, source: &str) {
        // Explicit lengths: the source does not need a NUL terminator
        let bytes = source.as_bytes();
        let lengths = chunk_lengths(bytes.len(), MAX_CHUNK);
        let mut pointers = Vec::with_capacity(lengths.len());
        let mut offset = 0;
        for &len in &lengths {
            pointers.push(bytes[offset..].as_ptr() as *const GLchar);
            offset += len as usize;
        }
        let count = GLsizei::try_from(lengths.len()).unwrap_or(GLsizei::MAX);
        unsafe { gl::ShaderSource(shader.get(), count, pointers.as_ptr(), lengths.as_ptr()) };
    }

    fn compile_shader(&self, shader: ShaderId) {
        unsafe { gl::CompileShader(shader.get()) };
    }

    fn shader_compile_status(&self, shader: ShaderId) -> bool {
        let mut status = GLint::from(gl::FALSE);
        unsafe { gl::GetShaderiv(shader.get(), gl::COMPILE_STATUS, &mut status) };
        status == GLint::from(gl::TRUE)
    }

    fn shader_info_log(&self, shader: ShaderId) -> String {
        let mut length: GLint = 0;
        unsafe { gl::GetShaderiv(shader.get(), gl::INFO_LOG_LENGTH, &mut length) };
        if length <= 0 {
            return String::new();
        }
        let mut buffer = vec![0u8; length as usize];
        let mut written: GLint = 0;
        unsafe {
            gl::GetShaderInfoLog(shader.get(), length, &mut written, buffer.as_mut_ptr() as *mut GLchar);
        }
        decode_info_log(buffer, written)
    }

    fn delete_shader(&self, shader: ShaderId) {
        unsafe { gl::DeleteShader(shader.get()) };
    }

    fn create_program(&self) -> DriverResult<ProgramId> {
        let raw: GLuint = unsafe { gl::CreateProgram() };
        ProgramId::from_raw(raw)
            .ok_or_else(|| format!("glCreateProgram returned 0 (error 0x{:04X})", unsafe { gl::GetError() }))
    }

    fn attach_shader(&self, program: ProgramId, shader: ShaderId) {
        unsafe { gl::AttachShader(program.get(), shader.get()) };
    }

    fn link_program(&self, program: ProgramId) {
        unsafe { gl::LinkProgram(program.get()) };
    }

    fn program_link_status(&self, program: ProgramId) -> bool {
        let mut status = GLint::from(gl::FALSE);
        unsafe { gl::GetProgramiv(program.get(), gl::LINK_STATUS, &mut status) };
        status == GLint::from(gl::TRUE)
    }

    fn validate_program(&self, program: ProgramId) {
        unsafe { gl::ValidateProgram(program.get()) };
    }

    fn program_validate_status(&self, program: ProgramId) -> bool {
        let mut status = GLint::from(gl::FALSE);
        unsafe { gl::GetProgramiv(program.get(), gl::VALIDATE_STATUS, &mut status) };
        status == GLint::from(gl::TRUE)
    }

    fn program_info_log(&self, program: ProgramId) -> String {
        let mut length: GLint = 0;
        unsafe { gl::GetProgramiv(program.get(), gl::INFO_LOG_LENGTH, &mut length) };
        if length <= 0 {
            return String::new();
        }
        let mut buffer = vec![0u8; length as usize];
        let mut written: GLint = 0;
        unsafe {
            gl::GetProgramInfoLog(program.get(), length, &mut written, buffer.as_mut_ptr() as *mut GLchar);
        }
        decode_info_log(buffer, written)
    }

    fn delete_program(&self, program: ProgramId) {
        unsafe { gl::DeleteProgram(program.get()) };
    }
}

#[cfg(test)]
#[path = "gl_driver_tests.rs"]
mod tests;
