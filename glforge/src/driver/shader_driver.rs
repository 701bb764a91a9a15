/// ShaderDriver trait and driver handle types

use std::num::NonZeroU32;

use crate::driver::ShaderStageKind;

/// Result type for raw driver calls that can refuse to allocate
pub type DriverResult<T> = std::result::Result<T, String>;

/// Driver-assigned shader object name (never zero)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShaderId(pub NonZeroU32);

/// Driver-assigned program object name (never zero)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProgramId(pub NonZeroU32);

impl ShaderId {
    /// Wrap a raw name; `None` for the reserved name 0
    pub fn from_raw(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl ProgramId {
    /// Wrap a raw name; `None` for the reserved name 0
    pub fn from_raw(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

/// Graphics driver interface
///
/// One method per raw driver entry point used by the compiler. Implemented by
/// backend crates (e.g. `GlDriver` in `glforge_driver_gl`).
///
/// All calls are synchronous and assume the driver context is current on the
/// calling thread. Implementations are not expected to be shared across
/// threads; the compiler holds them behind `Rc`.
pub trait ShaderDriver {
    // ===== SHADER OBJECTS =====

    /// Allocate a shader object for `stage`
    fn create_shader(&self, stage: ShaderStageKind) -> DriverResult<ShaderId>;

    /// Replace the source text of a shader object
    fn shader_source(&self, shader: ShaderId, source: &str);

    fn compile_shader(&self, shader: ShaderId);

    /// `COMPILE_STATUS` of the last compile
    fn shader_compile_status(&self, shader: ShaderId) -> bool;

    /// Compiler output for the last compile, verbatim
    fn shader_info_log(&self, shader: ShaderId) -> String;

    fn delete_shader(&self, shader: ShaderId);

    // ===== PROGRAM OBJECTS =====

    fn create_program(&self) -> DriverResult<ProgramId>;

    fn attach_shader(&self, program: ProgramId, shader: ShaderId);

    fn link_program(&self, program: ProgramId);

    /// `LINK_STATUS` of the last link
    fn program_link_status(&self, program: ProgramId) -> bool;

    fn validate_program(&self, program: ProgramId);

    /// `VALIDATE_STATUS` of the last validation
    fn program_validate_status(&self, program: ProgramId) -> bool;

    /// Linker / validator output, verbatim
    fn program_info_log(&self, program: ProgramId) -> String;

    fn delete_program(&self, program: ProgramId);
}
