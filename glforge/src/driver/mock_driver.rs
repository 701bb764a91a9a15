/// Mock ShaderDriver for unit tests (no GL context required)
///
/// Records every call, hands out non-zero ids, and tracks which objects are
/// still alive so tests can assert that nothing leaks. A source is treated as
/// syntactically valid when it contains `void main`; failures can also be
/// injected per stage kind, and for link / validate.

use std::cell::{Cell, RefCell};

use rustc_hash::FxHashMap;

use crate::driver::{DriverResult, ProgramId, ShaderDriver, ShaderId, ShaderStageKind};

/// Driver log produced for sources without an entry point
pub const MISSING_MAIN_LOG: &str = "ERROR: 0:1: 'main' : function not found\n";

/// Validation log for a program that never linked; replaces the link log
pub const NOT_LINKED_LOG: &str = "Validation: program not linked\n";

/// One recorded driver call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverCall {
    CreateShader(ShaderStageKind),
    ShaderSource(ShaderId),
    CompileShader(ShaderId),
    DeleteShader(ShaderId),
    CreateProgram,
    AttachShader(ProgramId, ShaderId),
    LinkProgram(ProgramId),
    ValidateProgram(ProgramId),
    DeleteProgram(ProgramId),
}

#[derive(Debug, Clone)]
struct MockShader {
    kind: ShaderStageKind,
    source: String,
    info_log: String,
    compiled: bool,
}

#[derive(Debug, Clone, Default)]
struct MockProgram {
    attached: Vec<ShaderId>,
    linked: bool,
    validated: bool,
    info_log: String,
}

#[derive(Default)]
pub struct MockShaderDriver {
    next_id: Cell<u32>,
    calls: RefCell<Vec<DriverCall>>,
    shaders: RefCell<FxHashMap<ShaderId, MockShader>>,
    // survives deletion so call history can still be attributed to a stage
    kinds: RefCell<FxHashMap<ShaderId, ShaderStageKind>>,
    programs: RefCell<FxHashMap<ProgramId, MockProgram>>,
    compile_failures: RefCell<FxHashMap<ShaderStageKind, String>>,
    link_failure: RefCell<Option<String>>,
    validate_failure: RefCell<Option<String>>,
    refuse_allocation: Cell<bool>,
}

impl MockShaderDriver {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== FAILURE INJECTION =====

    /// Every compile of `kind` fails with `log`
    pub fn fail_compile(&self, kind: ShaderStageKind, log: &str) {
        self.compile_failures.borrow_mut().insert(kind, log.to_string());
    }

    /// Every link fails with `log`
    pub fn fail_link(&self, log: &str) {
        *self.link_failure.borrow_mut() = Some(log.to_string());
    }

    /// Every validation fails with `log`
    pub fn fail_validate(&self, log: &str) {
        *self.validate_failure.borrow_mut() = Some(log.to_string());
    }

    /// `create_shader` / `create_program` return an error
    pub fn refuse_allocation(&self) {
        self.refuse_allocation.set(true);
    }

    // ===== INSPECTION =====

    pub fn calls(&self) -> Vec<DriverCall> {
        self.calls.borrow().clone()
    }

    fn count(&self, pred: impl Fn(&DriverCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| pred(call)).count()
    }

    pub fn shaders_created(&self) -> usize {
        self.count(|call| matches!(call, DriverCall::CreateShader(_)))
    }

    pub fn shaders_deleted(&self) -> usize {
        self.count(|call| matches!(call, DriverCall::DeleteShader(_)))
    }

    pub fn programs_created(&self) -> usize {
        self.count(|call| matches!(call, DriverCall::CreateProgram))
    }

    pub fn programs_deleted(&self) -> usize {
        self.count(|call| matches!(call, DriverCall::DeleteProgram(_)))
    }

    /// Number of compile calls issued for shaders of `kind`
    pub fn compile_calls(&self, kind: ShaderStageKind) -> usize {
        let kinds = self.kinds.borrow();
        self.count(|call| match call {
            DriverCall::CompileShader(id) => kinds.get(id) == Some(&kind),
            _ => false,
        })
    }

    /// Shader objects created and not yet deleted
    pub fn live_shaders(&self) -> usize {
        self.shaders.borrow().len()
    }

    /// Program objects created and not yet deleted
    pub fn live_programs(&self) -> usize {
        self.programs.borrow().len()
    }

    /// Shaders attached to a live program, in attach order
    pub fn attached(&self, program: ProgramId) -> Vec<ShaderId> {
        self.programs
            .borrow()
            .get(&program)
            .map(|p| p.attached.clone())
            .unwrap_or_default()
    }

    /// Current source of a live shader
    pub fn source_of(&self, shader: ShaderId) -> Option<String> {
        self.shaders.borrow().get(&shader).map(|s| s.source.clone())
    }

    fn record(&self, call: DriverCall) {
        self.calls.borrow_mut().push(call);
    }

    fn next_raw_id(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }
}

impl ShaderDriver for MockShaderDriver {
    fn create_shader(&self, stage: ShaderStageKind) -> DriverResult<ShaderId> {
        self.record(DriverCall::CreateShader(stage));
        if self.refuse_allocation.get() {
            return Err("mock driver refused to allocate a shader object".to_string());
        }
        let id = ShaderId::from_raw(self.next_raw_id())
            .ok_or_else(|| "mock driver ran out of ids".to_string())?;
        self.kinds.borrow_mut().insert(id, stage);
        self.shaders.borrow_mut().insert(id, MockShader {
            kind: stage,
            source: String::new(),
            info_log: String::new(),
            compiled: false,
        });
        Ok(id)
    }

    fn shader_source(&self, shader: ShaderId, source: &str) {
        self.record(DriverCall::ShaderSource(shader));
        if let Some(state) = self.shaders.borrow_mut().get_mut(&shader) {
            state.source = source.to_string();
        }
    }

    fn compile_shader(&self, shader: ShaderId) {
        self.record(DriverCall::CompileShader(shader));
        let failures = self.compile_failures.borrow();
        if let Some(state) = self.shaders.borrow_mut().get_mut(&shader) {
            if let Some(log) = failures.get(&state.kind) {
                state.compiled = false;
                state.info_log = log.clone();
            } else if !state.source.contains("void main") {
                state.compiled = false;
                state.info_log = MISSING_MAIN_LOG.to_string();
            } else {
                state.compiled = true;
                state.info_log.clear();
            }
        }
    }

    fn shader_compile_status(&self, shader: ShaderId) -> bool {
        self.shaders.borrow().get(&shader).map(|s| s.compiled).unwrap_or(false)
    }

    fn shader_info_log(&self, shader: ShaderId) -> String {
        self.shaders
            .borrow()
            .get(&shader)
            .map(|s| s.info_log.clone())
            .unwrap_or_default()
    }

    fn delete_shader(&self, shader: ShaderId) {
        self.record(DriverCall::DeleteShader(shader));
        self.shaders.borrow_mut().remove(&shader);
    }

    fn create_program(&self) -> DriverResult<ProgramId> {
        self.record(DriverCall::CreateProgram);
        if self.refuse_allocation.get() {
            return Err("mock driver refused to allocate a program object".to_string());
        }
        let id = ProgramId::from_raw(self.next_raw_id())
            .ok_or_else(|| "mock driver ran out of ids".to_string())?;
        self.programs.borrow_mut().insert(id, MockProgram::default());
        Ok(id)
    }

    fn attach_shader(&self, program: ProgramId, shader: ShaderId) {
        self.record(DriverCall::AttachShader(program, shader));
        if let Some(state) = self.programs.borrow_mut().get_mut(&program) {
            state.attached.push(shader);
        }
    }

    fn link_program(&self, program: ProgramId) {
        self.record(DriverCall::LinkProgram(program));
        let failure = self.link_failure.borrow().clone();
        if let Some(state) = self.programs.borrow_mut().get_mut(&program) {
            match failure {
                Some(log) => {
                    state.linked = false;
                    state.info_log = log;
                }
                None => {
                    state.linked = true;
                    state.info_log.clear();
                }
            }
        }
    }

    fn program_link_status(&self, program: ProgramId) -> bool {
        self.programs.borrow().get(&program).map(|p| p.linked).unwrap_or(false)
    }

    fn validate_program(&self, program: ProgramId) {
        self.record(DriverCall::ValidateProgram(program));
        let failure = self.validate_failure.borrow().clone();
        if let Some(state) = self.programs.borrow_mut().get_mut(&program) {
            match failure {
                Some(log) => {
                    state.validated = false;
                    state.info_log = log;
                }
                None if state.linked => state.validated = true,
                None => {
                    state.validated = false;
                    state.info_log = NOT_LINKED_LOG.to_string();
                }
            }
        }
    }

    fn program_validate_status(&self, program: ProgramId) -> bool {
        self.programs.borrow().get(&program).map(|p| p.validated).unwrap_or(false)
    }

    fn program_info_log(&self, program: ProgramId) -> String {
        self.programs
            .borrow()
            .get(&program)
            .map(|p| p.info_log.clone())
            .unwrap_or_default()
    }

    fn delete_program(&self, program: ProgramId) {
        self.record(DriverCall::DeleteProgram(program));
        self.programs.borrow_mut().remove(&program);
    }
}

#[cfg(test)]
#[path = "mock_driver_tests.rs"]
mod tests;
