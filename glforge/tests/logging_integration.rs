//! Logger registry behaviour as seen from outside the crate

use std::rc::Rc;
use std::sync::{Arc, Mutex};

use glforge::glforge::log::{LogEntry, LogSeverity, Logger};
use glforge::glforge::{
    BacktraceMode, CompilerConfig, DriverResult, Error, Forge, ProgramId, ShaderCompiler,
    ShaderDriver, ShaderId, ShaderStageKind,
};
use serial_test::serial;

#[derive(Clone, Default)]
struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CaptureLogger {
    fn take(&self) -> Vec<LogEntry> {
        std::mem::take(&mut *self.entries.lock().unwrap())
    }
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

/// Compiles and links everything, but never validates
struct NoValidateDriver;

impl ShaderDriver for NoValidateDriver {
    fn create_shader(&self, stage: ShaderStageKind) -> DriverResult<ShaderId> {
        ShaderId::from_raw(stage as u32 + 1).ok_or_else(|| "zero id".to_string())
    }
    fn shader_source(&self, _shader: ShaderId, _source: &str) {}
    fn compile_shader(&self, _shader: ShaderId) {}
    fn shader_compile_status(&self, _shader: ShaderId) -> bool {
        true
    }
    fn shader_info_log(&self, _shader: ShaderId) -> String {
        String::new()
    }
    fn delete_shader(&self, _shader: ShaderId) {}
    fn create_program(&self) -> DriverResult<ProgramId> {
        ProgramId::from_raw(42).ok_or_else(|| "zero id".to_string())
    }
    fn attach_shader(&self, _program: ProgramId, _shader: ShaderId) {}
    fn link_program(&self, _program: ProgramId) {}
    fn program_link_status(&self, _program: ProgramId) -> bool {
        true
    }
    fn validate_program(&self, _program: ProgramId) {}
    fn program_validate_status(&self, _program: ProgramId) -> bool {
        false
    }
    fn program_info_log(&self, _program: ProgramId) -> String {
        "sampler units collide\n".to_string()
    }
    fn delete_program(&self, _program: ProgramId) {}
}

#[test]
#[serial]
fn test_validate_failure_is_logged_as_warning() {
    let logger = CaptureLogger::default();
    Forge::set_logger(logger.clone());

    let compiler = ShaderCompiler::new(Rc::new(NoValidateDriver))
        .with_config(CompilerConfig::default().with_backtrace(BacktraceMode::Off));
    let program = compiler.link_program("void main() {}", "void main() {}").unwrap();
    assert!(program.status().linked);
    assert!(!program.status().validated);

    let warnings: Vec<LogEntry> = logger
        .take()
        .into_iter()
        .filter(|entry| entry.severity == LogSeverity::Warn)
        .collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].source, "glforge::program");
    assert_eq!(warnings[0].message, "Program 42 failed validation: sampler units collide");

    let diagnostic = program.status().diagnostic().unwrap();
    assert_eq!(diagnostic.severity(), glforge::glforge::Severity::Warning);

    Forge::reset_logger();
}

#[test]
#[serial]
fn test_error_macro_records_call_site() {
    let logger = CaptureLogger::default();
    Forge::set_logger(logger.clone());

    glforge::forge_error!("app::render", "lost context after {} frames", 3);
    let entries = logger.take();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].severity, LogSeverity::Error);
    assert_eq!(entries[0].message, "lost context after 3 frames");
    assert_eq!(entries[0].file, Some(file!()));
    assert!(entries[0].line.is_some());

    Forge::reset_logger();
}

#[test]
#[serial]
fn test_report_uses_error_severity() {
    let logger = CaptureLogger::default();
    Forge::set_logger(logger.clone());

    Forge::report("app", &Error::link("missing main"));
    let entries = logger.take();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].severity, LogSeverity::Error);
    assert_eq!(entries[0].message, "[Error] Failed to link, Message: missing main");

    Forge::reset_logger();
}
