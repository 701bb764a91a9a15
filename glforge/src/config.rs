//! Compiler configuration

/// Whether failure records capture a backtrace of the failing call site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BacktraceMode {
    Off,
    On,
}

/// What a failed link means for the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkFailurePolicy {
    /// A failed link is an error: the program object is released and the
    /// driver's link log is returned as a `LinkOrValidate` failure
    Strict,
    /// A failed link still returns the program; the caller must check
    /// `ShaderProgram::status()` before using it
    Lenient,
}

/// Configuration for a `ShaderCompiler`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Capture backtraces into failure records
    pub backtrace: BacktraceMode,
    /// Link failure handling
    pub link_failure: LinkFailurePolicy,
}

impl CompilerConfig {
    pub fn with_backtrace(mut self, backtrace: BacktraceMode) -> Self {
        self.backtrace = backtrace;
        self
    }

    pub fn with_link_failure(mut self, link_failure: LinkFailurePolicy) -> Self {
        self.link_failure = link_failure;
        self
    }
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            backtrace: if cfg!(debug_assertions) { BacktraceMode::On } else { BacktraceMode::Off },
            link_failure: LinkFailurePolicy::Strict,
        }
    }
}
