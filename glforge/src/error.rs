//! Error types for glforge
//!
//! Every fallible compiler operation returns [`Result`], the success-or-failure
//! outcome whose failure side is a structured [`Error`] record: a closed
//! [`ErrorKind`], a human-readable message, a [`Severity`] and, when enabled,
//! a captured backtrace.

use std::backtrace::Backtrace;
use std::fmt;
use std::path::PathBuf;

use crate::config::BacktraceMode;
use crate::driver::ShaderStageKind;
use crate::log::LogSeverity;

/// Result type for glforge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Severity attached to every failure record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Informational, nothing went wrong
    Notice,
    /// Something is off but the result is still usable
    Warning,
    /// The operation failed
    Error,
    /// The operation failed and the caller should not continue
    Fatal,
}

impl Severity {
    /// Logger severity used when a failure of this severity is reported
    pub fn log_severity(self) -> LogSeverity {
        match self {
            Severity::Notice => LogSeverity::Info,
            Severity::Warning => LogSeverity::Warn,
            Severity::Error | Severity::Fatal => LogSeverity::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Notice => "Notice",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Fatal => "Fatal",
        };
        f.write_str(name)
    }
}

/// What went wrong
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A shader source path does not denote an existing regular file
    FileNotFound {
        path: PathBuf,
    },

    /// A shader source file exists but could not be read
    FileRead {
        path: PathBuf,
        reason: String,
    },

    /// The driver rejected a shader stage; `log` is the driver's text verbatim
    StageCompile {
        stage: ShaderStageKind,
        log: String,
    },

    /// The driver failed to link (or create) a program
    LinkOrValidate {
        log: String,
    },
}

/// Structured failure record
#[derive(Debug, Clone)]
pub struct Error {
    kind: ErrorKind,
    message: String,
    severity: Severity,
    backtrace: Option<String>,
}

impl Error {
    /// Create a new failure record without a backtrace
    pub fn new(kind: ErrorKind, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            kind,
            message: message.into(),
            severity,
            backtrace: None,
        }
    }

    /// Missing shader source file
    pub fn file_not_found(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::FileNotFound { path: path.into() },
            message,
            Severity::Error,
        )
    }

    /// Unreadable shader source file
    pub fn file_read(path: impl Into<PathBuf>, reason: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::FileRead { path: path.into(), reason: reason.into() },
            message,
            Severity::Error,
        )
    }

    /// Stage compile failure; the message embeds the driver log verbatim
    pub fn stage_compile(stage: ShaderStageKind, log: impl Into<String>) -> Self {
        let log = log.into();
        let message = format!("Failed to compile, Message: {}", log);
        Self::new(ErrorKind::StageCompile { stage, log }, message, Severity::Error)
    }

    /// Program link failure; the message embeds the driver log verbatim
    pub fn link(log: impl Into<String>) -> Self {
        let log = log.into();
        let message = format!("Failed to link, Message: {}", log);
        Self::new(ErrorKind::LinkOrValidate { log }, message, Severity::Error)
    }

    /// Prefix the message with caller context, e.g. which stage failed
    pub fn with_context(mut self, prefix: impl AsRef<str>) -> Self {
        self.message = format!("{}{}", prefix.as_ref(), self.message);
        self
    }

    /// Override the severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Attach a backtrace of the current call site when `mode` asks for one
    pub fn with_backtrace(mut self, mode: BacktraceMode) -> Self {
        if mode == BacktraceMode::On && self.backtrace.is_none() {
            self.backtrace = Some(Backtrace::force_capture().to_string());
        }
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Captured backtrace text, if backtraces were enabled
    pub fn backtrace(&self) -> Option<&str> {
        self.backtrace.as_deref()
    }

    /// Driver log carried by compile/link failures
    pub fn driver_log(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::StageCompile { log, .. } | ErrorKind::LinkOrValidate { log } => Some(log),
            ErrorKind::FileNotFound { .. } | ErrorKind::FileRead { .. } => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)?;
        if let Some(backtrace) = &self.backtrace {
            write!(f, "\nBacktrace:\n{}", backtrace)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
