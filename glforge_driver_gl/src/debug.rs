/// OpenGL debug output - routes driver debug messages into the glforge logger
///
/// Requires a GL 4.3+ (or KHR_debug) context. Messages are forwarded to
/// `Forge::log` under the `glforge::gl::debug` source, counted per GL
/// severity, and grouped by (source, type, id) so that repeats carry an
/// occurrence count.

use std::ffi::{c_void, CStr};
use std::ptr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use colored::*;
use gl::types::{GLchar, GLenum, GLsizei, GLuint};
use glforge::glforge::log::LogSeverity;
use glforge::glforge::Forge;
use rustc_hash::FxHashMap;

const DEBUG_SOURCE: &str = "glforge::gl::debug";

/// Global debug configuration (read by the callback)
static DEBUG_CONFIG: Mutex<Option<DebugConfig>> = Mutex::new(None);

/// Global debug message statistics
static DEBUG_STATS: DebugStatsTracker = DebugStatsTracker::new();

/// Message identity as reported by the driver: (source, type, id)
type MessageKey = (GLenum, GLenum, GLuint);

/// Occurrences per message identity
///
/// Keyed by identity rather than text, so messages that embed object names or
/// addresses still group and the map stays bounded by the driver's id space.
static MESSAGE_TRACKER: Mutex<Option<FxHashMap<MessageKey, u32>>> = Mutex::new(None);

/// Debug output configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugConfig {
    /// Messages that map below this severity are dropped (and not counted)
    pub min_severity: LogSeverity,
    /// Deliver messages on the thread and inside the call that raised them
    pub synchronous: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            min_severity: LogSeverity::Warn,
            synchronous: cfg!(debug_assertions),
        }
    }
}

/// Snapshot of the debug message counters, one per GL severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugStats {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
    pub notification: u32,
}

impl DebugStats {
    pub fn total(&self) -> u32 {
        self.high + self.medium + self.low + self.notification
    }
}

struct DebugStatsTracker {
    high: AtomicU32,
    medium: AtomicU32,
    low: AtomicU32,
    notification: AtomicU32,
}

impl DebugStatsTracker {
    const fn new() -> Self {
        Self {
            high: AtomicU32::new(0),
            medium: AtomicU32::new(0),
            low: AtomicU32::new(0),
            notification: AtomicU32::new(0),
        }
    }

    fn increment(&self, severity: GLenum) {
        let counter = match severity {
            gl::DEBUG_SEVERITY_HIGH => &self.high,
            gl::DEBUG_SEVERITY_MEDIUM => &self.medium,
            gl::DEBUG_SEVERITY_LOW => &self.low,
            _ => &self.notification,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn snapshot(&self) -> DebugStats {
        DebugStats {
            high: self.high.load(Ordering::Relaxed),
            medium: self.medium.load(Ordering::Relaxed),
            low: self.low.load(Ordering::Relaxed),
            notification: self.notification.load(Ordering::Relaxed),
        }
    }

    fn reset(&self) {
        self.high.store(0, Ordering::Relaxed);
        self.medium.store(0, Ordering::Relaxed);
        self.low.store(0, Ordering::Relaxed);
        self.notification.store(0, Ordering::Relaxed);
    }
}

/// Logger severity for a GL debug severity
pub fn map_severity(severity: GLenum) -> LogSeverity {
    match severity {
        gl::DEBUG_SEVERITY_HIGH => LogSeverity::Error,
        gl::DEBUG_SEVERITY_MEDIUM | gl::DEBUG_SEVERITY_LOW => LogSeverity::Warn,
        _ => LogSeverity::Debug,
    }
}

pub fn source_name(source: GLenum) -> &'static str {
    match source {
        gl::DEBUG_SOURCE_API => "API",
        gl::DEBUG_SOURCE_WINDOW_SYSTEM => "WindowSystem",
        gl::DEBUG_SOURCE_SHADER_COMPILER => "ShaderCompiler",
        gl::DEBUG_SOURCE_THIRD_PARTY => "ThirdParty",
        gl::DEBUG_SOURCE_APPLICATION => "Application",
        _ => "Other",
    }
}

pub fn type_name(gltype: GLenum) -> &'static str {
    match gltype {
        gl::DEBUG_TYPE_ERROR => "Error",
        gl::DEBUG_TYPE_DEPRECATED_BEHAVIOR => "DeprecatedBehavior",
        gl::DEBUG_TYPE_UNDEFINED_BEHAVIOR => "UndefinedBehavior",
        gl::DEBUG_TYPE_PORTABILITY => "Portability",
        gl::DEBUG_TYPE_PERFORMANCE => "Performance",
        gl::DEBUG_TYPE_MARKER => "Marker",
        gl::DEBUG_TYPE_PUSH_GROUP => "PushGroup",
        gl::DEBUG_TYPE_POP_GROUP => "PopGroup",
        _ => "Other",
    }
}

/// Store the configuration used by the callback and clear previous statistics
pub fn init_debug_config(config: DebugConfig) {
    DEBUG_STATS.reset();
    if let Ok(mut tracker) = MESSAGE_TRACKER.lock() {
        *tracker = Some(FxHashMap::default());
    }
    if let Ok(mut current) = DEBUG_CONFIG.lock() {
        *current = Some(config);
    }
}

/// Enable GL debug output and register the forwarding callback
///
/// # Safety
///
/// GL function pointers must be loaded and a context must be current.
pub unsafe fn install_debug_output(config: DebugConfig) {
    init_debug_config(config);

    gl::Enable(gl::DEBUG_OUTPUT);
    if config.synchronous {
        gl::Enable(gl::DEBUG_OUTPUT_SYNCHRONOUS);
    } else {
        gl::Disable(gl::DEBUG_OUTPUT_SYNCHRONOUS);
    }
    gl::DebugMessageCallback(Some(gl_debug_callback), ptr::null());

    glforge::forge_debug!(
        "glforge::gl",
        "Debug output enabled (min severity {}, synchronous {})",
        config.min_severity.label().trim_end(),
        config.synchronous
    );
}

/// Current debug message statistics
pub fn debug_stats() -> DebugStats {
    DEBUG_STATS.snapshot()
}

/// Zero the counters and forget grouped messages
pub fn reset_debug_stats() {
    DEBUG_STATS.reset();
    if let Ok(mut tracker) = MESSAGE_TRACKER.lock() {
        if let Some(messages) = tracker.as_mut() {
            messages.clear();
        }
    }
}

/// Print a colored summary of the debug messages seen so far
pub fn print_debug_stats_report() {
    let stats = debug_stats();

    if stats.total() == 0 {
        println!("\n{}", "✓ No GL debug messages".green().bold());
        return;
    }

    println!("\n{}", "=== GL Debug Output Report ===".bright_blue().bold());

    if stats.high > 0 {
        println!("  {} {}", "High:".red().bold(), stats.high);
    }
    if stats.medium > 0 {
        println!("  {} {}", "Medium:".yellow().bold(), stats.medium);
    }
    if stats.low > 0 {
        println!("  {} {}", "Low:".yellow(), stats.low);
    }
    if stats.notification > 0 {
        println!("  {} {}", "Notification:".bright_black(), stats.notification);
    }

    println!("  {} {}", "Total:".white().bold(), stats.total());

    if let Ok(tracker) = MESSAGE_TRACKER.lock() {
        if let Some(messages) = tracker.as_ref() {
            let repeated = messages.values().filter(|&&count| count > 1).count();
            if repeated > 0 {
                println!("\n  {} {} message(s) appeared multiple times", "ℹ".cyan(), repeated);
            }
        }
    }

    println!("{}\n", "==============================".bright_blue().bold());
}

fn track_message(key: MessageKey) -> u32 {
    let Ok(mut tracker) = MESSAGE_TRACKER.lock() else {
        return 1;
    };
    let messages = tracker.get_or_insert_with(FxHashMap::default);
    let count = messages.entry(key).or_insert(0);
    *count += 1;
    *count
}

/// Filter, count and forward one debug message
///
/// Returns the logger severity the message was forwarded with, or `None`
/// when it was filtered out.
pub(crate) fn handle_message(
    source: GLenum,
    gltype: GLenum,
    id: GLuint,
    severity: GLenum,
    message: &str,
) -> Option<LogSeverity> {
    let config = DEBUG_CONFIG
        .lock()
        .ok()
        .and_then(|guard| *guard)
        .unwrap_or_default();

    let log_severity = map_severity(severity);
    if log_severity < config.min_severity {
        return None;
    }

    DEBUG_STATS.increment(severity);
    let occurrences = track_message((source, gltype, id));
    let repeat = if occurrences > 1 {
        format!(" [×{}]", occurrences)
    } else {
        String::new()
    };

    Forge::log(
        log_severity,
        DEBUG_SOURCE,
        format!(
            "[{}/{}] #{}{} {}",
            source_name(source),
            type_name(gltype),
            id,
            repeat,
            message.trim_end()
        ),
    );
    Some(log_severity)
}

/// Callback registered with `glDebugMessageCallback`
extern "system" fn gl_debug_callback(
    source: GLenum,
    gltype: GLenum,
    id: GLuint,
    severity: GLenum,
    length: GLsizei,
    message: *const GLchar,
    _user_param: *mut c_void,
) {
    if message.is_null() {
        return;
    }
    let text = match usize::try_from(length) {
        // SAFETY: the driver passes `length` bytes at `message`
        Ok(len) => {
            let bytes = unsafe { std::slice::from_raw_parts(message as *const u8, len) };
            String::from_utf8_lossy(bytes).into_owned()
        }
        // Negative length: the message is NUL-terminated
        Err(_) => unsafe { CStr::from_ptr(message) }.to_string_lossy().into_owned(),
    };
    handle_message(source, gltype, id, severity, &text);
}

#[cfg(test)]
#[path = "debug_tests.rs"]
mod tests;
