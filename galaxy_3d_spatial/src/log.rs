//! Internal logging system for the Galaxy3D spatial index
//!
//! The octree reports suspicious lifecycle events (erasing an element that
//! was never inserted, conflicting configuration, subdivision hitting the
//! depth cap) through this module instead of failing the call.
//!
//! - Customizable sink via the Logger trait (see `Diagnostics::set_logger`)
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - File and line information for detailed ERROR logs

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Sink for spatial index diagnostics
///
/// # Example
///
/// ```no_run
/// use galaxy_3d_spatial::galaxy3d::log::{Logger, LogEntry, LogSeverity};
///
/// struct WarningCounter(std::sync::atomic::AtomicUsize);
///
/// impl Logger for WarningCounter {
///     fn log(&self, entry: &LogEntry) {
///         if entry.severity >= LogSeverity::Warn {
///             self.0.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
///         }
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Receive one log entry
    fn log(&self, entry: &LogEntry);
}

/// One diagnostic message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// Creation time
    pub timestamp: SystemTime,

    /// Emitting component (e.g., "galaxy3d::Octree")
    pub source: String,

    /// Message text
    pub message: String,

    /// Source file (only for detailed ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for detailed ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Structural churn (expand / collapse)
    Trace,

    /// Development information
    Debug,

    /// Notable events
    Info,

    /// Probable misuse by the owning subsystem
    Warn,

    /// Rejected operations, logged with file:line
    Error,
}

impl LogSeverity {
    /// Fixed-width label used by `DefaultLogger`
    pub fn label(self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }
}

/// Console logger with colored severities
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Detailed: `[timestamp] [SEVERITY] [source] message (file:line)`
pub struct DefaultLogger;

impl DefaultLogger {
    /// Render an entry without colors (the console output adds them on top)
    pub fn format_plain(entry: &LogEntry) -> String {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f");
        match (entry.file, entry.line) {
            (Some(file), Some(line)) => format!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp, entry.severity.label(), entry.source, entry.message, file, line
            ),
            _ => format!(
                "[{}] [{}] [{}] {}",
                timestamp, entry.severity.label(), entry.source, entry.message
            ),
        }
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let label = entry.severity.label();
        let severity = match entry.severity {
            LogSeverity::Trace => label.bright_black(),
            LogSeverity::Debug => label.cyan(),
            LogSeverity::Info => label.green(),
            LogSeverity::Warn => label.yellow(),
            LogSeverity::Error => label.red().bold(),
        };
        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!("[{}] [{}] [{}] {} ({}:{})", timestamp, severity, source, entry.message, file, line);
        } else {
            println!("[{}] [{}] [{}] {}", timestamp, severity, source, entry.message);
        }
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message (sector expand/collapse churn)
///
/// # Example
///
/// ```ignore
/// spatial_trace!("galaxy3d::Octree", "Sector {:?} expanded", key);
/// ```
#[macro_export]
macro_rules! spatial_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::galaxy3d::Diagnostics::log(
            $crate::galaxy3d::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message (development information)
///
/// # Example
///
/// ```ignore
/// spatial_debug!("galaxy3d::Octree", "Depth cap reached with {} elements", count);
/// ```
#[macro_export]
macro_rules! spatial_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::galaxy3d::Diagnostics::log(
            $crate::galaxy3d::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message (important events)
///
/// # Example
///
/// ```ignore
/// spatial_info!("galaxy3d::Octree", "Rebuilt with {} elements", count);
/// ```
#[macro_export]
macro_rules! spatial_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::galaxy3d::Diagnostics::log(
            $crate::galaxy3d::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message (potential lifecycle bugs upstream)
///
/// # Example
///
/// ```ignore
/// spatial_warn!("galaxy3d::Octree", "Element {:?} is not part of the octree", id);
/// ```
#[macro_export]
macro_rules! spatial_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::galaxy3d::Diagnostics::log(
            $crate::galaxy3d::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
///
/// # Example
///
/// ```ignore
/// spatial_error!("galaxy3d::Octree", "Rejected root bounds: {}", reason);
/// ```
#[macro_export]
macro_rules! spatial_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::galaxy3d::Diagnostics::log_detailed(
            $crate::galaxy3d::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
