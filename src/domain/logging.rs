//! Centralized logging system for the entire application.

use std::fmt::Display;
use std::sync::OnceLock;

/// Log levels for structured logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Component/Layer identification for logging
#[derive(Debug, Clone)]
pub enum LogComponent {
    Domain(&'static str),         // e.g., "ChartSeries"
    Application(&'static str),    // e.g., "Controller"
    Infrastructure(&'static str), // e.g., "Socket", "HTTP"
    Presentation(&'static str),   // e.g., "WASM", "View"
}

impl Display for LogComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogComponent::Domain(name) => write!(f, "🏛️ Domain::{}", name),
            LogComponent::Application(name) => write!(f, "🎯 Application::{}", name),
            LogComponent::Infrastructure(name) => write!(f, "🔧 Infrastructure::{}", name),
            LogComponent::Presentation(name) => write!(f, "🌐 Presentation::{}", name),
        }
    }
}

/// Structured log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: u64,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, component: LogComponent, message: String) -> Self {
        Self { timestamp: js_sys::Date::now() as u64, level, component, message }
    }
}

/// Centralized logger trait
pub trait Logger: Send + Sync {
    fn log(&self, entry: LogEntry);

    fn trace(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Trace, component, message.to_string()));
    }

    fn debug(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Debug, component, message.to_string()));
    }

    fn info(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Info, component, message.to_string()));
    }

    fn warn(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Warn, component, message.to_string()));
    }

    fn error(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Error, component, message.to_string()));
    }
}

/// Console logger implementation for WASM environment
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn new_production() -> Self {
        Self::new(LogLevel::Info)
    }

    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    fn format_log_entry(&self, entry: &LogEntry) -> String {
        let timestamp = Self::format_timestamp(entry.timestamp);
        format!("[{}] {} {} | {}", timestamp, entry.level, entry.component, entry.message)
    }

    fn format_timestamp(timestamp: u64) -> String {
        let date = js_sys::Date::new(&(timestamp as f64).into());
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            date.get_hours(),
            date.get_minutes(),
            date.get_seconds(),
            date.get_milliseconds()
        )
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level >= self.min_level {
            let formatted = self.format_log_entry(&entry);

            // Use appropriate console method based on log level
            match entry.level {
                LogLevel::Trace | LogLevel::Debug => {
                    web_sys::console::debug_1(&formatted.into());
                }
                LogLevel::Info => {
                    web_sys::console::info_1(&formatted.into());
                }
                LogLevel::Warn => {
                    web_sys::console::warn_1(&formatted.into());
                }
                LogLevel::Error => {
                    web_sys::console::error_1(&formatted.into());
                }
            }
        }
    }
}

/// Global logger instance using thread-safe static
static GLOBAL_LOGGER: OnceLock<Box<dyn Logger + Sync + Send>> = OnceLock::new();

/// Initialize global logger
pub fn init_logger(logger: Box<dyn Logger + Sync + Send>) {
    let _ = GLOBAL_LOGGER.set(logger);
}

/// Get global logger reference
pub fn get_logger() -> &'static dyn Logger {
    GLOBAL_LOGGER.get().map(|logger| logger.as_ref()).unwrap_or_else(|| {
        // Fallback to a no-op logger if not initialized
        static FALLBACK: NoOpLogger = NoOpLogger;
        &FALLBACK
    })
}

/// No-op logger for fallback
struct NoOpLogger;

impl Logger for NoOpLogger {
    fn log(&self, _entry: LogEntry) {
        // No-op
    }
}
