//! Console progress logging.
//!
//! Progress goes to stderr so stdout only carries the final result line.
//! Verbosity is set once at startup; warnings and errors always print.

use once_cell::sync::OnceCell;

/// Log level for console display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// How much progress output to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Warnings and errors only
    Quiet,
    #[default]
    Normal,
}

/// A single log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Nesting depth under the previous entry
    pub indent: u8,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Info, message: message.into(), indent: 0 }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Success, message: message.into(), indent: 0 }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Warning, message: message.into(), indent: 0 }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Error, message: message.into(), indent: 0 }
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// Format the entry as a console line.
    pub fn render(&self) -> String {
        let prefix = match self.level {
            LogLevel::Info => "   ",
            LogLevel::Success => "   ✓",
            LogLevel::Warning => "   ⚠️",
            LogLevel::Error => "   ❌",
        };
        let indent = "   ".repeat(self.indent as usize);
        format!("{}{} {}", indent, prefix, self.message)
    }

    fn is_visible(&self, verbosity: Verbosity) -> bool {
        match verbosity {
            Verbosity::Normal => true,
            Verbosity::Quiet => matches!(self.level, LogLevel::Warning | LogLevel::Error),
        }
    }
}

static VERBOSITY: OnceCell<Verbosity> = OnceCell::new();

/// Set the process-wide verbosity. Later calls are ignored.
pub fn init(verbosity: Verbosity) {
    let _ = VERBOSITY.set(verbosity);
}

pub fn verbosity() -> Verbosity {
    VERBOSITY.get().copied().unwrap_or_default()
}

/// Print an entry to stderr if the current verbosity allows it
pub fn log(entry: LogEntry) {
    if entry.is_visible(verbosity()) {
        eprintln!("{}", entry.render());
    }
}

pub fn log_info(msg: impl Into<String>) {
    log(LogEntry::info(msg));
}

pub fn log_success(msg: impl Into<String>) {
    log(LogEntry::success(msg));
}

pub fn log_warning(msg: impl Into<String>) {
    log(LogEntry::warning(msg));
}

pub fn log_error(msg: impl Into<String>) {
    log(LogEntry::error(msg));
}

pub fn log_info_indent(msg: impl Into<String>, indent: u8) {
    log(LogEntry::info(msg).with_indent(indent));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prefixes() {
        assert_eq!(LogEntry::info("Reading").render(), "    Reading");
        assert_eq!(LogEntry::success("Done").render(), "   ✓ Done");
        assert!(LogEntry::error("Boom").render().contains("❌ Boom"));
    }

    #[test]
    fn test_render_indent() {
        let line = LogEntry::info("[ 1] id").with_indent(1).render();
        assert!(line.starts_with("       "));
        assert!(line.ends_with("[ 1] id"));
    }

    #[test]
    fn test_quiet_keeps_warnings() {
        assert!(!LogEntry::info("x").is_visible(Verbosity::Quiet));
        assert!(!LogEntry::success("x").is_visible(Verbosity::Quiet));
        assert!(LogEntry::warning("x").is_visible(Verbosity::Quiet));
        assert!(LogEntry::error("x").is_visible(Verbosity::Quiet));
        assert!(LogEntry::info("x").is_visible(Verbosity::Normal));
    }
}
