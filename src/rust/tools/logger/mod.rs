#[cfg(feature = "cli")]
use crossterm::style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor};
#[cfg(feature = "cli")]
use std::fmt::Write;

pub mod format;
pub mod sinks;

pub use sinks::{LogRecord, LogSink, MemorySink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, Default)]
pub struct Logger;

impl Logger {
    pub fn new() -> Self {
        Self
    }

    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        self.print_line(level, message.as_ref());
    }

    pub fn success(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Success, message);
    }

    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message);
    }

    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message);
    }

    fn print_line(&self, level: LogLevel, message: &str) {
        #[cfg(feature = "cli")]
        {
            println!("{}", self.render_colored_line(level, message));
        }
        #[cfg(not(feature = "cli"))]
        {
            println!("{}", format::plain_line(level, message));
        }
    }

    #[cfg(feature = "cli")]
    fn render_colored_line(&self, level: LogLevel, message: &str) -> String {
        let mut out = String::new();
        let (emoji, color) = level.visuals();

        out.push_str(emoji);
        out.push(' ');
        out.push_str(&self.render_signature());
        out.push(' ');
        out.push_str(&self.render_status(level, color));
        out.push(' ');
        out.push_str(message);
        out
    }

    #[cfg(feature = "cli")]
    fn render_signature(&self) -> String {
        let mut s = String::new();
        let _ = write!(&mut s, "{}", SetForegroundColor(Color::Grey));
        s.push('[');
        let _ = write!(
            &mut s,
            "{}",
            SetForegroundColor(Color::Rgb {
                r: 96,
                g: 125,
                b: 139,
            })
        );
        let _ = write!(&mut s, "{}", SetAttribute(Attribute::Bold));
        s.push_str("metrickit");
        let _ = write!(&mut s, "{}", SetAttribute(Attribute::Reset));
        let _ = write!(&mut s, "{}", SetForegroundColor(Color::Grey));
        s.push(']');
        let _ = write!(&mut s, "{}", ResetColor);
        s
    }

    #[cfg(feature = "cli")]
    fn render_status(&self, level: LogLevel, color: Color) -> String {
        let mut s = String::new();
        let _ = write!(&mut s, "{}", SetForegroundColor(color));
        let _ = write!(&mut s, "{}", SetAttribute(Attribute::Bold));
        s.push('[');
        s.push_str(level.as_label());
        s.push(']');
        let _ = write!(&mut s, "{}", SetAttribute(Attribute::Reset));
        let _ = write!(&mut s, "{}", ResetColor);
        s
    }
}

/// Timing reports and other tagged output go through the regular console
/// renderer as `tag: message`.
impl LogSink for Logger {
    fn write_line(&self, level: LogLevel, tag: &str, message: &str) {
        self.log(level, format::tagged(tag, message));
    }
}

impl LogLevel {
    pub fn as_label(self) -> &'static str {
        match self {
            LogLevel::Success => "SUCCESS",
            LogLevel::Error => "ERROR",
            LogLevel::Info => "INFO",
        }
    }

    #[cfg(feature = "cli")]
    fn visuals(self) -> (&'static str, Color) {
        match self {
            LogLevel::Success => (
                "✅",
                Color::Rgb {
                    r: 76,
                    g: 175,
                    b: 80,
                },
            ),
            LogLevel::Error => (
                "❌",
                Color::Rgb {
                    r: 244,
                    g: 67,
                    b: 54,
                },
            ),
            LogLevel::Info => (
                "ℹ️ ",
                Color::Rgb {
                    r: 33,
                    g: 150,
                    b: 243,
                },
            ),
        }
    }
}

#[cfg(test)]
#[path = "test_logger.rs"]
mod tests;
