//! Plain-text line formatting shared by the console logger and sinks

use super::LogLevel;

/// `tag: message`, the layout of every tagged line.
pub fn tagged(tag: &str, message: &str) -> String {
    if tag.is_empty() {
        message.to_string()
    } else {
        format!("{}: {}", tag, message)
    }
}

/// Uncolored rendering used when the `cli` feature is off.
pub fn plain_line(level: LogLevel, message: &str) -> String {
    format!("[{}] {}", level.as_label(), message)
}
