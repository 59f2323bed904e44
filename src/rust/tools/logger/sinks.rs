use std::cell::RefCell;

use super::LogLevel;

/// Line-oriented log channel addressed by tag.
pub trait LogSink {
    fn write_line(&self, level: LogLevel, tag: &str, message: &str);

    fn info(&self, tag: &str, message: &str) {
        self.write_line(LogLevel::Info, tag, message);
    }
}

impl<S: LogSink + ?Sized> LogSink for &S {
    fn write_line(&self, level: LogLevel, tag: &str, message: &str) {
        (**self).write_line(level, tag, message);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub tag: String,
    pub message: String,
}

/// Sink that keeps every line in memory instead of printing it.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: RefCell<Vec<LogRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records.borrow().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records
            .borrow()
            .iter()
            .map(|r| r.message.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.records.borrow_mut().clear();
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, level: LogLevel, tag: &str, message: &str) {
        self.records.borrow_mut().push(LogRecord {
            level,
            tag: tag.to_string(),
            message: message.to_string(),
        });
    }
}
