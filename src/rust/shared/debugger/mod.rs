//! Debugger utilities - split timing sessions and their reports
use serde::Serialize;

use crate::shared::clock::{Clock, MonotonicClock};
use crate::tools::logger::LogSink;

/// A named timestamp. The implicit session start carries no label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub at_ms: u64,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub label: Option<String>,
    pub delta_ms: u64,
}

/// Structured form of a dumped session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimingReport {
    pub tag: String,
    pub label: String,
    pub from_start: bool,
    pub entries: Vec<ReportEntry>,
    pub total_ms: u64,
}

impl TimingReport {
    /// Lines in emission order: begin, one per split, end.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.entries.len() + 2);
        lines.push(format!("{}: begin", self.label));
        for entry in &self.entries {
            lines.push(format!(
                "{}:      {} ms, {}",
                self.label,
                entry.delta_ms,
                entry.label.as_deref().unwrap_or("null")
            ));
        }
        lines.push(format!("{}: end, {} ms", self.label, self.total_ms));
        lines
    }
}

/// Records named time splits for one session and dumps the elapsed times.
///
/// Whether a session records anything is decided once, when it starts, from
/// the `debug` flag passed in. A disabled session ignores every call until the
/// next `start_session`/`restart_session`.
///
/// The timer is meant to be owned by a single call stack; it does no
/// synchronization of its own.
#[derive(Debug)]
pub struct SplitTimer<C: Clock = MonotonicClock> {
    tag: String,
    label: String,
    enabled: bool,
    splits: Vec<Split>,
    clock: C,
}

impl SplitTimer<MonotonicClock> {
    pub fn new(tag: impl Into<String>, label: impl Into<String>, debug: bool) -> Self {
        Self::with_clock(MonotonicClock::new(), tag, label, debug)
    }
}

impl<C: Clock> SplitTimer<C> {
    pub fn with_clock(
        clock: C,
        tag: impl Into<String>,
        label: impl Into<String>,
        debug: bool,
    ) -> Self {
        let mut timer = Self {
            tag: String::new(),
            label: String::new(),
            enabled: false,
            splits: Vec::new(),
            clock,
        };
        timer.start_session(tag, label, debug);
        timer
    }

    /// Begin a fresh session under new identifiers.
    pub fn start_session(&mut self, tag: impl Into<String>, label: impl Into<String>, debug: bool) {
        self.tag = tag.into();
        self.label = label.into();
        self.restart_session(debug);
    }

    /// Begin a fresh session reusing the current tag and label.
    pub fn restart_session(&mut self, debug: bool) {
        self.enabled = debug;
        self.splits.clear();
        if !self.enabled {
            return;
        }
        self.push_split(None);
    }

    pub fn add_split(&mut self, label: Option<&str>) {
        if !self.enabled {
            return;
        }
        self.push_split(label.map(str::to_string));
    }

    fn push_split(&mut self, label: Option<String>) {
        let at_ms = self.clock.now_ms();
        self.splits.push(Split { at_ms, label });
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn splits(&self) -> &[Split] {
        &self.splits
    }

    pub fn total_elapsed_ms(&self) -> u64 {
        match (self.splits.first(), self.splits.last()) {
            (Some(first), Some(last)) => last.at_ms.saturating_sub(first.at_ms),
            _ => 0,
        }
    }

    /// Deltas are measured from the session start when `from_start` is set,
    /// otherwise from the previous split.
    pub fn report(&self, from_start: bool) -> Option<TimingReport> {
        if !self.enabled {
            return None;
        }
        let first = self.splits.first()?.at_ms;

        let entries = self
            .splits
            .windows(2)
            .map(|pair| {
                let base = if from_start { first } else { pair[0].at_ms };
                ReportEntry {
                    label: pair[1].label.clone(),
                    delta_ms: pair[1].at_ms.saturating_sub(base),
                }
            })
            .collect();

        Some(TimingReport {
            tag: self.tag.clone(),
            label: self.label.clone(),
            from_start,
            entries,
            total_ms: self.total_elapsed_ms(),
        })
    }

    pub fn report_lines(&self, from_start: bool) -> Vec<String> {
        self.report(from_start)
            .map(|report| report.lines())
            .unwrap_or_default()
    }

    /// Write the report to `sink` at info level under the session tag.
    pub fn emit_report(&self, sink: &impl LogSink, from_start: bool) {
        for line in self.report_lines(from_start) {
            sink.info(&self.tag, &line);
        }
    }
}

#[cfg(test)]
#[path = "test_shared_debugger.rs"]
mod tests;
