use super::*;
use crate::shared::clock::ManualClock;
use crate::tools::logger::{LogLevel, MemorySink};

fn timer_with_splits(at: &[(u64, &str)]) -> (SplitTimer<ManualClock>, ManualClock) {
    let clock = ManualClock::new(0);
    let mut timer = SplitTimer::with_clock(clock.clone(), "Timing", "load", true);
    for (ms, label) in at {
        clock.set(*ms);
        timer.add_split(Some(*label));
    }
    (timer, clock)
}

#[test]
fn test_report_from_previous_split() {
    let (timer, _) = timer_with_splits(&[(9, "A"), (10, "B"), (16, "C")]);
    let sink = MemorySink::new();

    timer.emit_report(&sink, false);

    assert_eq!(
        sink.messages(),
        vec![
            "load: begin",
            "load:      9 ms, A",
            "load:      1 ms, B",
            "load:      6 ms, C",
            "load: end, 16 ms",
        ]
    );
    assert!(
        sink.records()
            .iter()
            .all(|r| r.tag == "Timing" && r.level == LogLevel::Info)
    );
}

#[test]
fn test_report_from_start() {
    let (timer, _) = timer_with_splits(&[(9, "A"), (10, "B"), (16, "C")]);
    assert_eq!(
        timer.report_lines(true),
        vec![
            "load: begin",
            "load:      9 ms, A",
            "load:      10 ms, B",
            "load:      16 ms, C",
            "load: end, 16 ms",
        ]
    );
}

#[test]
fn test_from_start_deltas_are_prefix_sums() {
    let (timer, _) = timer_with_splits(&[(3, "a"), (3, "b"), (20, "c"), (21, "d"), (50, "e")]);
    let from_start = timer.report(true).unwrap();
    let from_prev = timer.report(false).unwrap();

    let mut running = 0;
    for (cumulative, step) in from_start.entries.iter().zip(&from_prev.entries) {
        running += step.delta_ms;
        assert_eq!(cumulative.delta_ms, running);
    }
    assert_eq!(from_start.total_ms, running);
}

#[test]
fn test_no_splits_reports_zero_total() {
    let clock = ManualClock::new(42);
    let timer = SplitTimer::with_clock(clock, "Timing", "idle", true);
    assert_eq!(timer.splits().len(), 1);
    assert_eq!(timer.report_lines(false), vec!["idle: begin", "idle: end, 0 ms"]);
}

#[test]
fn test_null_split_label_renders_as_null() {
    let clock = ManualClock::new(0);
    let mut timer = SplitTimer::with_clock(clock.clone(), "t", "s", true);
    clock.advance(4);
    timer.add_split(None);
    assert_eq!(timer.report_lines(false)[1], "s:      4 ms, null");
}

#[test]
fn test_disabled_session_is_inert() {
    let clock = ManualClock::new(0);
    let mut timer = SplitTimer::with_clock(clock.clone(), "t", "quiet", false);
    let sink = MemorySink::new();

    clock.advance(5);
    timer.add_split(Some("a"));
    timer.add_split(None);
    timer.emit_report(&sink, true);
    timer.emit_report(&sink, false);

    assert!(!timer.is_enabled());
    assert!(timer.splits().is_empty());
    assert!(timer.report(false).is_none());
    assert_eq!(timer.total_elapsed_ms(), 0);
    assert!(sink.is_empty());
}

#[test]
fn test_start_session_discards_previous_splits() {
    let (mut timer, clock) = timer_with_splits(&[(5, "old")]);
    clock.set(100);
    timer.start_session("Other", "fresh", true);

    assert_eq!(timer.tag(), "Other");
    assert_eq!(timer.label(), "fresh");
    assert_eq!(
        timer.splits(),
        &[Split {
            at_ms: 100,
            label: None
        }]
    );
}

#[test]
fn test_restart_keeps_identifiers_and_reevaluates_flag() {
    let (mut timer, clock) = timer_with_splits(&[(5, "x")]);

    timer.restart_session(false);
    assert_eq!(timer.tag(), "Timing");
    assert_eq!(timer.label(), "load");
    assert!(!timer.is_enabled());
    assert!(timer.splits().is_empty());

    clock.set(30);
    timer.restart_session(true);
    assert!(timer.is_enabled());
    assert_eq!(timer.splits().len(), 1);
    assert_eq!(timer.splits()[0].at_ms, 30);
}

#[test]
fn test_report_can_be_emitted_twice() {
    let (timer, _) = timer_with_splits(&[(2, "a")]);
    let sink = MemorySink::new();
    timer.emit_report(&sink, false);
    timer.emit_report(&sink, false);

    let messages = sink.messages();
    assert_eq!(messages.len(), 6);
    assert_eq!(messages[..3], messages[3..]);
}

#[test]
fn test_report_serializes_to_json() {
    let (timer, _) = timer_with_splits(&[(7, "parse")]);
    let json = serde_json::to_value(timer.report(false).unwrap()).unwrap();
    assert_eq!(json["label"], "load");
    assert_eq!(json["entries"][0]["label"], "parse");
    assert_eq!(json["entries"][0]["delta_ms"], 7);
    assert_eq!(json["total_ms"], 7);
}

#[test]
fn test_monotonic_timer_records_real_time() {
    let mut timer = SplitTimer::new("t", "real", true);
    std::thread::sleep(std::time::Duration::from_millis(10));
    timer.add_split(Some("slept"));
    assert!(timer.total_elapsed_ms() >= 10);
}
