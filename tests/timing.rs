use metrickit::{LogLevel, ManualClock, MemorySink, SplitTimer, Unit};
use metrickit::engine::units::{self, DisplayMetrics};

#[test]
fn timing_session_reports_through_sink() {
    let clock = ManualClock::new(1_000);
    let mut timer = SplitTimer::with_clock(clock.clone(), "Startup", "init", true);

    clock.advance(9);
    timer.add_split(Some("A"));
    clock.advance(1);
    timer.add_split(Some("B"));
    clock.advance(6);
    timer.add_split(Some("C"));

    let sink = MemorySink::new();
    timer.emit_report(&sink, false);

    let records = sink.records();
    assert_eq!(records.len(), 5);
    assert!(records.iter().all(|r| r.tag == "Startup" && r.level == LogLevel::Info));
    assert_eq!(records[4].message, "init: end, 16 ms");
}

#[test]
fn disabled_session_writes_nothing() {
    let mut timer = SplitTimer::new("Startup", "off", false);
    timer.add_split(Some("ignored"));
    let sink = MemorySink::new();
    timer.emit_report(&sink, true);
    assert!(sink.is_empty());
}

#[test]
fn conversions_through_public_api() {
    let metrics = DisplayMetrics::new(2.0, 2.0, 160.0);
    assert_eq!(units::to_pixels(Unit::Dip, 10.0, &metrics), 20.0);
    assert_eq!(units::convert(Unit::Px, 20.0, &metrics, Unit::Dip), 10.0);
}
