use super::*;

#[test]
fn test_memory_sink_records_lines_in_order() {
    let sink = MemorySink::new();
    sink.info("net", "first");
    sink.write_line(LogLevel::Error, "net", "second");

    let records = sink.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].level, LogLevel::Info);
    assert_eq!(records[0].tag, "net");
    assert_eq!(records[0].message, "first");
    assert_eq!(records[1].level, LogLevel::Error);
    assert_eq!(sink.messages(), vec!["first", "second"]);
}

#[test]
fn test_memory_sink_clear() {
    let sink = MemorySink::new();
    sink.info("t", "x");
    assert!(!sink.is_empty());
    sink.clear();
    assert!(sink.is_empty());
}

#[test]
fn test_sink_through_reference() {
    let sink = MemorySink::new();
    let by_ref: &dyn LogSink = &sink;
    by_ref.info("t", "via ref");
    assert_eq!(sink.len(), 1);
}

#[test]
fn test_tagged_format() {
    assert_eq!(format::tagged("Timing", "load: begin"), "Timing: load: begin");
    assert_eq!(format::tagged("", "bare"), "bare");
}

#[test]
fn test_plain_line_labels() {
    assert_eq!(format::plain_line(LogLevel::Info, "hi"), "[INFO] hi");
    assert_eq!(format::plain_line(LogLevel::Error, "failed"), "[ERROR] failed");
    assert_eq!(format::plain_line(LogLevel::Success, "done"), "[SUCCESS] done");
}
