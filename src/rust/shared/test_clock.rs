use super::*;
use std::thread;
use std::time::Duration;

#[test]
fn test_monotonic_clock_advances() {
    let clock = MonotonicClock::new();
    let first = clock.now_ms();
    thread::sleep(Duration::from_millis(10));
    assert!(clock.now_ms() >= first + 10);
}

#[test]
fn test_manual_clock_clones_share_reading() {
    let clock = ManualClock::new(5);
    let handle = clock.clone();

    handle.advance(7);
    assert_eq!(clock.now_ms(), 12);

    handle.set(100);
    assert_eq!(clock.now_ms(), 100);
}

#[test]
fn test_manual_clock_advance_saturates() {
    let clock = ManualClock::new(u64::MAX - 1);
    clock.advance(10);
    assert_eq!(clock.now_ms(), u64::MAX);
}
