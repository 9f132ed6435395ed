//! Tests for time ranges, events and the clock helpers.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use meeting_finder::event::by_end_descending;
use meeting_finder::time_range::{format_clock, minutes_of, parse_clock};
use meeting_finder::{Event, FinderError, TimeRange, END_OF_DAY, MINUTES_PER_DAY, WHOLE_DAY};

fn range(start: u32, end: u32) -> TimeRange {
    TimeRange::from_start_end(start, end, false).unwrap()
}

// ── Construction ────────────────────────────────────────────────────────────

#[test]
fn start_duration_and_start_end_agree() {
    let a = TimeRange::from_start_duration(minutes_of(8, 30), 30).unwrap();
    let b = TimeRange::from_start_end(minutes_of(8, 30), minutes_of(9, 0), false).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.start(), 510);
    assert_eq!(a.end(), 540);
    assert_eq!(a.duration(), 30);
}

#[test]
fn inclusive_end_reaches_midnight() {
    let evening = TimeRange::from_start_end(minutes_of(21, 0), END_OF_DAY, true).unwrap();

    assert_eq!(evening.end(), MINUTES_PER_DAY);
    assert_eq!(evening.duration(), 180);
    assert!(evening.contains(END_OF_DAY));
}

#[test]
fn whole_day_spans_every_minute() {
    assert_eq!(WHOLE_DAY, TimeRange::from_start_end(0, END_OF_DAY, true).unwrap());
    assert_eq!(WHOLE_DAY, TimeRange::from_start_duration(0, MINUTES_PER_DAY).unwrap());
    assert_eq!(WHOLE_DAY.duration(), 1440);
    assert_eq!(END_OF_DAY, 1439);
}

#[test]
fn zero_duration_range_is_valid_and_empty() {
    let empty = TimeRange::from_start_duration(600, 0).unwrap();

    assert!(empty.is_empty());
    assert_eq!(empty.duration(), 0);
    assert!(!empty.contains(600));
}

#[test]
fn inverted_range_is_rejected() {
    assert_eq!(
        TimeRange::from_start_end(600, 500, false),
        Err(FinderError::InvertedRange { start: 600, end: 500 })
    );
}

#[test]
fn range_past_midnight_is_rejected() {
    assert_eq!(
        TimeRange::from_start_duration(minutes_of(23, 30), 60),
        Err(FinderError::OutOfDay { end: 1470 })
    );
    assert_eq!(
        TimeRange::from_start_end(0, MINUTES_PER_DAY, true),
        Err(FinderError::OutOfDay { end: 1441 })
    );
}

#[test]
fn overflowing_duration_reports_saturated_end() {
    assert_eq!(
        TimeRange::from_start_duration(600, u32::MAX),
        Err(FinderError::OutOfDay { end: u32::MAX })
    );
    assert_eq!(
        TimeRange::from_start_end(0, u32::MAX, true),
        Err(FinderError::OutOfDay { end: u32::MAX })
    );
}

// ── Containment and overlap ─────────────────────────────────────────────────

#[test]
fn contains_is_half_open() {
    let r = range(60, 120);

    assert!(r.contains(60));
    assert!(r.contains(119));
    assert!(!r.contains(120));
    assert!(!r.contains(59));
}

#[test]
fn contains_range_checks_both_bounds() {
    let outer = range(60, 180);

    assert!(outer.contains_range(&range(60, 180)));
    assert!(outer.contains_range(&range(90, 120)));
    assert!(outer.contains_range(&range(180, 180)));
    assert!(!outer.contains_range(&range(30, 90)));
    assert!(!outer.contains_range(&range(150, 200)));
    assert!(!range(60, 60).contains_range(&range(60, 60)));
}

#[test]
fn adjacent_ranges_do_not_overlap() {
    assert!(!range(60, 120).overlaps(&range(120, 180)));
    assert!(!range(120, 180).overlaps(&range(60, 120)));
}

#[test]
fn overlap_is_symmetric() {
    let a = range(60, 120);
    let b = range(90, 150);
    let nested = range(70, 80);

    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
    assert!(a.overlaps(&nested));
    assert!(nested.overlaps(&a));
}

// ── Ordering ────────────────────────────────────────────────────────────────

#[test]
fn ranges_order_by_start_then_end() {
    let mut ranges = vec![range(60, 120), range(0, 30), range(60, 90)];
    ranges.sort();

    assert_eq!(ranges, vec![range(0, 30), range(60, 90), range(60, 120)]);
}

#[test]
fn events_sort_latest_end_first() {
    let early = Event::new("early", range(60, 200), ["a"]);
    let late = Event::new("late", range(100, 150), ["a"]);

    // Ends descending: the event ending at 200 comes first.
    assert_eq!(by_end_descending(&early, &late), Ordering::Less);
    assert_eq!(by_end_descending(&late, &early), Ordering::Greater);
}

// ── Events ──────────────────────────────────────────────────────────────────

#[test]
fn event_attendees_are_deduplicated() {
    let event = Event::new("sync", range(0, 30), ["a", "b", "a"]);

    assert_eq!(event.attendees().len(), 2);
    assert_eq!(event.title(), "sync");
    assert_eq!(event.when(), range(0, 30));
}

#[test]
fn event_attendance_intersection() {
    let event = Event::new("sync", range(0, 30), ["a", "b"]);
    let others: BTreeSet<String> = ["c", "d"].iter().map(|s| s.to_string()).collect();
    let overlapping: BTreeSet<String> = ["b", "c", "d"].iter().map(|s| s.to_string()).collect();

    assert!(!event.is_attended_by_any(&others));
    assert!(event.is_attended_by_any(&overlapping));
    assert!(!event.is_attended_by_any(&BTreeSet::new()));
}

// ── Clock helpers ───────────────────────────────────────────────────────────

#[test]
fn parse_clock_accepts_valid_times() {
    assert_eq!(parse_clock("00:00").unwrap(), 0);
    assert_eq!(parse_clock("08:30").unwrap(), 510);
    assert_eq!(parse_clock(" 23:59 ").unwrap(), END_OF_DAY);
    assert_eq!(parse_clock("24:00").unwrap(), MINUTES_PER_DAY);
}

#[test]
fn parse_clock_rejects_garbage() {
    for bad in ["", "8", "25:00", "12:60", "noon"] {
        assert_eq!(
            parse_clock(bad),
            Err(FinderError::InvalidClock(bad.to_string())),
            "{bad:?} should not parse"
        );
    }
}

#[test]
fn format_clock_pads_and_handles_midnight() {
    assert_eq!(format_clock(0), "00:00");
    assert_eq!(format_clock(510), "08:30");
    assert_eq!(format_clock(MINUTES_PER_DAY), "24:00");
}

#[test]
fn display_shows_half_open_clock_range() {
    let r = TimeRange::from_start_end(minutes_of(9, 0), END_OF_DAY, true).unwrap();
    assert_eq!(r.to_string(), "[09:00, 24:00)");
}

#[test]
fn serializes_as_minute_bounds() {
    let json = serde_json::to_string(&range(510, 540)).unwrap();
    assert_eq!(json, r#"{"start":510,"end":540}"#);
}
