//! Find meeting windows in a day of busy events.
//!
//! The search sweeps backward from the end of the day. Events are visited in
//! order of descending end time, and a single boundary (`prev_end`) tracks the
//! earliest conflicting start seen so far. Everything between an event's end
//! and that boundary is free for the attendees in question, so no interval
//! merging is needed. Sorting dominates: O(n log n + n·m) for n events of up
//! to m attendees each.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::error::{FinderError, Result};
use crate::event::{self, Event};
use crate::request::MeetingRequest;
use crate::time_range::{TimeRange, END_OF_DAY, MINUTES_PER_DAY, START_OF_DAY, WHOLE_DAY};

/// Longest meeting that can be requested. A whole-day meeting is valid; one
/// minute more is not.
pub const MAX_MEETING_DURATION: u32 = MINUTES_PER_DAY;

/// Find every free window of at least `duration` minutes for `attendees`.
///
/// Only events attended by at least one of `attendees` block time. Windows are
/// returned in chronological order and never overlap. With a zero `duration`,
/// the empty gap between back-to-back events counts as a window.
pub fn find_free_windows(
    events: &[Event],
    attendees: &BTreeSet<String>,
    duration: u32,
) -> Vec<TimeRange> {
    // Stable sort: equal end times keep their input order.
    let mut by_end: Vec<&Event> = events.iter().collect();
    by_end.sort_by(|a, b| event::by_end_descending(a, b));

    let mut windows = Vec::new();
    let mut prev_end = END_OF_DAY + 1;
    let mut conflicts = 0usize;

    for event in by_end {
        if !event.is_attended_by_any(attendees) {
            continue;
        }
        conflicts += 1;

        let when = event.when();
        // When this event ends after the boundary there is no gap after it.
        if when.end() <= prev_end && prev_end - when.end() >= duration {
            if let Ok(window) = TimeRange::from_start_end(when.end(), prev_end, false) {
                trace!(window = %window, event = event.title(), "free window after event");
                windows.push(window);
            }
        }
        prev_end = prev_end.min(when.start());
    }

    if prev_end > START_OF_DAY && prev_end - START_OF_DAY >= duration {
        if let Ok(window) = TimeRange::from_start_end(START_OF_DAY, prev_end, false) {
            windows.push(window);
        }
    }

    windows.reverse();
    debug!(
        events = events.len(),
        conflicts,
        windows = windows.len(),
        duration,
        "computed free windows"
    );
    windows
}

/// Find meeting times for `request` among `events`.
///
/// Optional attendees are included when that still leaves at least one
/// window; otherwise the search is repeated with the mandatory attendees
/// alone. An invalid duration yields no windows. With no events, or nobody
/// invited, the whole day is free.
#[doc(alias = "query")]
pub fn find_meeting_times(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    match try_find_meeting_times(events, request) {
        Ok(windows) => windows,
        Err(err) => {
            debug!(error = %err, "rejecting meeting request");
            Vec::new()
        }
    }
}

/// Like [`find_meeting_times`], but an invalid duration is reported instead of
/// being folded into an empty result.
///
/// # Errors
/// Returns `FinderError::InvalidDuration` if the requested duration is
/// negative or longer than [`MAX_MEETING_DURATION`].
pub fn try_find_meeting_times(events: &[Event], request: &MeetingRequest) -> Result<Vec<TimeRange>> {
    request.validate_duration()?;
    let duration =
        u32::try_from(request.duration()).map_err(|_| FinderError::InvalidDuration(request.duration()))?;

    let all_attendees = request.all_attendees();
    if events.is_empty() || all_attendees.is_empty() {
        return Ok(vec![WHOLE_DAY]);
    }

    let with_optional = find_free_windows(events, &all_attendees, duration);
    if !with_optional.is_empty() {
        return Ok(with_optional);
    }

    debug!(
        optional = request.optional_attendees().len(),
        "no window fits optional attendees, falling back to mandatory only"
    );
    Ok(find_free_windows(events, request.attendees(), duration))
}
