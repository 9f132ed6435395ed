//! Day-relative time ranges measured in minutes from midnight.
//!
//! A [`TimeRange`] is a half-open `[start, end)` interval that always lies
//! within a single day, `0..=MINUTES_PER_DAY`. The inclusive-end constructor
//! form exists so callers can say "through the last minute of the day" with
//! `TimeRange::from_start_end(start, END_OF_DAY, true)`.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{FinderError, Result};

/// Number of minutes in a day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Minute index of midnight at the start of the day.
pub const START_OF_DAY: u32 = 0;

/// Minute index of 23:59, the last minute of the day.
pub const END_OF_DAY: u32 = MINUTES_PER_DAY - 1;

/// The range covering the entire day, 00:00 through 23:59 inclusive.
pub const WHOLE_DAY: TimeRange = TimeRange {
    start: START_OF_DAY,
    end: MINUTES_PER_DAY,
};

/// A `[start, end)` range of minutes within one day.
///
/// Ordering is by start, then by end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeRange")]
pub struct TimeRange {
    start: u32,
    end: u32,
}

#[derive(Deserialize)]
struct RawTimeRange {
    start: u32,
    end: u32,
}

impl TryFrom<RawTimeRange> for TimeRange {
    type Error = FinderError;

    fn try_from(raw: RawTimeRange) -> Result<Self> {
        TimeRange::from_start_end(raw.start, raw.end, false)
    }
}

impl TimeRange {
    /// Build `[start, start + duration)`.
    ///
    /// # Errors
    /// Returns `FinderError::OutOfDay` if the range would end after midnight.
    pub fn from_start_duration(start: u32, duration: u32) -> Result<Self> {
        Self::checked(start, start.saturating_add(duration))
    }

    /// Build a range from explicit bounds.
    ///
    /// With `inclusive` set the range also covers the `end` minute, so the
    /// effective exclusive end is `end + 1`.
    ///
    /// # Errors
    /// Returns `FinderError::InvertedRange` if `end < start`, and
    /// `FinderError::OutOfDay` if the effective end is past `MINUTES_PER_DAY`.
    pub fn from_start_end(start: u32, end: u32, inclusive: bool) -> Result<Self> {
        if end < start {
            return Err(FinderError::InvertedRange { start, end });
        }
        let end = if inclusive { end.saturating_add(1) } else { end };
        Self::checked(start, end)
    }

    fn checked(start: u32, end: u32) -> Result<Self> {
        if end > MINUTES_PER_DAY {
            return Err(FinderError::OutOfDay { end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Length of the range in minutes.
    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `minute` falls inside `[start, end)`.
    pub fn contains(&self, minute: u32) -> bool {
        self.start <= minute && minute < self.end
    }

    /// Whether `other` lies entirely within this range.
    ///
    /// An empty range contains nothing, but an empty `other` on a boundary of
    /// a non-empty range is contained.
    pub fn contains_range(&self, other: &TimeRange) -> bool {
        !self.is_empty() && self.start <= other.start && other.end <= self.end
    }

    /// Two ranges overlap when either one contains the other's start.
    ///
    /// Adjacent ranges (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.contains(other.start) || other.contains(self.start)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {})",
            format_clock(self.start),
            format_clock(self.end)
        )
    }
}

/// Convert a time of day to its minute index.
///
/// Inputs are not range-checked; use [`parse_clock`] for untrusted values.
pub const fn minutes_of(hours: u32, minutes: u32) -> u32 {
    hours * 60 + minutes
}

/// Parse an `HH:MM` clock time into a minute index.
///
/// `"24:00"` is accepted and maps to [`MINUTES_PER_DAY`], the exclusive end of
/// the day.
///
/// # Errors
/// Returns `FinderError::InvalidClock` if the string is not a valid time.
pub fn parse_clock(s: &str) -> Result<u32> {
    let trimmed = s.trim();
    if trimmed == "24:00" {
        return Ok(MINUTES_PER_DAY);
    }
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .map(|t| t.num_seconds_from_midnight() / 60)
        .map_err(|_| FinderError::InvalidClock(s.to_string()))
}

/// Render a minute index as `HH:MM`; the end of the day renders as `24:00`.
pub fn format_clock(minute: u32) -> String {
    if minute == MINUTES_PER_DAY {
        return "24:00".to_string();
    }
    NaiveTime::from_hms_opt(minute / 60, minute % 60, 0)
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| format!("{:02}:{:02}", minute / 60, minute % 60))
}
