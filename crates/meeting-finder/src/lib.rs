//! # meeting-finder
//!
//! Deterministic meeting slot search over a single day of busy events.
//!
//! Given the day's events (each tagged with its attendees) and a meeting
//! request, the finder returns every free window long enough for the meeting
//! in which all mandatory attendees are available. Optional attendees are
//! honoured when at least one window exists with them included; otherwise
//! they are dropped as a group.
//!
//! ## Quick start
//!
//! ```rust
//! use meeting_finder::{find_meeting_times, Event, MeetingRequest, TimeRange, END_OF_DAY};
//!
//! let events = vec![Event::new(
//!     "Standup",
//!     TimeRange::from_start_duration(8 * 60 + 30, 30).unwrap(),
//!     ["alice"],
//! )];
//! let request = MeetingRequest::new(["alice"], 30);
//!
//! let windows = find_meeting_times(&events, &request);
//! assert_eq!(
//!     windows,
//!     vec![
//!         TimeRange::from_start_end(0, 8 * 60 + 30, false).unwrap(),
//!         TimeRange::from_start_end(9 * 60, END_OF_DAY, true).unwrap(),
//!     ]
//! );
//! ```
//!
//! ## Modules
//!
//! - [`time_range`] — Day-relative `[start, end)` minute ranges and clock helpers
//! - [`event`] — Busy events with attendee sets
//! - [`request`] — Meeting requests and their builder
//! - [`finder`] — Free window search and the optional-attendee fallback policy
//! - [`error`] — Error types

pub mod error;
pub mod event;
pub mod finder;
pub mod request;
pub mod time_range;

pub use error::FinderError;
pub use event::Event;
pub use finder::{find_free_windows, find_meeting_times, try_find_meeting_times, MAX_MEETING_DURATION};
pub use request::{MeetingRequest, MeetingRequestBuilder};
pub use time_range::{TimeRange, END_OF_DAY, MINUTES_PER_DAY, START_OF_DAY, WHOLE_DAY};
