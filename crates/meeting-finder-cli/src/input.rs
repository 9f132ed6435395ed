//! JSON input for the CLI: a day of events and, optionally, a meeting request.
//!
//! ```json
//! {
//!   "events": [
//!     { "title": "Standup", "start": "08:30", "duration": 30, "attendees": ["ana"] },
//!     { "title": "Offsite", "start": "13:00", "end": "24:00", "attendees": ["bo"] }
//!   ],
//!   "request": { "duration": 30, "attendees": ["ana"], "optional_attendees": ["bo"] }
//! }
//! ```

use anyhow::{bail, Context, Result};
use meeting_finder::time_range::parse_clock;
use meeting_finder::{Event, MeetingRequest, TimeRange};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DayInput {
    #[serde(default)]
    pub events: Vec<EventInput>,
    pub request: Option<MeetingRequest>,
}

/// An event with clock-time bounds. Exactly one of `end` and `duration` must
/// be given.
#[derive(Debug, Deserialize)]
pub struct EventInput {
    #[serde(default)]
    pub title: String,
    pub start: String,
    pub end: Option<String>,
    pub duration: Option<u32>,
    #[serde(default)]
    pub attendees: Vec<String>,
}

impl EventInput {
    pub fn into_event(self) -> Result<Event> {
        let start = parse_clock(&self.start)
            .with_context(|| format!("Invalid start time for event '{}'", self.title))?;
        let when = match (self.end.as_deref(), self.duration) {
            (Some(end), None) => {
                let end = parse_clock(end)
                    .with_context(|| format!("Invalid end time for event '{}'", self.title))?;
                TimeRange::from_start_end(start, end, false)
            }
            (None, Some(duration)) => TimeRange::from_start_duration(start, duration),
            (Some(_), Some(_)) => {
                bail!("Event '{}' has both 'end' and 'duration'", self.title)
            }
            (None, None) => bail!("Event '{}' needs either 'end' or 'duration'", self.title),
        }
        .with_context(|| format!("Invalid time range for event '{}'", self.title))?;

        Ok(Event::new(self.title, when, self.attendees))
    }
}

impl DayInput {
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse input JSON")
    }

    /// Convert every event, failing on the first invalid one.
    pub fn events(&mut self) -> Result<Vec<Event>> {
        std::mem::take(&mut self.events)
            .into_iter()
            .map(EventInput::into_event)
            .collect()
    }
}
