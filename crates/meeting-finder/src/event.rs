//! Busy events: a titled time range with the people attending it.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::time_range::TimeRange;

/// A fixed, already-scheduled busy interval.
///
/// The title is carried for display only; the finder looks at `when` and
/// `attendees`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    title: String,
    when: TimeRange,
    attendees: BTreeSet<String>,
}

impl Event {
    /// Create an event. Duplicate attendee names collapse into one.
    pub fn new<I, S>(title: impl Into<String>, when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn when(&self) -> TimeRange {
        self.when
    }

    pub fn attendees(&self) -> &BTreeSet<String> {
        &self.attendees
    }

    /// Whether at least one of `people` attends this event.
    pub fn is_attended_by_any(&self, people: &BTreeSet<String>) -> bool {
        // Walk the smaller set, probe the larger.
        if self.attendees.len() <= people.len() {
            self.attendees.iter().any(|a| people.contains(a))
        } else {
            people.iter().any(|p| self.attendees.contains(p))
        }
    }
}

/// Order events by end time, latest first.
pub fn by_end_descending(a: &Event, b: &Event) -> Ordering {
    b.when.end().cmp(&a.when.end())
}
