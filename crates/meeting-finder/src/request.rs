//! Meeting requests.
//!
//! A [`MeetingRequest`] is sealed once built. Optional attendees that arrive
//! incrementally are collected on a [`MeetingRequestBuilder`] first.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{FinderError, Result};
use crate::finder::MAX_MEETING_DURATION;

/// What the caller wants to schedule: a duration and who must (or may) attend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    /// Requested length in minutes. May be negative or longer than a day, in
    /// which case no meeting time exists.
    duration: i64,
    /// Mandatory attendees.
    #[serde(default)]
    attendees: BTreeSet<String>,
    #[serde(default)]
    optional_attendees: BTreeSet<String>,
}

impl MeetingRequest {
    /// A request with mandatory attendees only.
    pub fn new<I, S>(attendees: I, duration: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::builder(duration).attendees(attendees).build()
    }

    pub fn builder(duration: i64) -> MeetingRequestBuilder {
        MeetingRequestBuilder {
            duration,
            attendees: BTreeSet::new(),
            optional_attendees: BTreeSet::new(),
        }
    }

    pub fn duration(&self) -> i64 {
        self.duration
    }

    pub fn attendees(&self) -> &BTreeSet<String> {
        &self.attendees
    }

    pub fn optional_attendees(&self) -> &BTreeSet<String> {
        &self.optional_attendees
    }

    /// Mandatory and optional attendees together.
    pub fn all_attendees(&self) -> BTreeSet<String> {
        self.attendees
            .union(&self.optional_attendees)
            .cloned()
            .collect()
    }

    /// Check that the duration fits within a single day.
    ///
    /// # Errors
    /// Returns `FinderError::InvalidDuration` for a negative duration or one
    /// longer than [`MAX_MEETING_DURATION`].
    pub fn validate_duration(&self) -> Result<()> {
        if self.duration < 0 || self.duration > i64::from(MAX_MEETING_DURATION) {
            return Err(FinderError::InvalidDuration(self.duration));
        }
        Ok(())
    }
}

/// Incrementally assembles a [`MeetingRequest`].
#[derive(Debug, Clone)]
pub struct MeetingRequestBuilder {
    duration: i64,
    attendees: BTreeSet<String>,
    optional_attendees: BTreeSet<String>,
}

impl MeetingRequestBuilder {
    pub fn attendee(mut self, name: impl Into<String>) -> Self {
        self.attendees.insert(name.into());
        self
    }

    pub fn attendees<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attendees.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn optional_attendee(mut self, name: impl Into<String>) -> Self {
        self.add_optional_attendee(name);
        self
    }

    /// Add an optional attendee in place, for callers collecting them in a loop.
    pub fn add_optional_attendee(&mut self, name: impl Into<String>) {
        self.optional_attendees.insert(name.into());
    }

    pub fn build(self) -> MeetingRequest {
        MeetingRequest {
            duration: self.duration,
            attendees: self.attendees,
            optional_attendees: self.optional_attendees,
        }
    }
}
