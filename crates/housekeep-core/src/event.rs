//! The normalized calendar event handed to the host platform.

use serde::{Deserialize, Serialize};

use crate::time::EventTime;

/// A calendar event in the shape the host platform renders.
///
/// Events are built fresh on every query and never cached or mutated
/// afterwards. `end` is always strictly after `start`; upstream records
/// that carry only a due point get a synthesized window ending there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedEvent {
    /// Unique identifier, the stringified upstream record id.
    pub uid: String,
    /// The event title.
    pub title: String,
    /// When the event starts.
    pub start: EventTime,
    /// When the event ends (exclusive).
    pub end: EventTime,
    /// Free-form detail text, when the upstream record has any.
    pub description: Option<String>,
}

impl NormalizedEvent {
    /// Creates an event with the required fields.
    ///
    /// # Panics
    ///
    /// Panics if `end` is not strictly after `start`.
    pub fn new(
        uid: impl Into<String>,
        title: impl Into<String>,
        start: EventTime,
        end: EventTime,
    ) -> Self {
        assert!(start < end, "event end must be after start");
        Self {
            uid: uid.into(),
            title: title.into(),
            start,
            end,
            description: None,
        }
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns `true` if the event occupies whole days.
    pub fn is_all_day(&self) -> bool {
        self.start.is_all_day()
    }

    /// The event length in minutes, with all-day bounds taken at midnight UTC.
    pub fn duration_minutes(&self) -> i64 {
        (self.end.to_utc_datetime() - self.start.to_utc_datetime()).num_minutes()
    }
}
