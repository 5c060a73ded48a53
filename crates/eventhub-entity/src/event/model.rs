//! Event entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A scheduled event with a fixed seat capacity.
///
/// Events are immutable after creation: the reservation engine only ever
/// reads them (under a row lock during registration).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    /// Unique event identifier.
    pub id: Uuid,
    /// Event title.
    pub title: String,
    /// When the event takes place.
    pub starts_at: DateTime<Utc>,
    /// Where the event takes place.
    pub location: String,
    /// Maximum number of seats.
    pub capacity: i32,
    /// When the event was created.
    pub created_at: DateTime<Utc>,
    /// When the event was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Whether the event's scheduled time is before `now`.
    pub fn has_started(&self, now: DateTime<Utc>) -> bool {
        self.starts_at < now
    }

    /// Seats left given the current registration count.
    ///
    /// Never negative even if the count somehow exceeds capacity.
    pub fn remaining_capacity(&self, registered: i64) -> i64 {
        (i64::from(self.capacity) - registered).max(0)
    }
}

/// Data required to create a new event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEvent {
    /// Event title.
    pub title: String,
    /// When the event takes place.
    pub starts_at: DateTime<Utc>,
    /// Where the event takes place.
    pub location: String,
    /// Maximum number of seats.
    pub capacity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn event_at(starts_at: DateTime<Utc>) -> Event {
        Event {
            id: Uuid::new_v4(),
            title: "Rust Meetup".to_string(),
            starts_at,
            location: "Room 101".to_string(),
            capacity: 10,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn has_started_compares_against_now() {
        let now = Utc::now();
        assert!(event_at(now - Duration::hours(1)).has_started(now));
        assert!(!event_at(now + Duration::hours(1)).has_started(now));
    }

    #[test]
    fn remaining_capacity_never_negative() {
        let event = event_at(Utc::now());
        assert_eq!(event.remaining_capacity(3), 7);
        assert_eq!(event.remaining_capacity(10), 0);
        assert_eq!(event.remaining_capacity(12), 0);
    }
}
