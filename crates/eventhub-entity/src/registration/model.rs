//! Registration entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One seat held by one user at one event.
///
/// The `(event_id, user_id)` pair is the composite primary key; its
/// existence is the sole source of truth for both the duplicate check and
/// the capacity check.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Registration {
    /// The event the seat belongs to.
    pub event_id: Uuid,
    /// The user holding the seat.
    pub user_id: Uuid,
    /// When the seat was taken.
    pub registered_at: DateTime<Utc>,
}

/// A registered attendee of an event, joined with user details.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Attendee {
    /// User identifier.
    pub id: Uuid,
    /// User name.
    pub name: String,
    /// User email.
    pub email: String,
    /// When the user registered.
    pub registered_at: DateTime<Utc>,
}

/// Point-in-time seat usage of an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventUsage {
    /// Number of persisted registrations.
    pub registered: i64,
    /// The event's declared capacity.
    pub capacity: i32,
}
