//! Request DTOs.
//!
//! Required fields are modeled as `Option` so that absence surfaces as a
//! domain validation error (400 with a message) rather than a
//! deserialization rejection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /api/events`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    /// Event title.
    pub title: Option<String>,
    /// When the event takes place.
    pub starts_at: Option<DateTime<Utc>>,
    /// Where the event takes place.
    pub location: Option<String>,
    /// Maximum number of seats.
    pub capacity: Option<i32>,
}

/// Body of `POST /api/users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// Human-readable name.
    pub name: Option<String>,
    /// Email address.
    pub email: Option<String>,
}

/// Body of `POST /api/events/{id}/register`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegisterRequest {
    /// The user requesting a seat.
    pub user_id: Option<Uuid>,
}
