//! Event catalog — creation, lookup, and the upcoming-events listing.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use eventhub_core::config::registration::RegistrationConfig;
use eventhub_core::error::AppError;
use eventhub_core::result::AppResult;
use eventhub_database::repositories::event::EventRepository;
use eventhub_database::repositories::registration::RegistrationRepository;
use eventhub_entity::event::{CreateEvent, Event};
use eventhub_entity::registration::Attendee;

/// Handles event creation and read operations.
#[derive(Debug, Clone)]
pub struct CatalogService {
    /// Event repository.
    event_repo: Arc<EventRepository>,
    /// Registration repository (for the attendee listing).
    registration_repo: Arc<RegistrationRepository>,
    /// Capacity policy bounds.
    policy: RegistrationConfig,
}

/// Data for creating an event. All fields are required; absence is a
/// validation error rather than a deserialization failure.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
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

/// An event together with its registered attendees.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EventDetails {
    /// The event record.
    #[serde(flatten)]
    pub event: Event,
    /// Users registered for the event.
    pub registrations: Vec<Attendee>,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(
        event_repo: Arc<EventRepository>,
        registration_repo: Arc<RegistrationRepository>,
        policy: RegistrationConfig,
    ) -> Self {
        Self {
            event_repo,
            registration_repo,
            policy,
        }
    }

    /// Creates a new event after validating the request against the
    /// capacity policy.
    pub async fn create_event(&self, req: CreateEventRequest) -> AppResult<Event> {
        let data = validate_new_event(req, &self.policy)?;
        let event = self.event_repo.create(&data).await?;

        info!(event_id = %event.id, title = %event.title, "Event created");

        Ok(event)
    }

    /// Fetches an event with its attendee list.
    pub async fn get_event(&self, event_id: Uuid) -> AppResult<EventDetails> {
        let event = self
            .event_repo
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Event {event_id} not found")))?;

        let registrations = self.registration_repo.attendees(event_id).await?;

        Ok(EventDetails {
            event,
            registrations,
        })
    }

    /// Lists events that have not started yet, soonest first, tied starts
    /// ordered by location.
    pub async fn list_upcoming(&self) -> AppResult<Vec<Event>> {
        self.event_repo.find_upcoming(Utc::now()).await
    }
}

/// Validates a creation request, returning the complete record to insert.
fn validate_new_event(
    req: CreateEventRequest,
    policy: &RegistrationConfig,
) -> AppResult<CreateEvent> {
    let title = req
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::validation("title is required"))?;
    let starts_at = req
        .starts_at
        .ok_or_else(|| AppError::validation("starts_at is required"))?;
    let location = req
        .location
        .filter(|l| !l.trim().is_empty())
        .ok_or_else(|| AppError::validation("location is required"))?;
    let capacity = req
        .capacity
        .ok_or_else(|| AppError::validation("capacity is required"))?;

    if !policy.allows_capacity(capacity) {
        return Err(AppError::validation(format!(
            "capacity must be between {} and {}",
            policy.min_capacity, policy.max_capacity
        )));
    }

    Ok(CreateEvent {
        title,
        starts_at,
        location,
        capacity,
    })
}
