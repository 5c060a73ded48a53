//! Event utilization statistics.

use std::sync::Arc;

use uuid::Uuid;

use eventhub_core::error::AppError;
use eventhub_core::result::AppResult;
use eventhub_database::repositories::event::EventRepository;
use eventhub_database::repositories::registration::RegistrationRepository;

/// Derives per-event utilization figures.
#[derive(Debug, Clone)]
pub struct StatsService {
    /// Event repository.
    event_repo: Arc<EventRepository>,
    /// Registration repository.
    registration_repo: Arc<RegistrationRepository>,
}

/// Utilization report for a single event.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EventStats {
    /// Event identifier.
    pub event_id: Uuid,
    /// Event title.
    pub title: String,
    /// Number of persisted registrations.
    pub total_registrations: i64,
    /// Seats still available.
    pub remaining_capacity: i64,
    /// Share of capacity in use, formatted as `"NN.NN%"`.
    pub percentage_used: String,
}

impl StatsService {
    /// Creates a new stats service.
    pub fn new(
        event_repo: Arc<EventRepository>,
        registration_repo: Arc<RegistrationRepository>,
    ) -> Self {
        Self {
            event_repo,
            registration_repo,
        }
    }

    /// Computes utilization for an event from a point-in-time read.
    pub async fn event_stats(&self, event_id: Uuid) -> AppResult<EventStats> {
        let event = self
            .event_repo
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Event {event_id} not found")))?;

        let total_registrations = self.registration_repo.count_for_event(event_id).await?;

        let remaining_capacity = event.remaining_capacity(total_registrations);
        let percentage_used = percentage_used(total_registrations, event.capacity);

        Ok(EventStats {
            event_id: event.id,
            title: event.title,
            total_registrations,
            remaining_capacity,
            percentage_used,
        })
    }
}

/// Formats the used share of capacity with two decimal places.
fn percentage_used(registered: i64, capacity: i32) -> String {
    let ratio = registered as f64 / f64::from(capacity);
    format!("{:.2}%", ratio * 100.0)
}
