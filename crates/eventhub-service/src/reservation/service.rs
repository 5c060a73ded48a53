//! Reservation engine — the Register / Cancel / CurrentUsage contract.
//!
//! Business outcomes (not found, expired, full, duplicate, not registered)
//! are returned as typed errors and never logged here; only the HTTP
//! boundary reports infrastructure failures.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use eventhub_core::error::AppError;
use eventhub_core::result::AppResult;
use eventhub_database::repositories::registration::RegistrationRepository;
use eventhub_entity::registration::{EventUsage, Registration};

/// Admits users to events and releases their seats.
#[derive(Debug, Clone)]
pub struct ReservationService {
    /// Registration repository, which owns the transactional protocol.
    registration_repo: Arc<RegistrationRepository>,
}

impl ReservationService {
    /// Creates a new reservation service.
    pub fn new(registration_repo: Arc<RegistrationRepository>) -> Self {
        Self { registration_repo }
    }

    /// Registers a user for an event.
    ///
    /// A missing `user_id` is a caller error, rejected before the store is
    /// touched.
    pub async fn register(
        &self,
        event_id: Uuid,
        user_id: Option<Uuid>,
    ) -> AppResult<Registration> {
        let user_id = user_id.ok_or_else(|| AppError::validation("user_id is required"))?;

        let registration = self
            .registration_repo
            .register(event_id, user_id, Utc::now())
            .await?;

        debug!(%event_id, %user_id, "User registered");

        Ok(registration)
    }

    /// Cancels a user's registration for an event.
    pub async fn cancel(&self, event_id: Uuid, user_id: Uuid) -> AppResult<()> {
        self.registration_repo.cancel(event_id, user_id).await?;

        debug!(%event_id, %user_id, "Registration cancelled");

        Ok(())
    }

    /// Current seat usage for an event.
    pub async fn current_usage(&self, event_id: Uuid) -> AppResult<EventUsage> {
        self.registration_repo.usage(event_id).await
    }
}
