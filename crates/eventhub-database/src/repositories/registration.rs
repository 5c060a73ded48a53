//! Registration repository — owns the transactional registration protocol.
//!
//! Correctness does not rely on any in-process lock: all coordination goes
//! through PostgreSQL row locks, so the capacity invariant holds across
//! multiple server instances sharing one database.

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use eventhub_core::error::{AppError, ErrorKind};
use eventhub_core::result::AppResult;
use eventhub_entity::event::Event;
use eventhub_entity::registration::{Attendee, EventUsage, Registration};

/// Repository for seat registrations.
#[derive(Debug, Clone)]
pub struct RegistrationRepository {
    pool: PgPool,
}

impl RegistrationRepository {
    /// Create a new registration repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register `user_id` for `event_id`, admitting the user only if every
    /// check passes against a snapshot isolated by an exclusive lock on the
    /// event row.
    ///
    /// The checks run in a fixed order (event exists, event not started,
    /// capacity available, user exists, not already registered) and the
    /// first failing check determines the returned error. Dropping the
    /// transaction on any early return rolls it back, so no partial effect
    /// survives a failed attempt.
    pub async fn register(
        &self,
        event_id: Uuid,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<Registration> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        // Exclusive lock on the event row. Concurrent registrations for the
        // same event serialize here; different events do not block each other.
        let event = sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1 FOR UPDATE")
            .bind(event_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to lock event", e))?
            .ok_or_else(|| AppError::not_found(format!("Event {event_id} not found")))?;

        if event.has_started(now) {
            return Err(AppError::invalid_state(format!(
                "Event {event_id} has already started"
            )));
        }

        // The count sees every committed registration and, because of the
        // lock above, no other in-flight attempt for this event.
        let registered: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM registrations WHERE event_id = $1")
                .bind(event_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count registrations", e)
                })?;

        if registered >= i64::from(event.capacity) {
            return Err(AppError::capacity_exceeded(format!(
                "Event {event_id} is full ({} seats)",
                event.capacity
            )));
        }

        let user_exists = sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user", e))?;

        if user_exists.is_none() {
            return Err(AppError::not_found(format!("User {user_id} not found")));
        }

        if self.exists(&mut tx, event_id, user_id).await? {
            return Err(AppError::conflict(format!(
                "User {user_id} is already registered for event {event_id}"
            )));
        }

        let registration = sqlx::query_as::<_, Registration>(
            "INSERT INTO registrations (event_id, user_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(event_id)
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to insert registration", e)
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit registration", e)
        })?;

        Ok(registration)
    }

    /// Cancel the registration of `user_id` for `event_id`.
    ///
    /// The single DELETE makes the existence check and the removal atomic:
    /// of two racing cancels for the same seat, exactly one observes an
    /// affected row and the other fails.
    pub async fn cancel(&self, event_id: Uuid, user_id: Uuid) -> AppResult<()> {
        let result =
            sqlx::query("DELETE FROM registrations WHERE event_id = $1 AND user_id = $2")
                .bind(event_id)
                .bind(user_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to cancel registration", e)
                })?;

        if result.rows_affected() == 0 {
            return Err(AppError::conflict(format!(
                "User {user_id} is not registered for event {event_id}"
            )));
        }
        Ok(())
    }

    /// Point-in-time seat usage for an event. Takes no lock; the result may
    /// lag in-flight registrations, which is acceptable for reporting.
    pub async fn usage(&self, event_id: Uuid) -> AppResult<EventUsage> {
        let capacity =
            sqlx::query_scalar::<_, i32>("SELECT capacity FROM events WHERE id = $1")
                .bind(event_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to find event", e)
                })?
                .ok_or_else(|| AppError::not_found(format!("Event {event_id} not found")))?;

        let registered = self.count_for_event(event_id).await?;

        Ok(EventUsage {
            registered,
            capacity,
        })
    }

    /// Count persisted registrations for an event.
    pub async fn count_for_event(&self, event_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM registrations WHERE event_id = $1")
            .bind(event_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count registrations", e)
            })
    }

    /// List an event's attendees joined with their user details, in
    /// registration order.
    pub async fn attendees(&self, event_id: Uuid) -> AppResult<Vec<Attendee>> {
        sqlx::query_as::<_, Attendee>(
            "SELECT u.id, u.name, u.email, r.registered_at \
             FROM registrations r \
             JOIN users u ON r.user_id = u.id \
             WHERE r.event_id = $1 \
             ORDER BY r.registered_at ASC",
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list attendees", e))
    }

    /// Whether a registration row exists for the pair, read inside the
    /// caller's transaction.
    async fn exists(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        event_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<bool> {
        let found = sqlx::query_scalar::<_, i32>(
            "SELECT 1 FROM registrations WHERE event_id = $1 AND user_id = $2",
        )
        .bind(event_id)
        .bind(user_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check registration", e)
        })?;

        Ok(found.is_some())
    }
}
