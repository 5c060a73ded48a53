//! Event catalog, registration, and stats handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use eventhub_entity::event::Event;
use eventhub_entity::registration::EventUsage;
use eventhub_service::catalog::{CreateEventRequest as SvcCreateEvent, EventDetails};
use eventhub_service::report::EventStats;

use crate::dto::request::{CreateEventRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/events
pub async fn create_event(
    State(state): State<AppState>,
    Json(req): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Event>>), ApiError> {
    let event = state
        .catalog_service
        .create_event(SvcCreateEvent {
            title: req.title,
            starts_at: req.starts_at,
            location: req.location,
            capacity: req.capacity,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(event))))
}

/// GET /api/events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<EventDetails>>, ApiError> {
    let details = state.catalog_service.get_event(id).await?;
    Ok(Json(ApiResponse::ok(details)))
}

/// GET /api/events/upcoming
pub async fn list_upcoming(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Event>>>, ApiError> {
    let events = state.catalog_service.list_upcoming().await?;
    Ok(Json(ApiResponse::ok(events)))
}

/// GET /api/events/{id}/stats
pub async fn event_stats(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<EventStats>>, ApiError> {
    let stats = state.stats_service.event_stats(id).await?;
    Ok(Json(ApiResponse::ok(stats)))
}

/// GET /api/events/{id}/usage
pub async fn event_usage(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<EventUsage>>, ApiError> {
    let usage = state.reservation_service.current_usage(id).await?;
    Ok(Json(ApiResponse::ok(usage)))
}

/// POST /api/events/{id}/register
pub async fn register(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.reservation_service.register(id, req.user_id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "User registered successfully".to_string(),
    })))
}

/// DELETE /api/events/{id}/register/{user_id}
pub async fn cancel(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.reservation_service.cancel(id, user_id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Registration cancelled".to_string(),
    })))
}
