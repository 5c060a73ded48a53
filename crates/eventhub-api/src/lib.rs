//! # eventhub-api
//!
//! HTTP API layer for EventHub built on Axum: the router, shared
//! application state, request/response DTOs, handlers, and the mapping
//! from domain errors to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
