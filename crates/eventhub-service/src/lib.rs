//! # eventhub-service
//!
//! Business logic services for EventHub. Each service orchestrates one
//! domain area over the repositories: the event catalog, the user
//! directory, the reservation engine's operation contract, and usage
//! reporting.

pub mod catalog;
pub mod directory;
pub mod report;
pub mod reservation;
