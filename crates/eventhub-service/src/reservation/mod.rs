//! Reservation engine services.

pub mod service;

pub use service::ReservationService;
