//! Event catalog services.

pub mod service;

pub use service::{CatalogService, CreateEventRequest, EventDetails};
