//! Registration domain entities.

pub mod model;

pub use model::{Attendee, EventUsage, Registration};
