//! Usage reporting services.

pub mod stats;

pub use stats::{EventStats, StatsService};
