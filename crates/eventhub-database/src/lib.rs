//! # eventhub-database
//!
//! PostgreSQL access layer for EventHub: connection pool management, the
//! migration runner, and the repositories. `RegistrationRepository` owns
//! the transactional registration protocol that upholds the capacity
//! invariant.

pub mod connection;
pub mod migration;
pub mod repositories;
