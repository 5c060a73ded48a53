//! # eventhub-core
//!
//! Core crate for EventHub. Contains configuration schemas and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other EventHub crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
