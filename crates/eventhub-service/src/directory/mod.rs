//! User directory services.

pub mod service;

pub use service::{CreateUserRequest, DirectoryService};
