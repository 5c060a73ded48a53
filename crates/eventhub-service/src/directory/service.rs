//! User directory — creation and lookup.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use eventhub_core::error::AppError;
use eventhub_core::result::AppResult;
use eventhub_database::repositories::user::UserRepository;
use eventhub_entity::user::{CreateUser, User};

/// Handles user creation and read operations.
#[derive(Debug, Clone)]
pub struct DirectoryService {
    /// User repository.
    user_repo: Arc<UserRepository>,
}

/// Data for creating a user. Both fields are required.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateUserRequest {
    /// Human-readable name.
    pub name: Option<String>,
    /// Email address.
    pub email: Option<String>,
}

impl DirectoryService {
    /// Creates a new directory service.
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Creates a new user after validating the request.
    pub async fn create_user(&self, req: CreateUserRequest) -> AppResult<User> {
        let data = validate_new_user(req)?;

        // Pre-check for a friendlier conflict message; the unique index on
        // email still catches a racing duplicate at insert time.
        if self.user_repo.find_by_email(&data.email).await?.is_some() {
            return Err(AppError::conflict(format!(
                "Email '{}' already exists",
                data.email
            )));
        }

        let user = self.user_repo.create(&data).await?;

        info!(user_id = %user.id, "User created");

        Ok(user)
    }

    /// Fetches a user by ID.
    pub async fn get_user(&self, user_id: Uuid) -> AppResult<User> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))
    }
}

/// Validates a creation request, returning the complete record to insert.
fn validate_new_user(req: CreateUserRequest) -> AppResult<CreateUser> {
    let name = req
        .name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| AppError::validation("name is required"))?;
    let email = req
        .email
        .filter(|e| !e.trim().is_empty())
        .ok_or_else(|| AppError::validation("email is required"))?;

    if !email.contains('@') || !email.contains('.') {
        return Err(AppError::validation("Invalid email format"));
    }

    Ok(CreateUser { name, email })
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventhub_core::error::ErrorKind;

    #[test]
    fn accepts_complete_request() {
        let data = validate_new_user(CreateUserRequest {
            name: Some("Alice".to_string()),
            email: Some("alice@example.com".to_string()),
        })
        .unwrap();
        assert_eq!(data.name, "Alice");
        assert_eq!(data.email, "alice@example.com");
    }

    #[test]
    fn rejects_missing_name_or_email() {
        for req in [
            CreateUserRequest {
                name: None,
                email: Some("alice@example.com".to_string()),
            },
            CreateUserRequest {
                name: Some("Alice".to_string()),
                email: None,
            },
        ] {
            let err = validate_new_user(req).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation);
        }
    }

    #[test]
    fn rejects_malformed_email() {
        let err = validate_new_user(CreateUserRequest {
            name: Some("Alice".to_string()),
            email: Some("not-an-email".to_string()),
        })
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
