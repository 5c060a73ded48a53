//! Shared test helpers for integration tests.
//!
//! These tests need a running PostgreSQL instance. They read the
//! connection URL from `EVENTHUB_TEST_DATABASE_URL` and skip themselves
//! when it is not set, so the unit suite stays green without a database.

use axum::Router;
use axum::body::Body;
use chrono::{DateTime, Utc};
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use eventhub_api::state::AppState;
use eventhub_core::config::AppConfig;
use eventhub_core::config::app::ServerConfig;
use eventhub_core::config::database::DatabaseConfig;
use eventhub_core::config::logging::LoggingConfig;
use eventhub_core::config::registration::RegistrationConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
}

impl TestApp {
    /// Create a new test application, or `None` when no test database is
    /// configured.
    ///
    /// Tests never share entities: every helper below generates fresh
    /// UUIDs, so suites can run in parallel against one database.
    pub async fn new() -> Option<Self> {
        let Ok(url) = std::env::var("EVENTHUB_TEST_DATABASE_URL") else {
            eprintln!("EVENTHUB_TEST_DATABASE_URL not set; skipping integration test");
            return None;
        };

        let config = test_config(url);

        let db_pool = eventhub_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        eventhub_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let state = AppState::new(config, db_pool.clone());
        let router = eventhub_api::router::build_router(state);

        Some(Self { router, db_pool })
    }

    /// Create a test user directly in the database and return their ID
    pub async fn create_test_user(&self, name: &str) -> Uuid {
        let id = Uuid::new_v4();

        sqlx::query("INSERT INTO users (id, name, email) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(name)
            .bind(format!("{name}-{id}@test.com"))
            .execute(&self.db_pool)
            .await
            .expect("Failed to create test user");

        id
    }

    /// Create a test event directly in the database and return its ID
    pub async fn create_test_event(
        &self,
        title: &str,
        starts_at: DateTime<Utc>,
        location: &str,
        capacity: i32,
    ) -> Uuid {
        let id = Uuid::new_v4();

        sqlx::query(
            "INSERT INTO events (id, title, starts_at, location, capacity) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(id)
        .bind(title)
        .bind(starts_at)
        .bind(location)
        .bind(capacity)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test event");

        id
    }

    /// Insert a registration row directly, bypassing the engine
    pub async fn seed_registration(&self, event_id: Uuid, user_id: Uuid) {
        sqlx::query("INSERT INTO registrations (event_id, user_id) VALUES ($1, $2)")
            .bind(event_id)
            .bind(user_id)
            .execute(&self.db_pool)
            .await
            .expect("Failed to seed registration");
    }

    /// Count persisted registrations for an event
    pub async fn registration_count(&self, event_id: Uuid) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM registrations WHERE event_id = $1")
            .bind(event_id)
            .fetch_one(&self.db_pool)
            .await
            .expect("Failed to count registrations")
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

fn test_config(url: String) -> AppConfig {
    AppConfig {
        server: ServerConfig::default(),
        database: DatabaseConfig {
            url,
            max_connections: 10,
            min_connections: 1,
            connect_timeout_seconds: 10,
            idle_timeout_seconds: 60,
        },
        registration: RegistrationConfig::default(),
        logging: LoggingConfig::default(),
    }
}
