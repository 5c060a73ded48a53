//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use eventhub_core::config::AppConfig;
use eventhub_database::repositories::event::EventRepository;
use eventhub_database::repositories::registration::RegistrationRepository;
use eventhub_database::repositories::user::UserRepository;
use eventhub_service::catalog::CatalogService;
use eventhub_service::directory::DirectoryService;
use eventhub_service::report::StatsService;
use eventhub_service::reservation::ReservationService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    /// Event repository
    pub event_repo: Arc<EventRepository>,
    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Registration repository
    pub registration_repo: Arc<RegistrationRepository>,

    /// Event catalog service
    pub catalog_service: Arc<CatalogService>,
    /// User directory service
    pub directory_service: Arc<DirectoryService>,
    /// Reservation engine service
    pub reservation_service: Arc<ReservationService>,
    /// Utilization stats service
    pub stats_service: Arc<StatsService>,
}

impl AppState {
    /// Wires repositories and services over a connected pool.
    pub fn new(config: AppConfig, db_pool: PgPool) -> Self {
        let event_repo = Arc::new(EventRepository::new(db_pool.clone()));
        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let registration_repo = Arc::new(RegistrationRepository::new(db_pool.clone()));

        let catalog_service = Arc::new(CatalogService::new(
            Arc::clone(&event_repo),
            Arc::clone(&registration_repo),
            config.registration.clone(),
        ));
        let directory_service = Arc::new(DirectoryService::new(Arc::clone(&user_repo)));
        let reservation_service =
            Arc::new(ReservationService::new(Arc::clone(&registration_repo)));
        let stats_service = Arc::new(StatsService::new(
            Arc::clone(&event_repo),
            Arc::clone(&registration_repo),
        ));

        Self {
            config: Arc::new(config),
            db_pool,
            event_repo,
            user_repo,
            registration_repo,
            catalog_service,
            directory_service,
            reservation_service,
            stats_service,
        }
    }
}
