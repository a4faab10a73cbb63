mod error;
mod handler;

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use venue::{
    application::{DashboardService, ReservationService, VenueService},
    infrastructure::{SqliteReservationRepository, SqliteStorage, SqliteVenueRepository},
};

pub use self::error::ApiError;

/// ハンドラが共有するサービス
#[derive(Clone, Debug)]
pub struct AppState {
    pub venues: VenueService<SqliteVenueRepository>,
    pub reservations: ReservationService<SqliteReservationRepository>,
    pub dashboard: DashboardService<SqliteVenueRepository, SqliteReservationRepository>,
}

impl AppState {
    pub fn new(storage: &SqliteStorage) -> Self {
        let venues = VenueService::new(storage.venues());
        let reservations = ReservationService::new(storage.reservations());
        Self {
            dashboard: DashboardService::new(venues.clone(), reservations.clone()),
            venues,
            reservations,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handler::index))
        .route(
            "/venues",
            get(handler::list_venues).post(handler::create_venue),
        )
        .route(
            "/reservations",
            get(handler::list_reservations).post(handler::create_reservation),
        )
        .route("/reservations/:id", delete(handler::delete_reservation))
        .route("/dashboard", get(handler::dashboard))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
