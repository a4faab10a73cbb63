use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Html,
    Json,
};
use serde::Serialize;
use venue::{
    application::{ReservationInput, VenueInput},
    domain::core::{Reservation, ReservationView, Summary, Venue},
};

use crate::{error::ApiError, AppState};

static INDEX_HTML: &str = include_str!("../assets/index.html");

#[derive(Debug, Serialize)]
pub struct Deleted {
    deleted: u64,
}

/// Content-Type が JSON でない本文は空のオブジェクトとして扱う
fn json_or_empty<T: Default>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match payload {
        Ok(Json(input)) => Ok(input),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(rejection.into()),
    }
}

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /venues
pub async fn list_venues(State(state): State<AppState>) -> Result<Json<Vec<Venue>>, ApiError> {
    Ok(Json(state.venues.list_venues().await?))
}

/// POST /venues
pub async fn create_venue(
    State(state): State<AppState>,
    payload: Result<Json<VenueInput>, JsonRejection>,
) -> Result<Json<Venue>, ApiError> {
    let input = json_or_empty(payload)?;
    Ok(Json(state.venues.create_venue(input).await?))
}

/// GET /reservations
pub async fn list_reservations(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReservationView>>, ApiError> {
    Ok(Json(state.reservations.list_reservations().await?))
}

/// POST /reservations
pub async fn create_reservation(
    State(state): State<AppState>,
    payload: Result<Json<ReservationInput>, JsonRejection>,
) -> Result<Json<Reservation>, ApiError> {
    let input = json_or_empty(payload)?;
    Ok(Json(state.reservations.create_reservation(input).await?))
}

/// DELETE /reservations/:id
pub async fn delete_reservation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Deleted>, ApiError> {
    let deleted = state.reservations.delete_reservation_by_key(&id).await?;
    Ok(Json(Deleted { deleted }))
}

/// GET /dashboard
pub async fn dashboard(State(state): State<AppState>) -> Result<Json<Summary>, ApiError> {
    Ok(Json(state.dashboard.get_summary().await?))
}
