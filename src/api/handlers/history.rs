//! Lookup history handler.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::CityWeather;
use crate::app_state::AppState;
use crate::error::{ErrorResponse, ServiceError};

/// `GET /history` — Every recorded lookup.
///
/// # Errors
///
/// Returns [`ServiceError::Persistence`] if the store cannot be read.
#[utoipa::path(
    get,
    path = "/history",
    tag = "Weather",
    summary = "List recorded lookups",
    description = "Returns every successful lookup in insertion order, cities title-cased. No pagination.",
    responses(
        (status = 200, description = "All recorded lookups", body = Vec<CityWeather>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn get_history(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let entries: Vec<CityWeather> = state.history_service.list_all().await?;
    Ok(Json(entries))
}

/// History routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/history", get(get_history))
}
