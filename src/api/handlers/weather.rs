//! Weather lookup handler.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{CityWeather, WeatherQueryParams};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, ServiceError};

/// `GET /weather?city=<name>` — Current temperature for a city.
///
/// # Errors
///
/// Returns [`ServiceError`] when `city` is missing, the provider cannot
/// resolve it, or a server-side fault occurs.
#[utoipa::path(
    get,
    path = "/weather",
    tag = "Weather",
    summary = "Look up current temperature",
    description = "Queries the weather provider in imperial units, records the lookup, and returns the title-cased city with its temperature in °F.",
    params(WeatherQueryParams),
    responses(
        (status = 200, description = "Lookup succeeded and was recorded", body = CityWeather),
        (status = 400, description = "`city` parameter missing", body = ErrorResponse),
        (status = 404, description = "Provider could not resolve the city", body = ErrorResponse),
        (status = 500, description = "Malformed provider payload or storage failure", body = ErrorResponse),
    )
)]
pub async fn get_weather(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, ServiceError> {
    let params = WeatherQueryParams::from_pairs(pairs);
    let weather = state
        .weather_service
        .lookup(params.city.as_deref())
        .await?;
    Ok(Json(weather))
}

/// Weather routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/weather", get(get_weather))
}
