//! REST API layer: route handlers, DTOs, OpenAPI document and router
//! composition.

pub mod dto;
pub mod handlers;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document for the JSON endpoints.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "weather-ledger",
        description = "Current-weather proxy that records every successful lookup."
    ),
    paths(
        handlers::weather::get_weather,
        handlers::history::get_history,
        handlers::system::health_handler,
    ),
    components(schemas(
        crate::domain::weather_query::CityWeather,
        crate::error::ErrorResponse,
        handlers::system::HealthResponse,
    )),
    tags(
        (name = "Weather", description = "Lookups and history"),
        (name = "System", description = "Service status"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .merge(handlers::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    router
}

/// Builds the application: routes, tracing and CORS layers, and state.
pub fn build_app(state: AppState) -> Router {
    build_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
