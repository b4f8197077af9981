//! Shared application state injected into all Axum handlers.

use crate::service::{HistoryService, WeatherService};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Lookup service: provider call plus persistence.
    pub weather_service: WeatherService,
    /// Read side over recorded lookups.
    pub history_service: HistoryService,
}
