//! REST endpoint handlers organized by resource.

pub mod history;
pub mod system;
pub mod weather;

use axum::Router;

use crate::app_state::AppState;

/// Composes the weather and history routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(weather::routes())
        .merge(history::routes())
}
