//! Service layer: business logic orchestration.
//!
//! [`WeatherService`] performs lookups against the provider and records
//! them; [`HistoryService`] reads them back.

pub mod history_service;
pub mod weather_service;

pub use history_service::HistoryService;
pub use weather_service::WeatherService;
