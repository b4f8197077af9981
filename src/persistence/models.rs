//! Database models for the `weather_queries` table.
//!
//! The row types live in the domain layer; they are re-exported here so
//! the persistence code reads the same as the rest of the crate.

pub use crate::domain::weather_query::{NewWeatherQuery, WeatherQueryRecord};
