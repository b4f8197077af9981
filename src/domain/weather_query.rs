//! Weather query records and their presentation shape.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::city_name::title_case;

/// One persisted, successful weather lookup.
///
/// Created exactly once, when a lookup succeeds. Never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct WeatherQueryRecord {
    /// Surrogate identity assigned by the store.
    pub id: i64,
    /// City name exactly as the caller supplied it.
    pub city: String,
    /// Temperature in degrees Fahrenheit.
    pub temperature: f64,
}

/// Insert payload for a record that has no identity yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWeatherQuery {
    /// City name exactly as the caller supplied it.
    pub city: String,
    /// Temperature in degrees Fahrenheit.
    pub temperature: f64,
}

/// City and temperature as returned to callers, city title-cased.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CityWeather {
    /// Title-cased city name.
    #[schema(example = "London")]
    pub city: String,
    /// Temperature in degrees Fahrenheit.
    #[schema(example = 50.0)]
    pub temperature: f64,
}

impl CityWeather {
    /// Builds the presentation shape from a raw city name.
    #[must_use]
    pub fn new(city: &str, temperature: f64) -> Self {
        Self {
            city: title_case(city),
            temperature,
        }
    }
}

impl From<&WeatherQueryRecord> for CityWeather {
    fn from(record: &WeatherQueryRecord) -> Self {
        Self::new(&record.city, record.temperature)
    }
}

impl From<WeatherQueryRecord> for CityWeather {
    fn from(record: WeatherQueryRecord) -> Self {
        Self::from(&record)
    }
}
