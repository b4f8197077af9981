//! Weather lookup and history DTOs.

use serde::Deserialize;
use utoipa::IntoParams;

pub use crate::domain::weather_query::CityWeather;

/// Query string for `GET /weather`.
///
/// Built from the raw key/value pairs rather than deserialized directly, so
/// a missing `city` reaches the service and gets the JSON 400, and a
/// repeated `city` uses its first value instead of being rejected.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WeatherQueryParams {
    /// City to look up (e.g. `London`). Only the first occurrence counts.
    #[serde(default)]
    pub city: Option<String>,
}

impl WeatherQueryParams {
    /// Picks the first `city` out of decoded query pairs.
    #[must_use]
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let city = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "city").then_some(value));
        Self { city }
    }
}
