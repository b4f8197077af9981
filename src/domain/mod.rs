//! Domain layer: weather query records and presentation rules.
//!
//! Records keep the city exactly as the caller typed it; the
//! [`city_name::title_case`] rule is applied only when records leave the
//! service.

pub mod city_name;
pub mod weather_query;

pub use city_name::title_case;
pub use weather_query::{CityWeather, NewWeatherQuery, WeatherQueryRecord};
