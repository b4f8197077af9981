//! External weather provider seam.
//!
//! The service only needs one number from the provider: the current
//! temperature of a city. [`WeatherProvider`] captures that contract so the
//! query service can be driven by the real OpenWeatherMap client or by a
//! stub in tests.

use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::ServiceError;

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// Source of current temperatures, in degrees Fahrenheit.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetches the current temperature for `city`.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::CityNotFound`] when the provider does not answer
    ///   with success, for whatever reason.
    /// - [`ServiceError::MalformedProviderResponse`] when it answers with
    ///   success but without a usable temperature.
    /// - [`ServiceError::Configuration`] when no credential is available.
    async fn current_temperature(&self, city: &str) -> Result<f64, ServiceError>;
}
