//! OpenWeatherMap "current weather" client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::WeatherProvider;
use crate::config::{ApiKeySource, ProviderConfig};
use crate::error::ServiceError;

const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

/// Unit system requested from the provider. Temperatures come back in
/// degrees Fahrenheit.
const UNITS: &str = "imperial";

/// OpenWeatherMap client issuing one GET per lookup, with no retry.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    http: Client,
    endpoint: String,
    api_key: ApiKeySource,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: OwMain,
}

impl OpenWeatherProvider {
    /// Builds a client from provider settings.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Internal`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: &ProviderConfig) -> Result<Self, ServiceError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ServiceError::Internal(format!("http client: {e}")))?;

        Ok(Self {
            http,
            endpoint: format!(
                "{}{CURRENT_WEATHER_PATH}",
                config.base_url.trim_end_matches('/')
            ),
            api_key: config.api_key.clone(),
        })
    }

    /// Full URL of the current-weather endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_temperature(&self, city: &str) -> Result<f64, ServiceError> {
        let api_key = self.api_key.resolve()?;

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[("q", city), ("appid", api_key.as_str()), ("units", UNITS)])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(city, error = %e, "provider request failed");
                ServiceError::CityNotFound(city.to_string())
            })?;

        let status = res.status();
        if !status.is_success() {
            tracing::warn!(city, %status, "provider returned non-success status");
            return Err(ServiceError::CityNotFound(city.to_string()));
        }

        let body = res.text().await.map_err(|e| {
            tracing::warn!(city, error = %e, "failed to read provider body");
            ServiceError::CityNotFound(city.to_string())
        })?;

        parse_temperature(&body)
    }
}

/// Extracts `main.temp` from a current-weather payload.
fn parse_temperature(body: &str) -> Result<f64, ServiceError> {
    let parsed: OwCurrentResponse = serde_json::from_str(body)
        .map_err(|e| ServiceError::MalformedProviderResponse(e.to_string()))?;
    Ok(parsed.main.temp)
}
