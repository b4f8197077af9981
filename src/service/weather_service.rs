//! Weather service: validates a lookup, asks the provider, records the result.

use std::sync::Arc;

use crate::domain::weather_query::{CityWeather, NewWeatherQuery};
use crate::error::ServiceError;
use crate::persistence::SqlitePersistence;
use crate::provider::WeatherProvider;

/// Orchestration layer for city lookups.
///
/// Every lookup follows the pattern: validate input → call provider →
/// store record → shape response. Nothing is retried and nothing is
/// stored unless the provider answered with a temperature.
#[derive(Debug, Clone)]
pub struct WeatherService {
    provider: Arc<dyn WeatherProvider>,
    store: SqlitePersistence,
}

impl WeatherService {
    /// Creates a new `WeatherService`.
    #[must_use]
    pub fn new(provider: Arc<dyn WeatherProvider>, store: SqlitePersistence) -> Self {
        Self { provider, store }
    }

    /// Looks up the current temperature for `city` and records the query.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::MissingParameter`] if `city` is absent or empty.
    /// - [`ServiceError::CityNotFound`] if the provider lookup fails.
    /// - [`ServiceError::MalformedProviderResponse`],
    ///   [`ServiceError::Configuration`] or [`ServiceError::Persistence`]
    ///   for server-side faults.
    pub async fn lookup(&self, city: Option<&str>) -> Result<CityWeather, ServiceError> {
        let city = city
            .filter(|c| !c.is_empty())
            .ok_or(ServiceError::MissingParameter("city"))?;

        let temperature = self.provider.current_temperature(city).await?;

        let record = NewWeatherQuery {
            city: city.to_string(),
            temperature,
        };
        let id = self.store.insert(&record).await?;

        tracing::info!(id, city, temperature, "weather lookup recorded");
        Ok(CityWeather::new(city, temperature))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;

    /// Provider answering from a fixed table; unknown cities are not found.
    #[derive(Debug, Default)]
    pub(crate) struct TableProvider(pub(crate) HashMap<String, f64>);

    #[async_trait]
    impl WeatherProvider for TableProvider {
        async fn current_temperature(&self, city: &str) -> Result<f64, ServiceError> {
            self.0
                .get(&city.to_lowercase())
                .copied()
                .ok_or_else(|| ServiceError::CityNotFound(city.to_string()))
        }
    }

    /// Provider that always answers with a payload lacking a temperature.
    #[derive(Debug)]
    struct MalformedProvider;

    #[async_trait]
    impl WeatherProvider for MalformedProvider {
        async fn current_temperature(&self, _city: &str) -> Result<f64, ServiceError> {
            Err(ServiceError::MalformedProviderResponse(
                "missing field `temp`".to_string(),
            ))
        }
    }

    pub(crate) async fn open_store(dir: &tempfile::TempDir) -> SqlitePersistence {
        let url = format!("sqlite://{}", dir.path().join("weather.db").display());
        let Ok(store) = SqlitePersistence::connect_with(&url, 2, Duration::from_secs(5)).await
        else {
            panic!("failed to open store");
        };
        store
    }

    pub(crate) fn table(entries: &[(&str, f64)]) -> Arc<dyn WeatherProvider> {
        Arc::new(TableProvider(
            entries.iter().map(|(c, t)| ((*c).to_string(), *t)).collect(),
        ))
    }

    #[tokio::test]
    async fn lookup_returns_title_cased_city_and_stores_raw() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir");
        };
        let store = open_store(&dir).await;
        let service = WeatherService::new(table(&[("new york", 68.0)]), store.clone());

        let Ok(result) = service.lookup(Some("new york")).await else {
            panic!("lookup failed");
        };
        assert_eq!(result, CityWeather::new("New York", 68.0));

        let Ok(records) = store.all().await else {
            panic!("select failed");
        };
        assert_eq!(records.len(), 1);
        assert_eq!(records.first().map(|r| r.city.as_str()), Some("new york"));
    }

    #[tokio::test]
    async fn missing_or_empty_city_is_rejected() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir");
        };
        let store = open_store(&dir).await;
        let service = WeatherService::new(table(&[]), store.clone());

        for city in [None, Some("")] {
            let result = service.lookup(city).await;
            assert!(matches!(result, Err(ServiceError::MissingParameter("city"))));
        }
        assert_eq!(store.count().await.ok(), Some(0));
    }

    #[tokio::test]
    async fn whitespace_city_is_sent_to_the_provider() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir");
        };
        let store = open_store(&dir).await;
        let service = WeatherService::new(table(&[]), store.clone());

        let result = service.lookup(Some("   ")).await;
        assert!(matches!(result, Err(ServiceError::CityNotFound(ref c)) if c == "   "));
        assert_eq!(store.count().await.ok(), Some(0));
    }

    #[tokio::test]
    async fn unknown_city_stores_nothing() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir");
        };
        let store = open_store(&dir).await;
        let service = WeatherService::new(table(&[("london", 50.0)]), store.clone());

        let result = service.lookup(Some("Nonexistentplace123")).await;
        assert!(matches!(result, Err(ServiceError::CityNotFound(_))));
        assert_eq!(store.count().await.ok(), Some(0));
    }

    #[tokio::test]
    async fn malformed_payload_stores_nothing() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir");
        };
        let store = open_store(&dir).await;
        let service = WeatherService::new(Arc::new(MalformedProvider), store.clone());

        let result = service.lookup(Some("London")).await;
        assert!(matches!(
            result,
            Err(ServiceError::MalformedProviderResponse(_))
        ));
        assert_eq!(store.count().await.ok(), Some(0));
    }

    #[tokio::test]
    async fn repeated_lookups_are_not_deduplicated() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir");
        };
        let store = open_store(&dir).await;
        let service = WeatherService::new(table(&[("paris", 48.0)]), store.clone());

        for _ in 0..3 {
            assert!(service.lookup(Some("Paris")).await.is_ok());
        }
        assert_eq!(store.count().await.ok(), Some(3));
    }
}
