//! History service: lists every recorded lookup.

use crate::domain::weather_query::CityWeather;
use crate::error::ServiceError;
use crate::persistence::SqlitePersistence;

/// Read-only view over the stored weather queries.
#[derive(Debug, Clone)]
pub struct HistoryService {
    store: SqlitePersistence,
}

impl HistoryService {
    /// Creates a new `HistoryService`.
    #[must_use]
    pub fn new(store: SqlitePersistence) -> Self {
        Self { store }
    }

    /// Returns every recorded lookup, oldest first, cities title-cased.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::Persistence`] on database failure.
    pub async fn list_all(&self) -> Result<Vec<CityWeather>, ServiceError> {
        let records = self.store.all().await?;
        Ok(records.into_iter().map(CityWeather::from).collect())
    }

    /// Number of recorded lookups.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::Persistence`] on database failure.
    pub async fn count(&self) -> Result<i64, ServiceError> {
        self.store.count().await
    }
}
