//! SQLite implementation of the persistence layer.

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use super::models::{NewWeatherQuery, WeatherQueryRecord};
use crate::config::ServiceConfig;
use crate::error::ServiceError;

const CREATE_WEATHER_QUERIES: &str = "CREATE TABLE IF NOT EXISTS weather_queries (\
     id INTEGER PRIMARY KEY, \
     city TEXT NOT NULL, \
     temperature REAL NOT NULL)";

/// SQLite-backed persistence layer using `sqlx::SqlitePool`.
///
/// Every operation checks a connection out of the pool for its own
/// duration, so concurrent requests never share a session.
#[derive(Debug, Clone)]
pub struct SqlitePersistence {
    pool: SqlitePool,
}

impl SqlitePersistence {
    /// Creates a new persistence layer with the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens the database named by `config.database_url`, creating the
    /// file if it is missing, and ensures the schema exists.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::Persistence`] if the URL is invalid, the
    /// file cannot be opened, or the schema cannot be created.
    pub async fn connect(config: &ServiceConfig) -> Result<Self, ServiceError> {
        Self::connect_with(
            &config.database_url,
            config.database_max_connections,
            Duration::from_secs(config.database_connect_timeout_secs),
        )
        .await
    }

    /// Like [`Self::connect`], with explicit pool settings.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::Persistence`] on database failure.
    pub async fn connect_with(
        database_url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, ServiceError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .acquire_timeout(acquire_timeout)
            .connect_with(options)
            .await?;

        let store = Self::new(pool);
        store.ensure_schema().await?;
        tracing::info!(database_url, "weather query store ready");
        Ok(store)
    }

    /// Creates the `weather_queries` table if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::Persistence`] on database failure.
    pub async fn ensure_schema(&self) -> Result<(), ServiceError> {
        sqlx::query(CREATE_WEATHER_QUERIES)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Appends one record and returns its freshly assigned id.
    ///
    /// The insert runs in its own transaction; if it fails the transaction
    /// is dropped and rolled back.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::Persistence`] on database failure.
    pub async fn insert(&self, record: &NewWeatherQuery) -> Result<i64, ServiceError> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO weather_queries (city, temperature) VALUES (?, ?) RETURNING id",
        )
        .bind(&record.city)
        .bind(record.temperature)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(id, city = %record.city, "weather query stored");
        Ok(id)
    }

    /// Loads every stored record in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::Persistence`] on database failure.
    pub async fn all(&self) -> Result<Vec<WeatherQueryRecord>, ServiceError> {
        let rows = sqlx::query_as::<_, WeatherQueryRecord>(
            "SELECT id, city, temperature FROM weather_queries ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Returns the number of stored records.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::Persistence`] on database failure.
    pub async fn count(&self) -> Result<i64, ServiceError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM weather_queries")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Closes the pool; later operations fail with a persistence error.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("weather query store closed");
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    async fn open(dir: &tempfile::TempDir) -> SqlitePersistence {
        let url = format!("sqlite://{}", dir.path().join("weather.db").display());
        let Ok(store) = SqlitePersistence::connect_with(&url, 2, Duration::from_secs(5)).await
        else {
            panic!("failed to open store");
        };
        store
    }

    fn query(city: &str, temperature: f64) -> NewWeatherQuery {
        NewWeatherQuery {
            city: city.to_string(),
            temperature,
        }
    }

    #[tokio::test]
    async fn creates_database_file_when_missing() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir");
        };
        let path = dir.path().join("weather.db");
        assert!(!path.exists());

        let store = open(&dir).await;
        assert!(path.exists());
        assert_eq!(store.count().await.ok(), Some(0));
    }

    #[tokio::test]
    async fn ensure_schema_is_idempotent() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir");
        };
        let store = open(&dir).await;
        let _ = store.insert(&query("oslo", 30.2)).await;

        assert!(store.ensure_schema().await.is_ok());
        assert_eq!(store.count().await.ok(), Some(1));
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir");
        };
        let store = open(&dir).await;

        let Ok(first) = store.insert(&query("london", 50.0)).await else {
            panic!("insert failed");
        };
        let Ok(second) = store.insert(&query("london", 50.0)).await else {
            panic!("insert failed");
        };
        assert!(second > first);
    }

    #[tokio::test]
    async fn all_returns_records_verbatim_in_order() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir");
        };
        let store = open(&dir).await;
        let _ = store.insert(&query("new york", 68.5)).await;
        let _ = store.insert(&query("PARIS", 48.0)).await;

        let Ok(records) = store.all().await else {
            panic!("select failed");
        };
        let cities: Vec<&str> = records.iter().map(|r| r.city.as_str()).collect();
        assert_eq!(cities, ["new york", "PARIS"]);
        assert_eq!(records.first().map(|r| r.temperature), Some(68.5));
    }

    #[tokio::test]
    async fn records_survive_reopen() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir");
        };
        {
            let store = open(&dir).await;
            let _ = store.insert(&query("lima", 66.0)).await;
            store.close().await;
        }
        let store = open(&dir).await;
        assert_eq!(store.count().await.ok(), Some(1));
    }

    #[tokio::test]
    async fn closed_store_reports_persistence_error() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir");
        };
        let store = open(&dir).await;
        store.close().await;
        assert!(matches!(store.count().await, Err(ServiceError::Persistence(_))));
    }

    #[tokio::test]
    async fn unreachable_directory_is_persistence_error() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir");
        };
        let url = format!(
            "sqlite://{}",
            dir.path().join("missing").join("weather.db").display()
        );
        let result = SqlitePersistence::connect_with(&url, 1, Duration::from_secs(1)).await;
        assert!(matches!(result, Err(ServiceError::Persistence(_))));
    }
}
