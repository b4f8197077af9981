//! # weather-ledger
//!
//! Current-weather proxy that records every successful lookup.
//!
//! A caller asks for a city over HTTP; the service forwards the request to
//! OpenWeatherMap in imperial units, extracts the temperature, appends a row
//! to a local SQLite table and answers with JSON. A second endpoint lists
//! every recorded lookup.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── WeatherService / HistoryService (service/)
//!     │
//!     ├── WeatherProvider ── OpenWeatherMap (provider/)
//!     │
//!     └── SQLite Persistence (persistence/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod provider;
pub mod service;
