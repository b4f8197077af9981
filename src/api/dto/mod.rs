//! Data Transfer Objects for REST request/response serialization.

pub mod weather_dto;

pub use weather_dto::*;
