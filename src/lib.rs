//! `weather-summary` - current weather conditions for a coordinate pair
//!
//! This library forwards coordinates to the OpenWeatherMap current weather
//! endpoint and reduces the answer to a temperature bucket plus the list of
//! active weather phenomena, served over `GET /weather`.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use api::{AppState, router};
pub use config::ServiceConfig;
pub use error::{ApiError, WeatherError};
pub use models::{Coordinates, TemperatureBucket, WeatherCondition, WeatherPayload};
pub use weather::{ErrorRecorder, OpenWeatherClient};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WeatherError>;
