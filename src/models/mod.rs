//! Data models for the weather summary service
//!
//! This module contains the domain models organized by concern:
//! - Location: coordinates and their textual parsing
//! - Weather: the provider's current weather payload
//! - Condition: the summarized response and temperature bucketing

pub mod condition;
pub mod location;
pub mod weather;

// Re-export all public types for convenient access
pub use condition::{TemperatureBucket, WeatherCondition};
pub use location::{Coordinates, parse_degree};
pub use weather::{Main, Phenomenon, WeatherPayload};
