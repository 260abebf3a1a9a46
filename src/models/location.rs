//! Coordinate model and parsing of textual latitude/longitude values

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::WeatherError;

/// Optional sign, ASCII digits, optional decimal fraction.
static DEGREE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+(\.[0-9]+)?$").expect("valid degree pattern"));

/// Location coordinates
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    #[serde(rename = "lat")]
    pub latitude: f64,
    /// Longitude in decimal degrees
    #[serde(rename = "lon")]
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parse a latitude/longitude pair as received in a query string.
    ///
    /// Latitude is checked first; the error names the first offending value.
    /// Values are not range-checked against [-90, 90] / [-180, 180].
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, WeatherError> {
        Ok(Self {
            latitude: parse_degree(latitude)?,
            longitude: parse_degree(longitude)?,
        })
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Parse a single textual degree value, ignoring surrounding whitespace.
pub fn parse_degree(raw: &str) -> Result<f64, WeatherError> {
    let trimmed = raw.trim();
    if !DEGREE_PATTERN.is_match(trimmed) {
        return Err(WeatherError::invalid_coordinate(raw));
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(WeatherError::invalid_coordinate(raw)),
    }
}
