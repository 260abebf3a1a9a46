//! OpenWeatherMap "current weather" payload
//!
//! Field names follow <https://openweathermap.org/current>. The provider omits
//! blocks that do not apply (no `rain` when dry, no `gust` in calm air), so
//! every block falls back to its zero value.

use serde::{Deserialize, Serialize};

use super::location::Coordinates;

/// Full success payload of the current weather endpoint
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct WeatherPayload {
    /// City ID
    pub id: i64,
    /// Internal status code, 200 on success
    #[serde(rename = "cod")]
    pub code: i64,
    /// City name
    pub name: String,
    pub base: String,
    /// Shift in seconds from UTC
    pub timezone: i64,
    /// Visibility in meters
    pub visibility: i64,
    #[serde(rename = "coord")]
    pub coordinates: Coordinates,
    /// Time of data calculation, unix UTC
    #[serde(rename = "dt")]
    pub datetime: i64,
    pub wind: Wind,
    #[serde(rename = "sys")]
    pub system: System,
    pub main: Main,
    /// Weather phenomena, most significant first
    pub weather: Vec<Phenomenon>,
    pub clouds: Clouds,
    pub rain: Rain,
}

/// Temperature, pressure and humidity block
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Main {
    pub temp: f64,
    /// Perceived temperature
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    /// Atmospheric pressure in hPa
    pub pressure: i64,
    /// Humidity percentage
    pub humidity: i64,
    pub sea_level: i64,
    #[serde(rename = "grnd_level")]
    pub ground_level: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Wind {
    pub speed: f64,
    /// Wind direction in degrees (meteorological)
    #[serde(rename = "deg")]
    pub degree: i64,
    pub gust: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Clouds {
    /// Cloud cover percentage
    pub all: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Rain {
    /// Precipitation in the last hour, mm
    #[serde(rename = "1h")]
    pub one_hour: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct System {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: i64,
    /// Country code (ISO 3166-1 alpha-2)
    pub country: String,
    pub sunrise: i64,
    pub sunset: i64,
}

/// One weather phenomenon, e.g. `{"id": 501, "main": "Rain", ...}`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Phenomenon {
    pub id: i64,
    /// Group of weather parameters (Rain, Snow, Clouds, ...)
    pub main: String,
    pub description: String,
    pub icon: String,
}
