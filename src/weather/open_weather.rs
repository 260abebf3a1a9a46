//! OpenWeatherMap current weather client
//!
//! One GET per call with the HTTP client's default timeouts. Failures the
//! caller should not see (transport, unreadable or undecodable bodies) are
//! handed to the [`ErrorRecorder`] and collapse into [`WeatherError::Internal`].
//! Provider error bodies are passed through verbatim.

use std::fmt;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use super::recorder::{ErrorRecorder, TracingRecorder};
use crate::config::WeatherConfig;
use crate::error::WeatherError;
use crate::models::{Coordinates, WeatherPayload};

/// Unit system requested from the provider; bucketing thresholds are Fahrenheit
pub const UNITS: &str = "imperial";

/// Error body of the provider, e.g. `{"cod": 401, "message": "Invalid API key..."}`
#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    #[serde(rename = "cod")]
    code: ProviderCode,
    #[serde(default)]
    message: String,
}

/// The provider sends `cod` as a number on some endpoints and as a string on others
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ProviderCode {
    Number(i64),
    Text(String),
}

impl ProviderCode {
    /// The code as an HTTP status, if it is one
    fn status(&self) -> Option<StatusCode> {
        let code = match self {
            ProviderCode::Number(code) => *code,
            ProviderCode::Text(code) => code.trim().parse().ok()?,
        };
        StatusCode::from_u16(u16::try_from(code).ok()?).ok()
    }
}

/// Weather API client for OpenWeatherMap
pub struct OpenWeatherClient {
    /// HTTP client
    client: Client,
    base_url: String,
    api_key: String,
    recorder: Arc<dyn ErrorRecorder>,
}

impl fmt::Debug for OpenWeatherClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl OpenWeatherClient {
    /// Create a new client logging internal failures through `tracing`
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("weather-summary/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            recorder: Arc::new(TracingRecorder),
        })
    }

    pub fn from_config(config: &WeatherConfig) -> Result<Self> {
        Self::new(config.base_url.clone(), config.api_key.clone())
    }

    /// Replace the sink for internal failures
    #[must_use]
    pub fn with_recorder(mut self, recorder: Arc<dyn ErrorRecorder>) -> Self {
        self.recorder = recorder;
        self
    }

    /// `<base>/weather?lat=..&lon=..&apikey=..&units=imperial`
    #[must_use]
    pub fn request_url(&self, coordinates: &Coordinates) -> String {
        format!(
            "{}/weather?lat={}&lon={}&apikey={}&units={}",
            self.base_url,
            coordinates.latitude,
            coordinates.longitude,
            urlencoding::encode(&self.api_key),
            UNITS
        )
    }

    /// Fetch the current weather at `coordinates`
    #[instrument(skip_all, fields(coordinates = %coordinates.format_coordinates()))]
    pub async fn current_weather(
        &self,
        coordinates: &Coordinates,
    ) -> std::result::Result<WeatherPayload, WeatherError> {
        let response = self
            .client
            .get(self.request_url(coordinates))
            .send()
            .await
            .map_err(|e| {
                self.internal(anyhow!(e.without_url()).context("Failed to reach weather provider"))
            })?;

        let status = response.status();
        debug!("Weather provider answered {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| {
                self.internal(
                    anyhow!(e.without_url()).context("Failed to read weather provider response"),
                )
            })?;

        if status != StatusCode::OK {
            return Err(self.provider_error(status, &body));
        }

        let payload: WeatherPayload = serde_json::from_str(&body).map_err(|e| {
            self.internal(anyhow!(e).context("Failed to parse weather provider response"))
        })?;

        info!(
            "Retrieved current weather for '{}' ({} phenomena)",
            payload.name,
            payload.weather.len()
        );
        Ok(payload)
    }

    /// Turn a non-200 answer into the caller-facing error
    fn provider_error(&self, status: StatusCode, body: &str) -> WeatherError {
        let parsed = match serde_json::from_str::<ProviderErrorBody>(body) {
            Ok(parsed) => parsed,
            Err(e) => {
                return self.internal(anyhow!(e).context(format!(
                    "Failed to parse weather provider error (HTTP {status})"
                )));
            }
        };

        match parsed.code.status() {
            Some(code) => {
                warn!("Weather provider rejected request: {} {}", code, parsed.message);
                WeatherError::provider(code.as_u16(), parsed.message)
            }
            None => self.internal(anyhow!(
                "Weather provider answered HTTP {status} with unusable code {:?}: {}",
                parsed.code,
                parsed.message
            )),
        }
    }

    fn internal(&self, error: anyhow::Error) -> WeatherError {
        self.recorder.record(&error);
        WeatherError::Internal
    }
}
