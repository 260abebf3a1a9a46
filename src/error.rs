//! Error types and handling for the weather summary service

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Body returned when the caller sends an unparseable latitude or longitude
pub const INVALID_COORDINATE_MESSAGE: &str = "Lat/lon value is invalid";

/// Body returned for every failure whose details stay server-side
pub const INTERNAL_ERROR_MESSAGE: &str = "An unknown error occurred. Please contact support.";

/// Caller-facing error: an HTTP status code and a plain-text message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub code: u16,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn new<S: Into<String>>(code: u16, message: S) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// The generalized error handed out for network and decode failures
    #[must_use]
    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            INTERNAL_ERROR_MESSAGE,
        )
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.message)
    }
}

/// Main error type for the weather summary service
#[derive(Error, Debug)]
pub enum WeatherError {
    /// A latitude or longitude did not look like a decimal number
    #[error("invalid lat/lon value: '{raw}'")]
    InvalidCoordinate { raw: String },

    /// The weather provider rejected the request
    #[error("provider error: {0}")]
    Provider(ApiError),

    /// Transport or decode failure, already recorded with full detail
    #[error("{}", INTERNAL_ERROR_MESSAGE)]
    Internal,

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl WeatherError {
    /// Create a new invalid coordinate error
    pub fn invalid_coordinate<S: Into<String>>(raw: S) -> Self {
        Self::InvalidCoordinate { raw: raw.into() }
    }

    /// Create a new provider error
    pub fn provider<S: Into<String>>(code: u16, message: S) -> Self {
        Self::Provider(ApiError::new(code, message))
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// The status and message sent back to the caller
    #[must_use]
    pub fn api_error(&self) -> ApiError {
        match self {
            WeatherError::InvalidCoordinate { .. } => ApiError::new(
                StatusCode::BAD_REQUEST.as_u16(),
                INVALID_COORDINATE_MESSAGE,
            ),
            WeatherError::Provider(api_error) => api_error.clone(),
            WeatherError::Internal | WeatherError::Config { .. } => ApiError::internal(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        self.api_error().message
    }
}

impl IntoResponse for WeatherError {
    fn into_response(self) -> Response {
        let ApiError { code, message } = self.api_error();
        let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let coord_err = WeatherError::invalid_coordinate("abc");
        assert!(matches!(coord_err, WeatherError::InvalidCoordinate { ref raw } if raw == "abc"));

        let provider_err = WeatherError::provider(401, "Invalid API key");
        assert!(matches!(provider_err, WeatherError::Provider(_)));

        let config_err = WeatherError::config("missing base url");
        assert!(matches!(config_err, WeatherError::Config { .. }));
    }

    #[test]
    fn test_invalid_coordinate_names_raw_value() {
        let err = WeatherError::invalid_coordinate("");
        assert_eq!(err.to_string(), "invalid lat/lon value: ''");
    }

    #[test]
    fn test_user_messages() {
        let coord_err = WeatherError::invalid_coordinate("north");
        assert_eq!(coord_err.user_message(), INVALID_COORDINATE_MESSAGE);
        assert!(!coord_err.user_message().contains("north"));

        let provider_err = WeatherError::provider(404, "city not found");
        assert_eq!(provider_err.user_message(), "city not found");

        assert_eq!(WeatherError::Internal.user_message(), INTERNAL_ERROR_MESSAGE);
        assert_eq!(
            WeatherError::config("secret detail").user_message(),
            INTERNAL_ERROR_MESSAGE
        );
    }

    #[test]
    fn test_api_error_codes() {
        assert_eq!(WeatherError::invalid_coordinate("x").api_error().code, 400);
        assert_eq!(WeatherError::provider(401, "nope").api_error().code, 401);
        assert_eq!(WeatherError::Internal.api_error().code, 500);
    }

    #[test]
    fn test_into_response_status() {
        let response = WeatherError::provider(401, "Invalid API key").into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = WeatherError::invalid_coordinate("").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = WeatherError::Internal.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
