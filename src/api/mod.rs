use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    routing::get,
};
use tracing::debug;

use crate::{
    error::WeatherError,
    models::{Coordinates, WeatherCondition},
    weather::OpenWeatherClient,
};

/// Shared, read-only state handed to every request
#[derive(Clone, Debug)]
pub struct AppState {
    pub client: Arc<OpenWeatherClient>,
}

impl AppState {
    #[must_use]
    pub fn new(client: OpenWeatherClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/weather", get(get_current_weather))
        .with_state(state)
}

async fn get_current_weather(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<WeatherCondition>, WeatherError> {
    // An unreadable query string counts as missing parameters
    let params = query.map(|Query(params)| params).unwrap_or_default();
    let lat = first_value(&params, "lat");
    let lon = first_value(&params, "lon");

    let coordinates =
        Coordinates::parse(lat, lon).inspect_err(|e| debug!("Rejected request: {e}"))?;

    let payload = state.client.current_weather(&coordinates).await?;
    Ok(Json(payload.summarize()))
}

/// First value for `key`; later repeats are ignored
fn first_value<'a>(params: &'a [(String, String)], key: &str) -> &'a str {
    params
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
        .unwrap_or_default()
}
