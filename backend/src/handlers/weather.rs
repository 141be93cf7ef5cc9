//! HTTP handler for the weather relay

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::error::AppResult;
use crate::services::WeatherService;
use crate::AppState;

/// Query parameters for the weather relay, kept raw so the service can
/// tell a missing value from a malformed one
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

/// Relay current weather for a position
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> AppResult<Json<Value>> {
    let service = WeatherService::new(&state.config.weather, state.http.clone());
    let weather = service
        .fetch_weather(query.lat.as_deref(), query.lon.as_deref())
        .await?;
    Ok(Json(weather))
}
