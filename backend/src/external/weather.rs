//! Weather API client for fetching current conditions
//!
//! Integrates with the OpenWeatherMap current-weather endpoint. The payload
//! is relayed to the browser unchanged.

use reqwest::Client;
use serde_json::Value;

use crate::error::{AppError, AppResult};

const REJECTED_FALLBACK: &str = "Weather API request failed";
pub const UNAVAILABLE_MESSAGE: &str = "Failed to fetch weather data";

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(client: Client, api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Fetch current weather conditions by GPS coordinates, in imperial units
    pub async fn get_current_weather(&self, latitude: f64, longitude: f64) -> AppResult<Value> {
        let url = format!("{}/weather", self.base_url.trim_end_matches('/'));
        tracing::debug!(%latitude, %longitude, "Requesting current weather");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "imperial".to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Weather API request failed: {}", e);
                AppError::UpstreamUnavailable(UNAVAILABLE_MESSAGE.to_string())
            })?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "Weather API rejected request");
            return Err(super::rejection(response, "/message", REJECTED_FALLBACK).await);
        }

        response.json::<Value>().await.map_err(|e| {
            tracing::error!("Failed to parse weather response: {}", e);
            AppError::UpstreamUnavailable(UNAVAILABLE_MESSAGE.to_string())
        })
    }
}
