//! Weather relay service

use reqwest::Client;
use serde_json::Value;
use shared::parse_coordinates;

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};
use crate::external::WeatherClient;

pub const NOT_CONFIGURED_MESSAGE: &str = "OpenWeather API key not configured";

/// Weather relay service
#[derive(Clone)]
pub struct WeatherService {
    /// Absent when no usable API key is configured
    client: Option<WeatherClient>,
}

impl WeatherService {
    pub fn new(config: &WeatherConfig, http: Client) -> Self {
        Self {
            client: config
                .configured_key()
                .map(|key| WeatherClient::new(http, key, config.api_endpoint.clone())),
        }
    }

    /// Validate the raw query parameters and fetch current weather.
    ///
    /// Parameters are checked before the key, and neither failure reaches
    /// the provider.
    pub async fn fetch_weather(
        &self,
        latitude: Option<&str>,
        longitude: Option<&str>,
    ) -> AppResult<Value> {
        let (latitude, longitude) = parse_coordinates(latitude, longitude)?;

        let client = self
            .client
            .as_ref()
            .ok_or_else(|| AppError::NotConfigured(NOT_CONFIGURED_MESSAGE.to_string()))?;

        client.get_current_weather(latitude, longitude).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WEATHER_KEY_PLACEHOLDER;

    fn service(key: Option<&str>) -> WeatherService {
        let config = WeatherConfig {
            // Unroutable; any outbound call would fail loudly
            api_endpoint: "http://127.0.0.1:9".to_string(),
            api_key: key.map(str::to_string),
        };
        WeatherService::new(&config, Client::new())
    }

    #[tokio::test]
    async fn test_missing_coordinates_checked_first() {
        let err = service(None)
            .fetch_weather(Some("37.7"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MissingParameter(_)));
    }

    #[tokio::test]
    async fn test_placeholder_key_not_configured() {
        let err = service(Some(WEATHER_KEY_PLACEHOLDER))
            .fetch_weather(Some("37.7"), Some("-122.4"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotConfigured(ref m) if m == NOT_CONFIGURED_MESSAGE));
    }
}
