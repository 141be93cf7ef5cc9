//! Configuration management for the Golf Caddy relay
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with GOLF__ prefix
//! 4. The conventional `PORT`, `OPENWEATHER_API_KEY` and `OPENAI_API_KEY` variables

use config::{ConfigError, Environment, File};
use serde::Deserialize;

pub const DEFAULT_WEATHER_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com/v1";

/// Value shipped in `.env.example`; treated the same as a missing key
pub const WEATHER_KEY_PLACEHOLDER: &str = "your_openweather_api_key_here";
pub const OPENAI_KEY_PLACEHOLDER: &str = "your_openai_api_key_here";

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Weather provider configuration
    pub weather: WeatherConfig,

    /// Chat completion provider configuration
    pub openai: OpenAiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,

    /// Directory holding the front-end bundle
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API base URL
    pub api_endpoint: String,

    /// Weather API key
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OpenAiConfig {
    /// Chat completion API base URL
    pub api_endpoint: String,

    /// Chat completion API key
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("GOLF_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 8000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.static_dir", "frontend")?
            .set_default("weather.api_endpoint", DEFAULT_WEATHER_ENDPOINT)?
            .set_default("openai.api_endpoint", DEFAULT_OPENAI_ENDPOINT)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (GOLF__ prefix)
            .add_source(
                Environment::with_prefix("GOLF")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", env_var("PORT"))?
            .set_override_option("weather.api_key", env_var("OPENWEATHER_API_KEY"))?
            .set_override_option("openai.api_key", env_var("OPENAI_API_KEY"))?
            .build()?;

        config.try_deserialize()
    }
}

impl WeatherConfig {
    /// The API key, unless it is missing or still the placeholder
    pub fn configured_key(&self) -> Option<&str> {
        configured_key(self.api_key.as_deref(), WEATHER_KEY_PLACEHOLDER)
    }
}

impl OpenAiConfig {
    /// The API key, unless it is missing or still the placeholder
    pub fn configured_key(&self) -> Option<&str> {
        configured_key(self.api_key.as_deref(), OPENAI_KEY_PLACEHOLDER)
    }
}

fn configured_key<'a>(key: Option<&'a str>, placeholder: &str) -> Option<&'a str> {
    key.map(str::trim)
        .filter(|key| !key.is_empty() && *key != placeholder)
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "0.0.0.0".to_string(),
            static_dir: "frontend".to_string(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_WEATHER_ENDPOINT.to_string(),
            api_key: None,
        }
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_OPENAI_ENDPOINT.to_string(),
            api_key: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_keys_are_not_configured() {
        let weather = WeatherConfig {
            api_key: Some(WEATHER_KEY_PLACEHOLDER.to_string()),
            ..Default::default()
        };
        assert_eq!(weather.configured_key(), None);

        let openai = OpenAiConfig {
            api_key: Some(OPENAI_KEY_PLACEHOLDER.to_string()),
            ..Default::default()
        };
        assert_eq!(openai.configured_key(), None);
    }

    #[test]
    fn test_missing_and_blank_keys_are_not_configured() {
        assert_eq!(WeatherConfig::default().configured_key(), None);

        let blank = OpenAiConfig {
            api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(blank.configured_key(), None);
    }

    #[test]
    fn test_real_key_is_configured() {
        let weather = WeatherConfig {
            api_key: Some("abc123".to_string()),
            ..Default::default()
        };
        assert_eq!(weather.configured_key(), Some("abc123"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.static_dir, "frontend");
        assert_eq!(config.weather.api_endpoint, DEFAULT_WEATHER_ENDPOINT);
        assert_eq!(config.openai.api_endpoint, DEFAULT_OPENAI_ENDPOINT);
    }
}
