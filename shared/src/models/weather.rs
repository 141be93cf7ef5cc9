//! Weather data models
//!
//! `WeatherReport` mirrors the subset of the OpenWeatherMap current-weather
//! payload that the page and the prompt read. Every field is optional so a
//! partial payload still renders.

use serde::{Deserialize, Serialize};

use crate::direction::CardinalDirection;

/// Current weather as returned by the provider (imperial units)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WeatherReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<MainReadings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind: Option<WindReadings>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weather: Vec<Condition>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MainReadings {
    /// Temperature in °F
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp: Option<f64>,
    /// Relative humidity in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    /// Sea-level pressure in hPa
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WindReadings {
    /// Wind speed in mph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    /// Meteorological wind direction in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deg: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Condition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Normalized view of a weather report
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub temperature: Option<f64>,
    /// Calm when the provider omits it
    pub wind_speed: f64,
    /// North when the provider omits it
    pub wind_direction_degrees: f64,
    pub humidity_percent: Option<f64>,
    pub conditions: Option<String>,
    pub pressure: Option<f64>,
}

impl WeatherSnapshot {
    pub fn wind_direction(&self) -> CardinalDirection {
        CardinalDirection::from_degrees(self.wind_direction_degrees)
    }
}

impl From<&WeatherReport> for WeatherSnapshot {
    fn from(report: &WeatherReport) -> Self {
        let main = report.main.as_ref();
        let wind = report.wind.as_ref();

        WeatherSnapshot {
            temperature: main.and_then(|m| m.temp),
            wind_speed: wind.and_then(|w| w.speed).unwrap_or(0.0),
            wind_direction_degrees: wind.and_then(|w| w.deg).unwrap_or(0.0),
            humidity_percent: main.and_then(|m| m.humidity),
            conditions: report
                .weather
                .first()
                .and_then(|c| c.description.clone())
                .filter(|d| !d.is_empty()),
            pressure: main.and_then(|m| m.pressure),
        }
    }
}
