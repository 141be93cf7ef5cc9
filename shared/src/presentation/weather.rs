//! Weather card formatting

use serde::Serialize;

use crate::format::{format_fixed, format_rounded};
use crate::models::{WeatherReport, WeatherSnapshot};

const NOT_AVAILABLE: &str = "N/A";

/// Display strings for the weather card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherSummary {
    pub temperature: String,
    pub wind_speed: String,
    pub wind_direction: String,
    pub humidity: String,
    pub conditions: String,
    pub pressure: String,
}

impl WeatherSummary {
    pub fn from_report(report: &WeatherReport) -> Self {
        Self::from(&WeatherSnapshot::from(report))
    }

    /// Labeled fields in card order
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("Temperature", self.temperature.as_str()),
            ("Wind Speed", self.wind_speed.as_str()),
            ("Wind Direction", self.wind_direction.as_str()),
            ("Humidity", self.humidity.as_str()),
            ("Conditions", self.conditions.as_str()),
            ("Pressure", self.pressure.as_str()),
        ]
    }

    /// Render the card body as `weather-item` blocks
    pub fn to_html(&self) -> String {
        self.fields()
            .iter()
            .map(|(label, value)| {
                format!(
                    "<div class=\"weather-item\"><strong>{}</strong><span>{}</span></div>",
                    label,
                    escape_html(value)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<&WeatherSnapshot> for WeatherSummary {
    fn from(snapshot: &WeatherSnapshot) -> Self {
        let or_na = |value: Option<String>| value.unwrap_or_else(|| NOT_AVAILABLE.to_string());

        WeatherSummary {
            temperature: format!("{}°F", or_na(snapshot.temperature.map(format_rounded))),
            wind_speed: format!("{} mph", format_fixed(snapshot.wind_speed, 1)),
            wind_direction: format!(
                "{} ({}°)",
                snapshot.wind_direction(),
                format_rounded(snapshot.wind_direction_degrees)
            ),
            humidity: format!("{}%", or_na(snapshot.humidity_percent.map(|h| h.to_string()))),
            conditions: snapshot
                .conditions
                .as_deref()
                .map(capitalize)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            pressure: format!("{} hPa", or_na(snapshot.pressure.map(|p| p.to_string()))),
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
