//! Caddy prompt assembly
//!
//! The prompt is an ordered list of fragments. Each fragment is a pure
//! function of the request that either contributes text or stays silent,
//! so the server prompt and the in-page preview are always identical.

use serde::{Deserialize, Serialize};

use crate::direction::name_for;
use crate::format::{format_fixed, format_rounded};
use crate::models::{AdviceRequest, WeatherSnapshot};

/// System message sent ahead of every user turn
pub const SYSTEM_INSTRUCTION: &str = "You are an expert golf caddy with years of experience helping golfers improve their game. Provide practical, actionable advice.";

/// Completion token ceiling
pub const MAX_TOKENS: u32 = 500;

/// Sampling temperature
pub const TEMPERATURE: f32 = 0.7;

const PREAMBLE: &str =
    "You are an expert golf caddy providing advice to a golfer. Here's the situation:\n\n";

const IMAGE_NOTE: &str = "- The golfer has uploaded a picture of the target area.\n";

const CLOSING: &str = "\nPlease provide specific, actionable golf advice including:\n\
1. Club selection recommendation\n\
2. How to account for wind conditions\n\
3. Shot strategy and technique tips\n\
4. Any other relevant factors to consider\n\
\nBe concise but helpful, and write in a friendly, encouraging tone.";

const NOT_AVAILABLE: &str = "N/A";

/// Which chat model a request needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelVariant {
    /// Lightweight text-only model
    Text,
    /// Vision-capable model, used when a photo is attached
    Vision,
}

impl ModelVariant {
    pub fn for_request(request: &AdviceRequest) -> Self {
        if request.has_image() {
            ModelVariant::Vision
        } else {
            ModelVariant::Text
        }
    }

    pub fn model_id(&self) -> &'static str {
        match self {
            ModelVariant::Text => "gpt-4o-mini",
            ModelVariant::Vision => "gpt-4o",
        }
    }
}

type Fragment = fn(&AdviceRequest) -> Option<String>;

/// Fragments in prompt order
const FRAGMENTS: [Fragment; 7] = [
    preamble,
    distance_line,
    location_line,
    direction_line,
    weather_block,
    image_line,
    closing,
];

/// Build the user prompt for a request
pub fn build_prompt(request: &AdviceRequest) -> String {
    FRAGMENTS
        .iter()
        .filter_map(|fragment| fragment(request))
        .collect()
}

fn preamble(_: &AdviceRequest) -> Option<String> {
    Some(PREAMBLE.to_string())
}

fn distance_line(request: &AdviceRequest) -> Option<String> {
    request
        .distance
        .map(|yards| format!("- Distance from hole: {} yards\n", yards))
}

fn location_line(request: &AdviceRequest) -> Option<String> {
    request.location.map(|location| {
        format!(
            "- Location: {}, {}\n",
            format_fixed(location.latitude, 4),
            format_fixed(location.longitude, 4)
        )
    })
}

fn direction_line(request: &AdviceRequest) -> Option<String> {
    request.direction.map(|degrees| {
        format!(
            "- Facing direction: {} ({}°)\n",
            name_for(degrees),
            format_rounded(degrees)
        )
    })
}

fn weather_block(request: &AdviceRequest) -> Option<String> {
    let weather = WeatherSnapshot::from(request.weather.as_ref()?);

    let temperature = weather
        .temperature
        .map(format_rounded)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let humidity = weather
        .humidity_percent
        .map(|h| h.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let conditions = weather.conditions.as_deref().unwrap_or(NOT_AVAILABLE);

    let mut block = String::from("- Weather conditions:\n");
    block.push_str(&format!("  * Temperature: {}°F\n", temperature));
    block.push_str(&format!(
        "  * Wind: {} mph from {} ({}°)\n",
        format_fixed(weather.wind_speed, 1),
        weather.wind_direction(),
        format_rounded(weather.wind_direction_degrees)
    ));
    block.push_str(&format!("  * Humidity: {}%\n", humidity));
    block.push_str(&format!("  * Conditions: {}\n", conditions));
    Some(block)
}

fn image_line(request: &AdviceRequest) -> Option<String> {
    request.has_image().then(|| IMAGE_NOTE.to_string())
}

fn closing(_: &AdviceRequest) -> Option<String> {
    Some(CLOSING.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Condition, MainReadings, WeatherReport, WindReadings};
    use crate::types::Coordinate;

    fn sample_weather() -> WeatherReport {
        WeatherReport {
            main: Some(MainReadings {
                temp: Some(72.4),
                humidity: Some(60.0),
                pressure: Some(1013.0),
            }),
            wind: Some(WindReadings {
                speed: Some(5.5),
                deg: Some(90.0),
            }),
            weather: vec![Condition {
                description: Some("clear sky".to_string()),
            }],
        }
    }

    #[test]
    fn test_distance_only_prompt() {
        let prompt = build_prompt(&AdviceRequest::new(150));

        let expected = format!(
            "{}- Distance from hole: 150 yards\n{}",
            PREAMBLE, CLOSING
        );
        assert_eq!(prompt, expected);
        assert!(!prompt.contains("Location:"));
        assert!(!prompt.contains("Facing direction"));
        assert!(!prompt.contains("Weather conditions"));
        assert!(!prompt.contains("uploaded a picture"));
    }

    #[test]
    fn test_fractional_distance_prompts_whole_yards() {
        let request: AdviceRequest =
            serde_json::from_value(serde_json::json!({ "distance": 150.7 })).unwrap();

        let prompt = build_prompt(&request);
        assert!(prompt.contains("- Distance from hole: 150 yards\n"));
        assert!(!prompt.contains("150.7"));
    }

    #[test]
    fn test_full_prompt_order() {
        let request = AdviceRequest {
            distance: Some(165),
            location: Some(Coordinate::new(37.774929, -122.419416)),
            direction: Some(271.6),
            weather: Some(sample_weather()),
            image: Some("data:image/jpeg;base64,/9j/4AAQ".to_string()),
        };

        let prompt = build_prompt(&request);
        let expected = format!(
            "{}{}{}{}{}{}{}{}{}{}",
            PREAMBLE,
            "- Distance from hole: 165 yards\n",
            "- Location: 37.7749, -122.4194\n",
            "- Facing direction: W (272°)\n",
            "- Weather conditions:\n",
            "  * Temperature: 72°F\n",
            "  * Wind: 5.5 mph from E (90°)\n",
            "  * Humidity: 60%\n",
            "  * Conditions: clear sky\n",
            IMAGE_NOTE,
        ) + CLOSING;
        assert_eq!(prompt, expected);
    }

    #[test]
    fn test_partial_weather_block() {
        let request = AdviceRequest {
            weather: Some(WeatherReport::default()),
            ..AdviceRequest::new(100)
        };

        let prompt = build_prompt(&request);
        assert!(prompt.contains("  * Temperature: N/A°F\n"));
        assert!(prompt.contains("  * Wind: 0.0 mph from N (0°)\n"));
        assert!(prompt.contains("  * Humidity: N/A%\n"));
        assert!(prompt.contains("  * Conditions: N/A\n"));
    }

    #[test]
    fn test_zero_direction_is_included() {
        let request = AdviceRequest {
            direction: Some(0.0),
            ..AdviceRequest::new(120)
        };
        assert!(build_prompt(&request).contains("- Facing direction: N (0°)\n"));
    }

    #[test]
    fn test_model_selection() {
        let text_only = AdviceRequest::new(150);
        assert_eq!(ModelVariant::for_request(&text_only), ModelVariant::Text);
        assert_eq!(ModelVariant::Text.model_id(), "gpt-4o-mini");

        let with_image = AdviceRequest {
            image: Some("data:image/png;base64,iVBOR".to_string()),
            ..AdviceRequest::new(150)
        };
        assert_eq!(ModelVariant::for_request(&with_image), ModelVariant::Vision);
        assert_eq!(ModelVariant::Vision.model_id(), "gpt-4o");
    }
}
