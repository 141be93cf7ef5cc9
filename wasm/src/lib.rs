//! WebAssembly client for the Golf Caddy advisor
//!
//! Provides the browser side of the app:
//! - Location, compass, and photo collection
//! - Weather card and advice rendering
//! - Pure helpers (direction naming, submit gating, prompt preview) for
//!   use from JavaScript

use wasm_bindgen::prelude::*;

mod api;
mod app;
mod dom;
mod geolocation;
mod image;
mod orientation;

// Re-export shared types for use in Rust callers
pub use shared::models::*;
pub use shared::types::*;

use shared::prompt::build_prompt;
use shared::session::can_submit;
use shared::{format_markdown, name_for, WeatherSummary};

/// Bind the page and start collecting input
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    app::GolfApp::mount()?;
    Ok(())
}

/// Compass label for a bearing
#[wasm_bindgen]
pub fn direction_name(degrees: f64) -> String {
    name_for(degrees).to_string()
}

/// Whether the distance field allows submission
#[wasm_bindgen]
pub fn can_submit_distance(input: &str) -> bool {
    can_submit(input)
}

/// Fallback Markdown conversion, for pages without a renderer
#[wasm_bindgen]
pub fn format_markdown_fallback(text: &str) -> String {
    format_markdown(text)
}

/// Render the weather card from a provider payload
#[wasm_bindgen]
pub fn weather_summary_html(report_json: &str) -> Result<String, JsValue> {
    let report: WeatherReport = serde_json::from_str(report_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid weather JSON: {}", e)))?;
    Ok(WeatherSummary::from_report(&report).to_html())
}

/// Prompt the relay would send for an advice request
#[wasm_bindgen]
pub fn prompt_preview(request_json: &str) -> Result<String, JsValue> {
    let request: AdviceRequest = serde_json::from_str(request_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid request JSON: {}", e)))?;
    Ok(build_prompt(&request))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_name() {
        assert_eq!(direction_name(0.0), "N");
        assert_eq!(direction_name(135.0), "SE");
        assert_eq!(direction_name(-90.0), "W");
    }

    #[test]
    fn test_can_submit_distance() {
        assert!(can_submit_distance("150"));
        assert!(!can_submit_distance(""));
        assert!(!can_submit_distance("0"));
        assert!(!can_submit_distance("-5"));
    }

    #[test]
    fn test_weather_summary_html() {
        let html = weather_summary_html(
            r#"{"main":{"temp":72.4,"humidity":60,"pressure":1013},"wind":{"speed":5.5,"deg":90},"weather":[{"description":"clear sky"}]}"#,
        )
        .unwrap();

        assert!(html.contains("72°F"));
        assert!(html.contains("5.5 mph"));
        assert!(html.contains("E (90°)"));
        assert!(html.contains("60%"));
        assert!(html.contains("Clear sky"));
        assert!(html.contains("1013 hPa"));
    }

    #[test]
    fn test_prompt_preview() {
        let prompt = prompt_preview(r#"{"distance":150,"direction":180}"#).unwrap();
        assert!(prompt.contains("- Distance from hole: 150 yards\n"));
        assert!(prompt.contains("- Facing direction: S (180°)\n"));
    }

    #[test]
    fn test_markdown_fallback() {
        let html = format_markdown_fallback("**bold** and *italic*\n\n# Title");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("</p><p>"));
    }
}
