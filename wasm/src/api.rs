//! Calls to the relay endpoints

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use shared::{AdviceRequest, AdviceResponse, ErrorBody, WeatherReport};

use crate::dom::error_message;

const WEATHER_FALLBACK: &str = "Weather API request failed";
const ADVICE_FALLBACK: &str = "Failed to get golf advice";

/// Fetch current weather for a position through the relay
pub async fn fetch_weather(latitude: f64, longitude: f64) -> Result<WeatherReport, String> {
    let url = format!(
        "{}/api/weather?lat={}&lon={}",
        origin()?,
        latitude,
        longitude
    );
    let request = Request::new_with_str(&url).map_err(|e| error_message(&e))?;

    send_json(&request, WEATHER_FALLBACK).await
}

/// Ask the relay for golf advice; returns the Markdown text
pub async fn request_advice(advice: &AdviceRequest) -> Result<String, String> {
    let body = serde_json::to_string(advice).map_err(|e| e.to_string())?;

    let headers = Headers::new().map_err(|e| error_message(&e))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| error_message(&e))?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&body));

    let url = format!("{}/api/golf-advice", origin()?);
    let request = Request::new_with_str_and_init(&url, &init).map_err(|e| error_message(&e))?;

    let response: AdviceResponse = send_json(&request, ADVICE_FALLBACK).await?;
    Ok(response.advice)
}

fn origin() -> Result<String, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    window.location().origin().map_err(|e| error_message(&e))
}

/// Send a request and decode the JSON reply; failures carry the relay's
/// `error` message when it sent one
async fn send_json<T: DeserializeOwned>(request: &Request, fallback: &str) -> Result<T, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;

    let response: Response = JsFuture::from(window.fetch_with_request(request))
        .await
        .and_then(|value| value.dyn_into())
        .map_err(|e| error_message(&e))?;

    let text_promise = response.text().map_err(|e| error_message(&e))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| error_message(&e))?
        .as_string()
        .unwrap_or_default();

    if !response.ok() {
        return Err(serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or_else(|_| fallback.to_string()));
    }

    serde_json::from_str(&text).map_err(|e| e.to_string())
}
