//! External API integrations

pub mod openai;
pub mod weather;

pub use openai::ChatClient;
pub use weather::WeatherClient;

use reqwest::Response;
use serde_json::Value;

use crate::error::AppError;

/// Turn a non-success provider response into `UpstreamRejected`.
///
/// The message is read from `pointer` in the JSON body; `fallback` is used
/// when the body is not JSON or the field is missing.
async fn rejection(response: Response, pointer: &str, fallback: &str) -> AppError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();

    AppError::UpstreamRejected {
        status,
        message: error_message(&body, pointer).unwrap_or_else(|| fallback.to_string()),
    }
}

fn error_message(body: &str, pointer: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    json.pointer(pointer)
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"cod":401,"message":"Invalid API key"}"#, "/message"),
            Some("Invalid API key".to_string())
        );
        assert_eq!(
            error_message(
                r#"{"error":{"message":"Rate limit reached","type":"requests"}}"#,
                "/error/message"
            ),
            Some("Rate limit reached".to_string())
        );
    }

    #[test]
    fn test_error_message_missing() {
        assert_eq!(error_message("<html>Bad Gateway</html>", "/message"), None);
        assert_eq!(error_message(r#"{"cod":500}"#, "/message"), None);
        assert_eq!(error_message(r#"{"message":""}"#, "/message"), None);
    }
}
