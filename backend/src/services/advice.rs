//! Advice composer service
//!
//! Validates the request, assembles the caddy prompt, and forwards it to the
//! chat completion provider.

use reqwest::Client;
use shared::prompt::{build_prompt, ModelVariant, MAX_TOKENS, SYSTEM_INSTRUCTION, TEMPERATURE};
use shared::{validate_advice_request, AdviceRequest, AdviceResponse};

use crate::config::OpenAiConfig;
use crate::error::{AppError, AppResult};
use crate::external::openai::{
    ChatCompletionRequest, ChatMessage, ContentPart, ImageUrl, MessageContent,
};
use crate::external::ChatClient;

pub const NOT_CONFIGURED_MESSAGE: &str = "OpenAI API key not configured";

/// Advice composer service
#[derive(Clone)]
pub struct AdviceService {
    /// Absent when no usable API key is configured
    client: Option<ChatClient>,
}

impl AdviceService {
    pub fn new(config: &OpenAiConfig, http: Client) -> Self {
        Self {
            client: config
                .configured_key()
                .map(|key| ChatClient::new(http, key, config.api_endpoint.clone())),
        }
    }

    /// Compose golf advice for the collected shot context
    pub async fn compose_advice(&self, request: &AdviceRequest) -> AppResult<AdviceResponse> {
        validate_advice_request(request)?;

        let client = self
            .client
            .as_ref()
            .ok_or_else(|| AppError::NotConfigured(NOT_CONFIGURED_MESSAGE.to_string()))?;

        let completion = build_completion_request(request);
        tracing::info!(
            model = %completion.model,
            has_location = request.location.is_some(),
            has_direction = request.direction.is_some(),
            has_weather = request.weather.is_some(),
            "Composing golf advice"
        );

        let advice = client.create_completion(&completion).await?;
        Ok(AdviceResponse { advice })
    }
}

/// Build the chat request: system turn, then one user turn carrying the
/// prompt and, when present, the photo.
pub fn build_completion_request(request: &AdviceRequest) -> ChatCompletionRequest {
    let variant = ModelVariant::for_request(request);
    let prompt = build_prompt(request);

    let content = match request.image() {
        Some(image) => MessageContent::Parts(vec![
            ContentPart::Text { text: prompt },
            ContentPart::ImageUrl {
                image_url: ImageUrl {
                    url: image.to_string(),
                },
            },
        ]),
        None => MessageContent::Text(prompt),
    };

    ChatCompletionRequest {
        model: variant.model_id().to_string(),
        messages: vec![ChatMessage::system(SYSTEM_INSTRUCTION), ChatMessage::user(content)],
        max_tokens: MAX_TOKENS,
        temperature: TEMPERATURE,
    }
}
