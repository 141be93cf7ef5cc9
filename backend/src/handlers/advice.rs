//! HTTP handler for the advice composer

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::error::AppResult;
use crate::models::{AdviceRequest, AdviceResponse};
use crate::services::AdviceService;
use crate::AppState;

/// Compose golf advice from the collected shot context
pub async fn get_golf_advice(
    State(state): State<AppState>,
    payload: Result<Json<AdviceRequest>, JsonRejection>,
) -> AppResult<Json<AdviceResponse>> {
    let Json(request) = payload?;

    let service = AdviceService::new(&state.config.openai, state.http.clone());
    let advice = service.compose_advice(&request).await?;
    Ok(Json(advice))
}
