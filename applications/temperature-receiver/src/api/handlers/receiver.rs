use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::StatusResponse;
use crate::services::readings::{ReadingService, NO_PAYLOAD};

/// POST /api/receiver
/// Accepts `{"temperature": <number>}` from a sensor and stores it
pub async fn receive(
    State(service): State<ReadingService>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<StatusResponse>> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!("Unusable request body: {}", rejection.body_text());
        AppError::Validation(NO_PAYLOAD.to_string())
    })?;

    service.ingest(&payload).await?;

    Ok(Json(StatusResponse::success("Data received")))
}
