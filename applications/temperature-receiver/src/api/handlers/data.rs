use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::MeasurementsResponse;
use crate::services::ReadingService;

/// GET /api/data
/// Full reading history, newest first. Polled by the dashboard.
pub async fn list_measurements(
    State(service): State<ReadingService>,
) -> Result<Json<MeasurementsResponse>> {
    let readings = service.history().await?;
    Ok(Json(MeasurementsResponse::success(readings)))
}
