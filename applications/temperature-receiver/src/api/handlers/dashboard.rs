use axum::{extract::State, response::Html};

use crate::api::dashboard::render;
use crate::error::Result;
use crate::services::ReadingService;

/// GET /
pub async fn index(State(service): State<ReadingService>) -> Result<Html<String>> {
    let dashboard = service.dashboard().await?;
    Ok(Html(render(&dashboard)))
}
