// src/handlers/status.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{common::error::AppError, config::AppState};

// GET /api/status
pub async fn list_statuses(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let statuses = app_state.status_service.list_statuses().await?;

    Ok((StatusCode::OK, Json(statuses)))
}
