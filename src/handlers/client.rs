// src/handlers/client.rs

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::client::{ChangeStatusPayload, ClientPayload},
};

// GET /api/client
pub async fn list_clients(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let clients = app_state.client_service.list_clients().await?;

    Ok((StatusCode::OK, Json(clients)))
}

// GET /api/client/{id}
pub async fn get_client(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let client = app_state.client_service.get_client(id).await?;

    Ok((StatusCode::OK, Json(client)))
}

// POST /api/client
pub async fn create_client(
    State(app_state): State<AppState>,
    Json(payload): Json<ClientPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let client = app_state.client_service.create_client(&payload).await?;

    // Location aponta para o GET por id do recurso recém-criado
    let location = format!("/api/client/{}", client.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(client),
    ))
}

// PUT /api/client/{id}
pub async fn update_client(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ClientPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    app_state.client_service.update_client(id, &payload).await?;

    Ok(StatusCode::NO_CONTENT)
}

// PUT /api/client/{id}/ChangeStatus
pub async fn change_client_status(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ChangeStatusPayload>,
) -> Result<impl IntoResponse, AppError> {
    // Valida o payload antes de tocar no banco
    let status_id = payload.status_id()?;

    app_state.client_service.change_status(id, status_id).await?;

    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Status atualizado com sucesso." })),
    ))
}

// DELETE /api/client/{id}
pub async fn delete_client(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.client_service.delete_client(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
