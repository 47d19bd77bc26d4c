// src/services/client_service.rs

use crate::{
    common::error::AppError,
    db::ClientRepository,
    models::client::{Client, ClientPayload, DEFAULT_STATUS_ID},
};

#[derive(Clone)]
pub struct ClientService {
    repo: ClientRepository,
}

impl ClientService {
    pub fn new(repo: ClientRepository) -> Self {
        Self { repo }
    }

    pub async fn list_clients(&self) -> Result<Vec<Client>, AppError> {
        self.repo.list().await
    }

    pub async fn get_client(&self, id: i32) -> Result<Client, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::ClientNotFound)
    }

    pub async fn create_client(&self, payload: &ClientPayload) -> Result<Client, AppError> {
        let status_id = Self::status_for_create(payload);
        self.repo.create(payload, status_id).await
    }

    /// Atualiza um cliente existente com concorrência otimista:
    /// se a linha mudou entre o load e o save, devolve conflito.
    pub async fn update_client(&self, id: i32, payload: &ClientPayload) -> Result<(), AppError> {
        let existing = self.get_client(id).await?;

        let status_id = Self::status_for_update(payload, &existing);
        let rows = self
            .repo
            .update(id, payload, status_id, existing.updated_at)
            .await?;

        if rows == 0 {
            return Err(AppError::UpdateConflict);
        }

        Ok(())
    }

    pub async fn change_status(&self, id: i32, status_id: i32) -> Result<(), AppError> {
        // 404 antes de tentar gravar
        self.get_client(id).await?;

        let rows = self.repo.update_status(id, status_id).await?;
        if rows == 0 {
            // A linha sumiu entre o load e o save
            return Err(AppError::ClientNotFound);
        }

        Ok(())
    }

    pub async fn delete_client(&self, id: i32) -> Result<(), AppError> {
        self.get_client(id).await?;

        let rows = self.repo.delete(id).await?;
        if rows == 0 {
            return Err(AppError::ClientNotFound);
        }

        Ok(())
    }

    // Sem statusId no payload, um cliente novo entra como "No Contactado".
    fn status_for_create(payload: &ClientPayload) -> i32 {
        payload.status_id.unwrap_or(DEFAULT_STATUS_ID)
    }

    // No update, statusId ausente mantém o status atual da linha.
    fn status_for_update(payload: &ClientPayload, existing: &Client) -> i32 {
        payload.status_id.unwrap_or(existing.status_id)
    }
}
