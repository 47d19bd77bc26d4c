// src/db/client_repo.rs

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::client::{Client, ClientPayload},
};

// O repositório de clientes, responsável por todas as interações com a tabela 'clients'
#[derive(Clone)]
pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lista todos os clientes, na ordem natural do banco.
    pub async fn list(&self) -> Result<Vec<Client>, AppError> {
        let clients = sqlx::query_as::<_, Client>("SELECT * FROM clients")
            .fetch_all(&self.pool)
            .await?;

        Ok(clients)
    }

    // Busca um cliente pelo seu ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Client>, AppError> {
        let client = sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(client)
    }

    /// Insere um novo cliente. O id e o created_at ficam por conta do banco;
    /// updated_at nasce nulo.
    pub async fn create(&self, payload: &ClientPayload, status_id: i32) -> Result<Client, AppError> {
        sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (
                first_name, last_name, email, phone, birth_date,
                document_type, document_number, address, city, status_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&payload.first_name)
        .bind(&payload.last_name)
        .bind(&payload.email)
        .bind(&payload.phone)
        .bind(payload.birth_date)
        .bind(&payload.document_type)
        .bind(&payload.document_number)
        .bind(&payload.address)
        .bind(&payload.city)
        .bind(status_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)
    }

    /// Atualiza todos os campos mutáveis do cliente e marca o updated_at.
    /// O UPDATE é guardado pelo updated_at lido no load: se outra requisição
    /// gravou no meio do caminho, nenhuma linha é afetada.
    pub async fn update(
        &self,
        id: i32,
        payload: &ClientPayload,
        status_id: i32,
        loaded_updated_at: Option<DateTime<Utc>>,
    ) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE clients
            SET first_name = $1, last_name = $2, email = $3, phone = $4,
                birth_date = $5, document_type = $6, document_number = $7,
                address = $8, city = $9, status_id = $10, updated_at = NOW()
            WHERE id = $11 AND updated_at IS NOT DISTINCT FROM $12
            "#,
        )
        .bind(&payload.first_name)
        .bind(&payload.last_name)
        .bind(&payload.email)
        .bind(&payload.phone)
        .bind(payload.birth_date)
        .bind(&payload.document_type)
        .bind(&payload.document_number)
        .bind(&payload.address)
        .bind(&payload.city)
        .bind(status_id)
        .bind(id)
        .bind(loaded_updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(result.rows_affected())
    }

    // Troca só o status (e o updated_at)
    pub async fn update_status(&self, id: i32, status_id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE clients SET status_id = $1, updated_at = NOW() WHERE id = $2")
            .bind(status_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;

        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

// Converte violações de constraint em erros mais amigáveis:
// e-mail duplicado e statusId que não existe na tabela de status.
fn map_write_error(e: sqlx::Error) -> AppError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return AppError::EmailAlreadyExists;
        }
        if db_err.is_foreign_key_violation() {
            return AppError::StatusNotFound;
        }
    }
    AppError::DatabaseError(e)
}
