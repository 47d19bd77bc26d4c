// src/db/status_repo.rs

use sqlx::PgPool;

use crate::{common::error::AppError, models::status::Status};

// Repositório da tabela de referência 'statuses'. Só leitura:
// as linhas são semeadas pela migração e nunca mudam pela API.
#[derive(Clone)]
pub struct StatusRepository {
    pool: PgPool,
}

impl StatusRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Status>, AppError> {
        let statuses = sqlx::query_as::<_, Status>("SELECT * FROM statuses")
            .fetch_all(&self.pool)
            .await?;

        Ok(statuses)
    }
}
