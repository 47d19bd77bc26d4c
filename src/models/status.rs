// src/models/status.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Dado de referência: criado só pela migração, a API apenas lista.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub id: i32,
    pub name: String,
}
