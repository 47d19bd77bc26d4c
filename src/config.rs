// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{ClientRepository, StatusRepository},
    services::{ClientService, StatusService},
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub client_service: ClientService,
    pub status_service: StatusService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let client_service = ClientService::new(ClientRepository::new(db_pool.clone()));
        let status_service = StatusService::new(StatusRepository::new(db_pool.clone()));

        Ok(Self {
            db_pool,
            client_service,
            status_service,
        })
    }
}
