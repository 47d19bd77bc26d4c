//src/main.rs

use axum::{
    routing::{get, put},
    Router,
};
use tokio::net::TcpListener;

// Declaração dos nossos módulos
mod common;
mod config;
mod db;
mod handlers;
mod models;
mod services;

use crate::config::AppState;

#[tokio::main]
async fn main() {
    // Inicializa o logger antes de qualquer outra coisa.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização:
    // cria as tabelas e semeia os dois status fixos antes de aceitar tráfego.
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Rotas de clientes
    let client_routes = Router::new()
        .route("/"
               ,get(handlers::client::list_clients)
               .post(handlers::client::create_client)
        )
        .route("/{id}"
               ,get(handlers::client::get_client)
               .put(handlers::client::update_client)
               .delete(handlers::client::delete_client)
        )
        .route("/{id}/ChangeStatus"
               ,put(handlers::client::change_client_status)
        );

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/status", get(handlers::status::list_statuses))
        .nest("/api/client", client_routes)
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
