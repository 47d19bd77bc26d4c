use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Cliente não encontrado")]
    ClientNotFound,

    #[error("Status não encontrado")]
    StatusNotFound,

    // A linha mudou entre o load e o save (concorrência otimista)
    #[error("Conflito de concorrência")]
    UpdateConflict,

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    /// Monta um erro de validação apontando um único campo.
    pub fn field_validation(field: &'static str, code: &'static str, message: &str) -> Self {
        let mut errors = validator::ValidationErrors::new();
        let mut error = validator::ValidationError::new(code);
        error.message = Some(message.to_string().into());
        errors.add(field, error);
        AppError::ValidationError(errors)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors.iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            // Falha de persistência genérica: 400 carregando a mensagem do banco.
            AppError::DatabaseError(e) => {
                tracing::warn!("Erro de banco de dados: {}", e);
                let body = Json(json!({ "error": format!("Erro de banco de dados: {}", e) }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::EmailAlreadyExists => (StatusCode::BAD_REQUEST, "Este e-mail já está em uso."),
            AppError::ClientNotFound => (StatusCode::NOT_FOUND, "Cliente não encontrado."),
            AppError::StatusNotFound => (StatusCode::BAD_REQUEST, "O status informado não existe."),
            AppError::UpdateConflict => (
                StatusCode::CONFLICT,
                "O registro foi modificado por outra requisição. Recarregue e tente novamente.",
            ),

            // Todos os outros erros viram 500.
            // O `tracing` vai logar a mensagem detalhada que `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.")
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapeia_variantes_para_os_status_http() {
        assert_eq!(
            AppError::ClientNotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::EmailAlreadyExists.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::StatusNotFound.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::UpdateConflict.into_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::DatabaseError(sqlx::Error::PoolClosed)
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InternalServerError(anyhow::anyhow!("boom"))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn erro_de_validacao_de_campo_vira_400() {
        let err = AppError::field_validation("statusId", "required_integer", "statusId é obrigatório");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
