// src/models/client.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use crate::common::error::AppError;

/// Status de um cliente recém-cadastrado quando o payload não informa nenhum
/// ("No Contactado").
pub const DEFAULT_STATUS_ID: i32 = 2;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: i32,

    pub first_name: String,
    pub last_name: String,

    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,

    pub document_type: Option<String>,
    pub document_number: String,

    pub address: Option<String>,
    pub city: Option<String>,

    // FK para a tabela de status
    pub status_id: i32,

    // created_at nunca muda depois do INSERT; updated_at só existe
    // depois da primeira alteração.
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

// Payload de criação e de atualização.
// O id nunca vem daqui: quem manda é o banco (create) ou a rota (update).
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClientPayload {
    // Os campos obrigatórios aceitam ausência na desserialização (viram "")
    // para que a falta deles saia como erro de validação, não como 422.
    #[serde(default)]
    #[validate(custom(function = not_blank), length(max = 50, message = "máximo de 50 caracteres"))]
    pub first_name: String,

    #[serde(default)]
    #[validate(custom(function = not_blank), length(max = 50, message = "máximo de 50 caracteres"))]
    pub last_name: String,

    #[validate(email(message = "e-mail inválido"), length(max = 100, message = "máximo de 100 caracteres"))]
    pub email: Option<String>,

    #[validate(length(max = 20, message = "máximo de 20 caracteres"))]
    pub phone: Option<String>,

    pub birth_date: Option<NaiveDate>,

    #[validate(length(max = 20, message = "máximo de 20 caracteres"))]
    pub document_type: Option<String>,

    #[serde(default)]
    #[validate(custom(function = not_blank), length(max = 30, message = "máximo de 30 caracteres"))]
    pub document_number: String,

    #[validate(length(max = 200, message = "máximo de 200 caracteres"))]
    pub address: Option<String>,

    #[validate(length(max = 50, message = "máximo de 50 caracteres"))]
    pub city: Option<String>,

    // Opcional: na criação cai no DEFAULT_STATUS_ID,
    // na atualização mantém o status atual.
    pub status_id: Option<i32>,
}

// Campos obrigatórios não podem ser só espaços em branco.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some("não pode ficar em branco".into());
        return Err(error);
    }
    Ok(())
}

/// Payload do ChangeStatus: exatamente um campo, validado explicitamente.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeStatusPayload {
    // Chega como JSON cru para podermos rejeitar valores não inteiros
    // com um erro de validação em vez de uma falha de desserialização.
    pub status_id: Option<Value>,
}

impl ChangeStatusPayload {
    /// Extrai o statusId, exigindo que ele exista e seja um inteiro.
    pub fn status_id(&self) -> Result<i32, AppError> {
        self.status_id
            .as_ref()
            .and_then(Value::as_i64)
            .and_then(|v| i32::try_from(v).ok())
            .ok_or_else(|| {
                AppError::field_validation(
                    "statusId",
                    "required_integer",
                    "statusId é obrigatório e precisa ser um inteiro",
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> ClientPayload {
        serde_json::from_value(json!({
            "firstName": "Maria",
            "lastName": "Silva",
            "documentNumber": "12345678900"
        }))
        .unwrap()
    }

    #[test]
    fn aceita_payload_minimo_valido() {
        assert!(valid_payload().validate().is_ok());
    }

    #[test]
    fn rejeita_primeiro_nome_em_branco() {
        let mut payload = valid_payload();
        payload.first_name = "   ".to_string();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn rejeita_sobrenome_em_branco() {
        let mut payload = valid_payload();
        payload.last_name = String::new();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn campo_obrigatorio_ausente_desserializa_e_falha_na_validacao() {
        // A ausência não pode morrer na desserialização: precisa chegar
        // à validação e sair como erro apontando o campo.
        for missing in ["firstName", "lastName", "documentNumber"] {
            let mut value = json!({
                "firstName": "Maria",
                "lastName": "Silva",
                "documentNumber": "12345678900"
            });
            value.as_object_mut().unwrap().remove(missing);

            let payload: ClientPayload = serde_json::from_value(value).unwrap();
            let errors = payload.validate().unwrap_err();
            let fields: Vec<String> = errors
                .field_errors()
                .keys()
                .map(|k| k.replace('_', "").to_lowercase())
                .collect();
            assert_eq!(
                fields,
                vec![missing.to_lowercase()],
                "payload sem {} deveria falhar na validação apontando o campo",
                missing
            );
        }
    }

    #[test]
    fn rejeita_documento_em_branco() {
        let mut payload = valid_payload();
        payload.document_number = " ".to_string();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn rejeita_nome_acima_de_50_caracteres() {
        let mut payload = valid_payload();
        payload.first_name = "a".repeat(51);
        assert!(payload.validate().is_err());
    }

    #[test]
    fn rejeita_email_invalido() {
        let mut payload = valid_payload();
        payload.email = Some("nao-e-um-email".to_string());
        assert!(payload.validate().is_err());
    }

    #[test]
    fn aceita_email_ausente() {
        let payload = valid_payload();
        assert!(payload.email.is_none());
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn change_status_exige_o_campo() {
        let payload: ChangeStatusPayload = serde_json::from_value(json!({})).unwrap();
        assert!(payload.status_id().is_err());
    }

    #[test]
    fn change_status_rejeita_valor_nao_inteiro() {
        let payload: ChangeStatusPayload =
            serde_json::from_value(json!({ "statusId": "dois" })).unwrap();
        assert!(payload.status_id().is_err());

        let payload: ChangeStatusPayload =
            serde_json::from_value(json!({ "statusId": 2.5 })).unwrap();
        assert!(payload.status_id().is_err());

        let payload: ChangeStatusPayload =
            serde_json::from_value(json!({ "statusId": null })).unwrap();
        assert!(payload.status_id().is_err());
    }

    #[test]
    fn change_status_aceita_inteiro() {
        let payload: ChangeStatusPayload =
            serde_json::from_value(json!({ "statusId": 2 })).unwrap();
        assert_eq!(payload.status_id().unwrap(), 2);
    }

    #[test]
    fn serializa_cliente_em_camel_case() {
        let client = Client {
            id: 1,
            first_name: "Maria".to_string(),
            last_name: "Silva".to_string(),
            email: None,
            phone: None,
            birth_date: None,
            document_type: None,
            document_number: "12345678900".to_string(),
            address: None,
            city: None,
            status_id: DEFAULT_STATUS_ID,
            created_at: Utc::now(),
            updated_at: None,
        };

        let value = serde_json::to_value(&client).unwrap();
        assert_eq!(value["firstName"], "Maria");
        assert_eq!(value["documentNumber"], "12345678900");
        assert_eq!(value["statusId"], DEFAULT_STATUS_ID);
        assert!(value["updatedAt"].is_null());
    }
}
