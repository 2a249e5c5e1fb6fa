//! Sistema de manejo de errores
//!
//! Este módulo define los errores de la capa HTTP y su conversión a
//! respuestas JSON con el código de estado apropiado.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::database::GatewayError;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Duplicate phone: {0}")]
    DuplicatePhone(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    erro: String,
    code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl AppError {
    /// Código de estado HTTP asociado al error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) | AppError::DuplicatePhone(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            AppError::Validation(e) => {
                warn!("⚠️ Validation error: {}", e);
                ErrorResponse {
                    erro: "Preencha todos os campos".to_string(),
                    code: "VALIDATION_ERROR",
                    details: Some(json!(e)),
                }
            }

            AppError::BadRequest(msg) => {
                warn!("⚠️ Bad request: {}", msg);
                ErrorResponse {
                    erro: msg,
                    code: "BAD_REQUEST",
                    details: None,
                }
            }

            AppError::DuplicatePhone(phone) => {
                warn!("⚠️ Teléfono duplicado: {}", phone);
                ErrorResponse {
                    erro: "Telefone já cadastrado".to_string(),
                    code: "DUPLICATE_PHONE",
                    details: None,
                }
            }

            AppError::NotFound(msg) => {
                warn!("🔍 Resource not found: {}", msg);
                ErrorResponse {
                    erro: msg,
                    code: "NOT_FOUND",
                    details: None,
                }
            }

            AppError::Storage(msg) => {
                error!("❌ Storage error: {}", msg);
                ErrorResponse {
                    erro: "Erro ao acessar o banco de dados".to_string(),
                    code: "STORAGE_ERROR",
                    details: None,
                }
            }

            AppError::ServiceUnavailable(msg) => {
                error!("❌ Service unavailable: {}", msg);
                ErrorResponse {
                    erro: msg,
                    code: "SERVICE_UNAVAILABLE",
                    details: None,
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::DuplicatePhone(phone) => AppError::DuplicatePhone(phone),
            GatewayError::NotFound { entity, .. } => AppError::NotFound(not_found_message(entity)),
            GatewayError::UnknownDriver(_) => AppError::NotFound(not_found_message("driver")),
            GatewayError::Storage(e) => AppError::Storage(e.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(format!("Corpo da requisição inválido: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(format!("Parâmetro inválido: {}", rejection.body_text()))
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

fn not_found_message(entity: &str) -> String {
    match entity {
        "driver" => "Motorista não encontrado".to_string(),
        "daily_record" => "Registro não encontrado".to_string(),
        other => format!("{} não encontrado", other),
    }
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::DuplicatePhone("11999990000".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("x".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Storage("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(bad_request_error("data").status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_gateway_error_conversion() {
        let err: AppError = GatewayError::UnknownDriver(42).into();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Motorista não encontrado"));

        let err: AppError = GatewayError::NotFound {
            entity: "daily_record",
            key: "1/2024-05-01".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Registro não encontrado"));

        let err: AppError = GatewayError::Storage(sqlx::Error::PoolTimedOut).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
