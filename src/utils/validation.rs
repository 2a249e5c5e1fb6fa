//! Utilidades de validación
//!
//! Funciones helper para validación de datos de entrada y conversión de tipos
//! que el derive de `validator` no cubre.

use chrono::NaiveDate;
use validator::ValidationError;

use crate::utils::errors::{bad_request_error, AppResult};

/// Formato de fecha aceptado en cuerpos y rutas
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validar y convertir string a fecha
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Convertir una fecha recibida por la API, devolviendo 400 si no es válida
pub fn parse_date(value: &str) -> AppResult<NaiveDate> {
    validate_date(value)
        .map_err(|_| bad_request_error(&format!("Data inválida '{}', use o formato AAAA-MM-DD", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2024-01-15").is_ok());
        assert!(validate_date(" 2024-01-15 ").is_ok());
        assert!(validate_date("2024/01/15").is_err());
        assert!(validate_date("2024-02-30").is_err());
    }

    #[test]
    fn test_parse_date_maps_to_bad_request() {
        let date = parse_date("2024-05-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());

        let err = parse_date("ontem").unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    }
}
