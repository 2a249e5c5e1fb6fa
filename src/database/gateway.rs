//! Gateway de persistencia
//!
//! Contrato único de almacenamiento para motoristas, costos operativos y
//! registros diarios. Cada backend (SQLite, PostgreSQL) lo implementa; el
//! resto de la aplicación sólo conoce `Arc<dyn DriverGateway>`.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::error::ErrorKind;
use thiserror::Error;

use crate::config::StorageBackend;
use crate::models::{DailyRecord, Driver, NewDailyRecord, NewDriver, OperatingCost};

/// Errores de la capa de persistencia
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("phone '{0}' is already registered")]
    DuplicatePhone(String),

    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("driver {0} does not exist")]
    UnknownDriver(i64),

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

#[async_trait]
pub trait DriverGateway: Send + Sync {
    /// Backend que implementa este gateway
    fn backend(&self) -> StorageBackend;

    /// Ida y vuelta trivial contra la base, usado por /health
    async fn ping(&self) -> GatewayResult<()>;

    /// Registra un motorista y devuelve su id generado.
    ///
    /// Falla con `DuplicatePhone` si el teléfono ya existe.
    async fn create_driver(&self, driver: &NewDriver) -> GatewayResult<i64>;

    /// Motoristas del más reciente al más antiguo
    async fn list_drivers(&self) -> GatewayResult<Vec<Driver>>;

    async fn get_driver(&self, id: i64) -> GatewayResult<Driver>;

    /// Inserta una fila de costos; `UnknownDriver` si el motorista no existe
    async fn record_operating_cost(&self, driver_id: i64, cost: &OperatingCost) -> GatewayResult<()>;

    /// Inserta un registro diario; `UnknownDriver` si el motorista no existe
    async fn record_daily_entry(&self, driver_id: i64, record: &NewDailyRecord) -> GatewayResult<()>;

    /// Registros del motorista, fecha descendente
    async fn list_daily_records(&self, driver_id: i64) -> GatewayResult<Vec<DailyRecord>>;

    /// Registro de un día. Con varias filas para la misma fecha gana la
    /// insertada más recientemente.
    async fn get_daily_record(&self, driver_id: i64, date: NaiveDate) -> GatewayResult<DailyRecord>;
}

/// Traducir el error de un INSERT en motoristas
pub(crate) fn map_driver_insert_error(err: sqlx::Error, phone: &str) -> GatewayError {
    match &err {
        sqlx::Error::Database(db) if matches!(db.kind(), ErrorKind::UniqueViolation) => {
            GatewayError::DuplicatePhone(phone.to_string())
        }
        _ => GatewayError::Storage(err),
    }
}

/// Traducir el error de un INSERT que referencia a un motorista
pub(crate) fn map_child_insert_error(err: sqlx::Error, driver_id: i64) -> GatewayError {
    match &err {
        sqlx::Error::Database(db) if matches!(db.kind(), ErrorKind::ForeignKeyViolation) => {
            GatewayError::UnknownDriver(driver_id)
        }
        _ => GatewayError::Storage(err),
    }
}

pub(crate) fn driver_not_found(id: i64) -> GatewayError {
    GatewayError::NotFound {
        entity: "driver",
        key: id.to_string(),
    }
}

pub(crate) fn daily_record_not_found(driver_id: i64, date: NaiveDate) -> GatewayError {
    GatewayError::NotFound {
        entity: "daily_record",
        key: format!("{}/{}", driver_id, date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(driver_not_found(7).to_string(), "driver not found: 7");
        assert_eq!(
            daily_record_not_found(3, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()).to_string(),
            "daily_record not found: 3/2024-05-01"
        );
        assert_eq!(
            GatewayError::DuplicatePhone("11988887777".to_string()).to_string(),
            "phone '11988887777' is already registered"
        );
    }

    #[test]
    fn test_non_database_errors_are_storage() {
        assert!(matches!(
            map_driver_insert_error(sqlx::Error::PoolTimedOut, "1"),
            GatewayError::Storage(_)
        ));
        assert!(matches!(
            map_child_insert_error(sqlx::Error::RowNotFound, 1),
            GatewayError::Storage(_)
        ));
    }
}
