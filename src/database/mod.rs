//! Módulo de base de datos
//!
//! Gateway de persistencia con dos backends intercambiables: SQLite y
//! PostgreSQL.

pub mod connection;
pub mod gateway;
pub mod postgres;
pub mod schema;
pub mod sqlite;

pub use connection::connect;
pub use gateway::{DriverGateway, GatewayError, GatewayResult};
pub use postgres::PostgresGateway;
pub use sqlite::SqliteGateway;
