//! Configuración de base de datos
//!
//! Este módulo decide el backend de almacenamiento (SQLite embebido o
//! PostgreSQL) a partir de la URL de conexión y crea los pools de SQLx.

use anyhow::{bail, Result};
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::environment::env_parse;

/// URL usada cuando no se define DATABASE_URL
pub const DEFAULT_DATABASE_URL: &str = "sqlite://motoristas.db";

/// Backend de almacenamiento activo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Sqlite,
    Postgres,
}

impl StorageBackend {
    /// Deducir el backend a partir del esquema de la URL
    pub fn from_url(url: &str) -> Self {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            StorageBackend::Postgres
        } else {
            StorageBackend::Sqlite
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Sqlite => "sqlite",
            StorageBackend::Postgres => "postgres",
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StorageBackend::Sqlite),
            "postgres" | "postgresql" | "pg" => Ok(StorageBackend::Postgres),
            other => Err(format!("unknown storage backend '{}'", other)),
        }
    }
}

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub backend: StorageBackend,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Option<Duration>,
    pub max_lifetime: Option<Duration>,
}

impl DatabaseConfig {
    /// Configuración con valores por defecto para una URL dada
    pub fn from_url(url: &str) -> Self {
        let backend = StorageBackend::from_url(url);
        let url = normalize_url(url, backend);

        Self {
            url,
            backend,
            max_connections: match backend {
                StorageBackend::Sqlite => 5,
                StorageBackend::Postgres => 20,
            },
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Some(Duration::from_secs(300)),
            max_lifetime: Some(Duration::from_secs(3600)),
        }
    }

    /// Cargar la configuración desde las variables de entorno
    pub fn from_env() -> Result<Self> {
        let url = std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let mut config = Self::from_url(&url);

        if let Ok(raw) = std::env::var("STORAGE_BACKEND") {
            let backend: StorageBackend = raw.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            if backend != config.backend {
                bail!(
                    "STORAGE_BACKEND={} does not match DATABASE_URL scheme ({})",
                    backend,
                    config.backend
                );
            }
        }

        config.max_connections = env_parse("DB_MAX_CONNECTIONS", config.max_connections)?;
        config.min_connections = env_parse("DB_MIN_CONNECTIONS", config.min_connections)?;
        config.connect_timeout =
            Duration::from_secs(env_parse("DB_CONNECT_TIMEOUT_SECS", config.connect_timeout.as_secs())?);

        if config.min_connections > config.max_connections {
            bail!(
                "DB_MIN_CONNECTIONS ({}) is greater than DB_MAX_CONNECTIONS ({})",
                config.min_connections,
                config.max_connections
            );
        }

        Ok(config)
    }

    /// SQLite en memoria: una sola conexión que nunca se recicla,
    /// si se cerrara la base desaparecería con ella
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            backend: StorageBackend::Sqlite,
            max_connections: 1,
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            idle_timeout: None,
            max_lifetime: None,
        }
    }

    /// Crear el pool de conexiones SQLite
    pub async fn create_sqlite_pool(&self) -> Result<SqlitePool, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&self.url)?
            .create_if_missing(true)
            .foreign_keys(true);

        SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.connect_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
            .connect_with(options)
            .await
    }

    /// Crear el pool de conexiones PostgreSQL
    pub async fn create_pg_pool(&self) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.connect_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
            .connect(&self.url)
            .await
    }
}

/// Una ruta de archivo sin esquema se interpreta como base SQLite
fn normalize_url(url: &str, backend: StorageBackend) -> String {
    match backend {
        StorageBackend::Sqlite if !url.starts_with("sqlite:") => format!("sqlite://{}", url),
        _ => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_from_url() {
        assert_eq!(
            StorageBackend::from_url("postgres://user:pw@localhost/motoristas"),
            StorageBackend::Postgres
        );
        assert_eq!(
            StorageBackend::from_url("postgresql://localhost/motoristas"),
            StorageBackend::Postgres
        );
        assert_eq!(StorageBackend::from_url("sqlite://motoristas.db"), StorageBackend::Sqlite);
        assert_eq!(StorageBackend::from_url("motoristas.db"), StorageBackend::Sqlite);
    }

    #[test]
    fn test_backend_from_str() {
        assert_eq!("SQLite".parse::<StorageBackend>(), Ok(StorageBackend::Sqlite));
        assert_eq!("pg".parse::<StorageBackend>(), Ok(StorageBackend::Postgres));
        assert!("mysql".parse::<StorageBackend>().is_err());
    }

    #[test]
    fn test_from_url_defaults() {
        let config = DatabaseConfig::from_url("data/motoristas.db");
        assert_eq!(config.url, "sqlite://data/motoristas.db");
        assert_eq!(config.backend, StorageBackend::Sqlite);
        assert_eq!(config.max_connections, 5);

        let config = DatabaseConfig::from_url("postgres://localhost/motoristas");
        assert_eq!(config.url, "postgres://localhost/motoristas");
        assert_eq!(config.max_connections, 20);
    }

    #[test]
    fn test_in_memory_is_single_connection() {
        let config = DatabaseConfig::in_memory();
        assert_eq!(config.max_connections, 1);
        assert!(config.idle_timeout.is_none());
        assert!(config.max_lifetime.is_none());
    }
}
