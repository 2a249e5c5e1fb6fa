//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno del servidor. Todas las
//! variables tienen un valor por defecto; un valor presente pero inválido es
//! un error de arranque.

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use tracing::Level;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub log_level: Level,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 5000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            log_level: Level::DEBUG,
        }
    }
}

impl EnvironmentConfig {
    /// Cargar la configuración desde las variables de entorno
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            port: env_parse("PORT", defaults.port)?,
            host: env::var("HOST").unwrap_or(defaults.host),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_default(),
            log_level: env_parse("LOG_LEVEL", defaults.log_level)?,
        })
    }

    /// Obtener la dirección de escucha del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Leer y convertir una variable de entorno, usando `default` si no existe
pub(crate) fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("{}", e))
            .with_context(|| format!("{} has an invalid value: '{}'", key, raw)),
        _ => Ok(default),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EnvironmentConfig::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.environment, "development");
        assert_eq!(config.server_url(), "0.0.0.0:5000");
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins("http://localhost:3000, https://app.example.com,,"),
            vec!["http://localhost:3000", "https://app.example.com"]
        );
        assert!(parse_origins("  ").is_empty());
    }

    #[test]
    fn test_env_parse_missing_and_invalid() {
        assert_eq!(env_parse("DRIVER_PROFIT_TEST_UNSET_VAR", 7u32).unwrap(), 7);

        env::set_var("DRIVER_PROFIT_TEST_BAD_PORT", "not-a-port");
        assert!(env_parse::<u16>("DRIVER_PROFIT_TEST_BAD_PORT", 5000).is_err());
        env::remove_var("DRIVER_PROFIT_TEST_BAD_PORT");
    }
}
