//! Conexión al almacenamiento
//!
//! Construye el gateway del backend configurado. El gateway es propiedad
//! del `AppState`; no existe ningún handle global de conexión.

use std::sync::Arc;
use tracing::info;

use super::gateway::{DriverGateway, GatewayResult};
use super::postgres::PostgresGateway;
use super::sqlite::SqliteGateway;
use crate::config::{DatabaseConfig, StorageBackend};

/// Abrir el backend indicado por la configuración y verificar el schema
pub async fn connect(config: &DatabaseConfig) -> GatewayResult<Arc<dyn DriverGateway>> {
    info!(
        "🗄️ Conectando a {} ({})",
        config.backend,
        mask_database_url(&config.url)
    );

    let gateway: Arc<dyn DriverGateway> = match config.backend {
        StorageBackend::Sqlite => Arc::new(SqliteGateway::connect(config).await?),
        StorageBackend::Postgres => Arc::new(PostgresGateway::connect(config).await?),
    };

    info!("✅ Base de datos conectada");
    Ok(gateway)
}

/// Función helper para enmascarar las credenciales de la URL en logs
pub fn mask_database_url(url: &str) -> String {
    let Some(scheme_end) = url.find("://").map(|i| i + 3) else {
        return url.to_string();
    };
    match url[scheme_end..].rfind('@') {
        Some(at) => format!("{}***:***@{}", &url[..scheme_end], &url[scheme_end + at + 1..]),
        None => url.to_string(),
    }
}
