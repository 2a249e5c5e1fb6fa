use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use dotenvy::dotenv;

use driver_profit_backend::config::{DatabaseConfig, EnvironmentConfig};
use driver_profit_backend::database;
use driver_profit_backend::routes::create_router;
use driver_profit_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚕 Driver Profit Backend - custos e lucro de motoristas");
    info!("================================================");
    info!("🌍 Entorno: {}", config.environment);

    // Inicializar base de datos
    let db_config = DatabaseConfig::from_env()?;
    let gateway = match database::connect(&db_config).await {
        Ok(gateway) => gateway,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let app = create_router(AppState::new(gateway, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🚗 Motoristas:");
    info!("   POST /api/motoristas - Cadastrar motorista");
    info!("   GET  /api/motoristas - Listar motoristas");
    info!("   GET  /api/motoristas/:id - Obter motorista");
    info!("💰 Custos:");
    info!("   POST /api/custos/:motorista_id - Registrar custos operacionais");
    info!("📅 Registros diários:");
    info!("   POST /api/registros/:motorista_id - Registrar dia");
    info!("   GET  /api/registros/:motorista_id - Histórico de registros");
    info!("   GET  /api/lucro-dia/:motorista_id/:data - Lucro do dia");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
