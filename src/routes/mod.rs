//! Routers HTTP
//!
//! `create_router` arma la aplicación completa; lo usan `main` y los tests.

pub mod daily_record_routes;
pub mod driver_routes;
pub mod operating_cost_routes;

use axum::{extract::State, routing::get, Json, Router};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::dto::common_dto::HealthResponse;
use crate::middleware::cors::cors_middleware;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_router(state: AppState) -> Router {
    let cors = cors_middleware(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health))
        .nest("/api/motoristas", driver_routes::create_driver_router())
        .nest("/api/custos", operating_cost_routes::create_operating_cost_router())
        .nest("/api/registros", daily_record_routes::create_daily_record_router())
        .nest("/api/lucro-dia", daily_record_routes::create_profit_router())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check con ida y vuelta a la base
async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    state
        .gateway
        .ping()
        .await
        .map_err(|e| AppError::ServiceUnavailable(format!("Banco de dados indisponível: {}", e)))?;

    Ok(Json(HealthResponse {
        status: "ok",
        backend: state.gateway.backend().as_str(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}
