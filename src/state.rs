//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. El gateway se inyecta al construirlo.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::database::DriverGateway;

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn DriverGateway>,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(gateway: Arc<dyn DriverGateway>, config: EnvironmentConfig) -> Self {
        Self { gateway, config }
    }
}
