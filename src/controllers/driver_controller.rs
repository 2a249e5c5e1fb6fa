use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::database::DriverGateway;
use crate::dto::common_dto::MessageResponse;
use crate::dto::driver_dto::CreateDriverRequest;
use crate::models::Driver;
use crate::utils::errors::AppError;

pub struct DriverController {
    gateway: Arc<dyn DriverGateway>,
}

impl DriverController {
    pub fn new(gateway: Arc<dyn DriverGateway>) -> Self {
        Self { gateway }
    }

    pub async fn register(&self, request: CreateDriverRequest) -> Result<MessageResponse, AppError> {
        // Validar campos requeridos
        request.validate()?;
        let new_driver = request
            .into_new_driver()
            .ok_or_else(|| AppError::BadRequest("Preencha todos os campos".to_string()))?;

        let id = self.gateway.create_driver(&new_driver).await?;
        info!("🚗 Motorista registrado: id={} modelo={}", id, new_driver.car_model);

        Ok(MessageResponse::with_id("Motorista cadastrado com sucesso", id))
    }

    pub async fn list(&self) -> Result<Vec<Driver>, AppError> {
        Ok(self.gateway.list_drivers().await?)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Driver, AppError> {
        Ok(self.gateway.get_driver(id).await?)
    }
}
