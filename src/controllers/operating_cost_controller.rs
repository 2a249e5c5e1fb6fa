use std::sync::Arc;
use tracing::info;

use crate::database::DriverGateway;
use crate::dto::common_dto::MessageResponse;
use crate::dto::operating_cost_dto::RecordOperatingCostRequest;
use crate::models::OperatingCost;
use crate::utils::errors::AppError;

pub struct OperatingCostController {
    gateway: Arc<dyn DriverGateway>,
}

impl OperatingCostController {
    pub fn new(gateway: Arc<dyn DriverGateway>) -> Self {
        Self { gateway }
    }

    pub async fn record(
        &self,
        driver_id: i64,
        request: RecordOperatingCostRequest,
    ) -> Result<MessageResponse, AppError> {
        let cost = OperatingCost::from(request);
        self.gateway.record_operating_cost(driver_id, &cost).await?;
        info!("💰 Custos registrados para motorista {}", driver_id);

        Ok(MessageResponse::new("Custos registrados com sucesso"))
    }
}
