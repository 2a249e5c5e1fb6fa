use std::sync::Arc;
use tracing::{debug, info};
use validator::Validate;

use crate::database::DriverGateway;
use crate::dto::common_dto::MessageResponse;
use crate::dto::daily_record_dto::RecordDailyEntryRequest;
use crate::models::{DailyRecord, ProfitReport};
use crate::services::compute_profit_report;
use crate::utils::errors::AppError;
use crate::utils::validation::parse_date;

pub struct DailyRecordController {
    gateway: Arc<dyn DriverGateway>,
}

impl DailyRecordController {
    pub fn new(gateway: Arc<dyn DriverGateway>) -> Self {
        Self { gateway }
    }

    pub async fn record(
        &self,
        driver_id: i64,
        request: RecordDailyEntryRequest,
    ) -> Result<MessageResponse, AppError> {
        request.validate()?;
        let record = request.into_new_record()?;

        self.gateway.record_daily_entry(driver_id, &record).await?;
        info!("📅 Registro {} salvo para motorista {}", record.date, driver_id);

        Ok(MessageResponse::new("Registro salvo com sucesso"))
    }

    pub async fn list(&self, driver_id: i64) -> Result<Vec<DailyRecord>, AppError> {
        Ok(self.gateway.list_daily_records(driver_id).await?)
    }

    /// Lucro del día: busca el registro y lo pasa por el calculador
    pub async fn profit_for_day(&self, driver_id: i64, date: &str) -> Result<ProfitReport, AppError> {
        let date = parse_date(date)?;
        let record = self.gateway.get_daily_record(driver_id, date).await?;

        let report = compute_profit_report(&record);
        debug!(
            "📊 Lucro motorista {} em {}: {} ({} / h)",
            driver_id, date, report.net_profit, report.profit_per_hour
        );
        Ok(report)
    }
}
