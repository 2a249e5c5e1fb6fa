use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::daily_record_controller::DailyRecordController;
use crate::dto::common_dto::MessageResponse;
use crate::dto::daily_record_dto::RecordDailyEntryRequest;
use crate::models::{DailyRecord, ProfitReport};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Montado en /api/registros
pub fn create_daily_record_router() -> Router<AppState> {
    Router::new().route("/:driver_id", get(list_daily_records).post(record_daily_entry))
}

/// Montado en /api/lucro-dia
pub fn create_profit_router() -> Router<AppState> {
    Router::new().route("/:driver_id/:date", get(profit_for_day))
}

async fn record_daily_entry(
    State(state): State<AppState>,
    driver_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<RecordDailyEntryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let Path(driver_id) = driver_id?;
    let Json(request) = payload?;
    let controller = DailyRecordController::new(state.gateway.clone());
    let response = controller.record(driver_id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_daily_records(
    State(state): State<AppState>,
    driver_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<DailyRecord>>, AppError> {
    let Path(driver_id) = driver_id?;
    let controller = DailyRecordController::new(state.gateway.clone());
    Ok(Json(controller.list(driver_id).await?))
}

async fn profit_for_day(
    State(state): State<AppState>,
    params: Result<Path<(i64, String)>, PathRejection>,
) -> Result<Json<ProfitReport>, AppError> {
    let Path((driver_id, date)) = params?;
    let controller = DailyRecordController::new(state.gateway.clone());
    Ok(Json(controller.profit_for_day(driver_id, &date).await?))
}
