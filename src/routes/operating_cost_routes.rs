use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};

use crate::controllers::operating_cost_controller::OperatingCostController;
use crate::dto::common_dto::MessageResponse;
use crate::dto::operating_cost_dto::RecordOperatingCostRequest;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_operating_cost_router() -> Router<AppState> {
    Router::new().route("/:driver_id", post(record_operating_cost))
}

async fn record_operating_cost(
    State(state): State<AppState>,
    driver_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<RecordOperatingCostRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let Path(driver_id) = driver_id?;
    let Json(request) = payload?;
    let controller = OperatingCostController::new(state.gateway.clone());
    let response = controller.record(driver_id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}
