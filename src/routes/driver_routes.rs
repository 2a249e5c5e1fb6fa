use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::driver_controller::DriverController;
use crate::dto::common_dto::MessageResponse;
use crate::dto::driver_dto::CreateDriverRequest;
use crate::models::Driver;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_driver_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_drivers).post(create_driver))
        .route("/:id", get(get_driver))
}

async fn create_driver(
    State(state): State<AppState>,
    payload: Result<Json<CreateDriverRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let Json(request) = payload?;
    let controller = DriverController::new(state.gateway.clone());
    let response = controller.register(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_drivers(State(state): State<AppState>) -> Result<Json<Vec<Driver>>, AppError> {
    let controller = DriverController::new(state.gateway.clone());
    Ok(Json(controller.list().await?))
}

async fn get_driver(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Driver>, AppError> {
    let Path(id) = id?;
    let controller = DriverController::new(state.gateway.clone());
    Ok(Json(controller.get_by_id(id).await?))
}
