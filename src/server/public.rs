//! Reads open to every caller, signed in or not.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};

use crate::server::AppState;
use crate::server::response::{ApiError, ApiResponse, StoreOptionExt, StoreResultExt};
use crate::types::group_by_day;

pub fn public_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/classes", get(list_classes))
        .route("/classes/{id}/schedule", get(class_schedule))
}

pub async fn list_classes(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let classes = state
        .store
        .list_classes()
        .api_err("Failed to list classes")?;

    Ok::<_, ApiError>(Json(ApiResponse::success(classes)))
}

pub async fn class_schedule(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    state
        .store
        .get_class(&id)
        .api_err("Failed to get class")?
        .or_not_found("Class not found")?;

    let entries = state
        .store
        .list_class_schedule(&id)
        .api_err("Failed to load schedule")?;

    Ok::<_, ApiError>(Json(ApiResponse::success(group_by_day(entries))))
}
