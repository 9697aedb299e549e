use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};

use crate::auth::RequireAdmin;
use crate::server::AppState;
use crate::server::response::{ApiError, ApiResponse, StoreResultExt};

pub async fn get_overview(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let overview = state
        .store
        .overview()
        .api_err("Failed to load overview")?;

    Ok::<_, ApiError>(Json(ApiResponse::success(overview)))
}
