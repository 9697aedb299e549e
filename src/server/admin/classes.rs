use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use uuid::Uuid;

use crate::auth::RequireAdmin;
use crate::server::AppState;
use crate::server::dto::{CreateClassRequest, UpdateClassRequest};
use crate::server::response::{ApiError, ApiResponse, StoreOptionExt, StoreResultExt};
use crate::server::validation::{normalize_description, validate_class_name};
use crate::types::Class;

pub async fn create_class(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateClassRequest>,
) -> impl IntoResponse {
    let name = validate_class_name(&req.name)?;
    let description = normalize_description(req.description)?;

    let now = Utc::now();
    let class = Class {
        id: Uuid::new_v4().to_string(),
        name,
        description,
        created_at: now,
        updated_at: now,
    };

    state
        .store
        .create_class(&class)
        .api_err("Failed to create class")?;

    Ok::<_, ApiError>((StatusCode::CREATED, Json(ApiResponse::success(class))))
}

pub async fn list_classes(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let classes = state
        .store
        .list_classes()
        .api_err("Failed to list classes")?;

    Ok::<_, ApiError>(Json(ApiResponse::success(classes)))
}

pub async fn get_class(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let class = state
        .store
        .get_class(&id)
        .api_err("Failed to get class")?
        .or_not_found("Class not found")?;

    Ok::<_, ApiError>(Json(ApiResponse::success(class)))
}

pub async fn update_class(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateClassRequest>,
) -> impl IntoResponse {
    let mut class = state
        .store
        .get_class(&id)
        .api_err("Failed to get class")?
        .or_not_found("Class not found")?;

    if let Some(name) = req.name {
        class.name = validate_class_name(&name)?;
    }
    if req.description.is_some() {
        class.description = normalize_description(req.description)?;
    }
    class.updated_at = Utc::now();

    state
        .store
        .update_class(&class)
        .api_err("Failed to update class")?;

    Ok::<_, ApiError>(Json(ApiResponse::success(class)))
}

pub async fn delete_class(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let deleted = state
        .store
        .delete_class(&id)
        .api_err("Failed to delete class")?;

    if !deleted {
        return Err(ApiError::not_found("Class not found"));
    }

    tracing::info!(class_id = %id, "deleted class and its schedule");

    Ok(StatusCode::NO_CONTENT)
}
