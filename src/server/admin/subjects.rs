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
use crate::server::dto::{CreateSubjectRequest, UpdateSubjectRequest};
use crate::server::response::{ApiError, ApiResponse, StoreOptionExt, StoreResultExt};
use crate::server::validation::{validate_color, validate_subject_name};
use crate::types::{DEFAULT_SUBJECT_COLOR, Subject};

pub async fn create_subject(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateSubjectRequest>,
) -> impl IntoResponse {
    let name = validate_subject_name(&req.name)?;
    let color = validate_color(req.color.as_deref().unwrap_or(DEFAULT_SUBJECT_COLOR))?;

    let now = Utc::now();
    let subject = Subject {
        id: Uuid::new_v4().to_string(),
        name,
        icon: req.icon.unwrap_or_default(),
        color,
        created_at: now,
        updated_at: now,
    };

    state
        .store
        .create_subject(&subject)
        .api_err("Failed to create subject")?;

    Ok::<_, ApiError>((StatusCode::CREATED, Json(ApiResponse::success(subject))))
}

pub async fn list_subjects(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let subjects = state
        .store
        .list_subjects()
        .api_err("Failed to list subjects")?;

    Ok::<_, ApiError>(Json(ApiResponse::success(subjects)))
}

pub async fn get_subject(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let subject = state
        .store
        .get_subject(&id)
        .api_err("Failed to get subject")?
        .or_not_found("Subject not found")?;

    Ok::<_, ApiError>(Json(ApiResponse::success(subject)))
}

pub async fn update_subject(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateSubjectRequest>,
) -> impl IntoResponse {
    let mut subject = state
        .store
        .get_subject(&id)
        .api_err("Failed to get subject")?
        .or_not_found("Subject not found")?;

    if let Some(name) = req.name {
        subject.name = validate_subject_name(&name)?;
    }
    if let Some(icon) = req.icon {
        subject.icon = icon;
    }
    if let Some(color) = req.color {
        subject.color = validate_color(&color)?;
    }
    subject.updated_at = Utc::now();

    state
        .store
        .update_subject(&subject)
        .api_err("Failed to update subject")?;

    Ok::<_, ApiError>(Json(ApiResponse::success(subject)))
}

pub async fn delete_subject(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let deleted = state
        .store
        .delete_subject(&id)
        .api_err("Failed to delete subject")?;

    if !deleted {
        return Err(ApiError::not_found("Subject not found"));
    }

    Ok(StatusCode::NO_CONTENT)
}
