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
use crate::error::Error;
use crate::server::AppState;
use crate::server::dto::{CreateTeacherRequest, UpdateTeacherRequest};
use crate::server::response::{ApiError, ApiResponse, StoreResultExt};
use crate::server::validation::{validate_email, validate_full_name, validate_password};
use crate::store::Store;
use crate::types::{Profile, Role, TeacherWithSubjects};

fn load_teacher(store: &dyn Store, id: &str) -> Result<Profile, ApiError> {
    store
        .get_profile(id)
        .api_err("Failed to get teacher")?
        .filter(|p| p.role == Role::Teacher)
        .ok_or_else(|| ApiError::not_found("Teacher not found"))
}

fn with_subjects(store: &dyn Store, profile: Profile) -> Result<TeacherWithSubjects, ApiError> {
    let subjects = store
        .list_teacher_subjects(&profile.id)
        .api_err("Failed to list teacher subjects")?;
    Ok(TeacherWithSubjects { profile, subjects })
}

fn teacher_write_error(e: Error, context: &'static str) -> ApiError {
    match e {
        Error::BadRequest(message) => ApiError::bad_request(message),
        Error::AlreadyExists => ApiError::conflict("Email already registered"),
        Error::NotFound => ApiError::not_found("Teacher not found"),
        e => {
            tracing::error!("{context}: {e}");
            ApiError::internal(context)
        }
    }
}

pub async fn create_teacher(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateTeacherRequest>,
) -> impl IntoResponse {
    let store = state.store.as_ref();
    let full_name = validate_full_name(&req.full_name)?;
    let email = validate_email(&req.email)?;
    validate_password(&req.password)?;

    let password_hash = state
        .hasher
        .hash_password(&req.password)
        .api_err("Failed to hash password")?;

    let now = Utc::now();
    let profile = Profile {
        id: Uuid::new_v4().to_string(),
        email,
        role: Role::Teacher,
        full_name,
        password_hash,
        created_at: now,
        updated_at: now,
    };

    store
        .create_teacher(&profile, &req.subject_ids)
        .map_err(|e| teacher_write_error(e, "Failed to create teacher"))?;

    tracing::info!(teacher_id = %profile.id, subjects = req.subject_ids.len(), "created teacher");

    let teacher = with_subjects(store, profile)?;
    Ok::<_, ApiError>((StatusCode::CREATED, Json(ApiResponse::success(teacher))))
}

pub async fn list_teachers(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let store = state.store.as_ref();
    let profiles = store
        .list_profiles_by_role(Role::Teacher)
        .api_err("Failed to list teachers")?;

    let teachers = profiles
        .into_iter()
        .map(|p| with_subjects(store, p))
        .collect::<Result<Vec<_>, _>>()?;

    Ok::<_, ApiError>(Json(ApiResponse::success(teachers)))
}

pub async fn get_teacher(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let store = state.store.as_ref();
    let profile = load_teacher(store, &id)?;
    let teacher = with_subjects(store, profile)?;

    Ok::<_, ApiError>(Json(ApiResponse::success(teacher)))
}

pub async fn update_teacher(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTeacherRequest>,
) -> impl IntoResponse {
    let store = state.store.as_ref();
    let mut profile = load_teacher(store, &id)?;

    if let Some(full_name) = req.full_name {
        profile.full_name = validate_full_name(&full_name)?;
    }
    if let Some(email) = req.email {
        profile.email = validate_email(&email)?;
    }
    let password_changed = match req.password.as_deref() {
        Some(password) => {
            validate_password(password)?;
            profile.password_hash = state
                .hasher
                .hash_password(password)
                .api_err("Failed to hash password")?;
            true
        }
        None => false,
    };
    profile.updated_at = Utc::now();

    let revoked = store
        .update_teacher(&profile, req.subject_ids.as_deref(), password_changed)
        .map_err(|e| teacher_write_error(e, "Failed to update teacher"))?;

    if password_changed {
        tracing::info!(teacher_id = %profile.id, revoked, "password changed, sessions revoked");
    }

    let teacher = with_subjects(store, profile)?;
    Ok::<_, ApiError>(Json(ApiResponse::success(teacher)))
}

pub async fn delete_teacher(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let store = state.store.as_ref();
    let profile = load_teacher(store, &id)?;

    store
        .delete_profile(&profile.id)
        .api_err("Failed to delete teacher")?;

    tracing::info!(teacher_id = %profile.id, "deleted teacher");

    Ok::<_, ApiError>(StatusCode::NO_CONTENT)
}
