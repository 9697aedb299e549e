use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use uuid::Uuid;

use crate::auth::RequireAdmin;
use crate::server::AppState;
use crate::server::dto::{CreateScheduleRequest, ListSchedulesParams, UpdateScheduleRequest};
use crate::server::response::{
    ApiError, ApiResponse, StoreOptionExt, StoreResultExt, schedule_write_result,
};
use crate::store::Store;
use crate::types::{Role, Schedule, ScheduleEntry};

/// Rejects references to a subject or teacher that does not exist, or a
/// teacher id that belongs to an admin.
fn check_references(
    store: &dyn Store,
    subject_id: &str,
    teacher_id: Option<&str>,
) -> Result<(), ApiError> {
    store
        .get_subject(subject_id)
        .api_err("Failed to get subject")?
        .ok_or_else(|| ApiError::bad_request("Subject not found"))?;

    if let Some(teacher_id) = teacher_id {
        let teacher = store
            .get_profile(teacher_id)
            .api_err("Failed to get teacher")?
            .ok_or_else(|| ApiError::bad_request("Teacher not found"))?;
        if teacher.role != Role::Teacher {
            return Err(ApiError::bad_request("Assigned profile is not a teacher"));
        }
    }

    Ok(())
}

fn require_class(store: &dyn Store, class_id: &str) -> Result<(), ApiError> {
    store
        .get_class(class_id)
        .api_err("Failed to get class")?
        .ok_or_else(|| ApiError::bad_request("Class not found"))?;
    Ok(())
}

fn load_entry(store: &dyn Store, id: &str) -> Result<ScheduleEntry, ApiError> {
    store
        .get_schedule_entry(id)
        .api_err("Failed to get schedule")?
        .or_not_found("Schedule not found")
}

/// Empty teacher ids from form selects mean "no teacher".
fn normalize_teacher_id(teacher_id: Option<String>) -> Option<String> {
    teacher_id.filter(|id| !id.trim().is_empty())
}

pub async fn create_schedule(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateScheduleRequest>,
) -> impl IntoResponse {
    let store = state.store.as_ref();

    require_class(store, &req.class_id)?;

    let teacher_id = normalize_teacher_id(req.teacher_id);
    check_references(store, &req.subject_id, teacher_id.as_deref())?;

    let now = Utc::now();
    let schedule = Schedule {
        id: Uuid::new_v4().to_string(),
        class_id: req.class_id,
        subject_id: req.subject_id,
        teacher_id,
        day_of_week: req.day_of_week,
        time_slot: req.time_slot,
        created_at: now,
        updated_at: now,
    };

    schedule_write_result(store.assign_schedule(&schedule))?;

    tracing::info!(
        schedule_id = %schedule.id,
        class_id = %schedule.class_id,
        day = schedule.day_of_week.number(),
        slot = %schedule.time_slot,
        "assigned lesson"
    );

    let entry = load_entry(store, &schedule.id)?;
    Ok::<_, ApiError>((StatusCode::CREATED, Json(ApiResponse::success(entry))))
}

pub async fn update_schedule(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateScheduleRequest>,
) -> impl IntoResponse {
    let store = state.store.as_ref();

    let mut schedule = store
        .get_schedule(&id)
        .api_err("Failed to get schedule")?
        .or_not_found("Schedule not found")?;

    if let Some(class_id) = req.class_id {
        if class_id != schedule.class_id {
            require_class(store, &class_id)?;
            schedule.class_id = class_id;
        }
    }

    let teacher_id = normalize_teacher_id(req.teacher_id);
    check_references(store, &req.subject_id, teacher_id.as_deref())?;

    schedule.subject_id = req.subject_id;
    schedule.teacher_id = teacher_id;
    schedule.day_of_week = req.day_of_week;
    schedule.time_slot = req.time_slot;
    schedule.updated_at = Utc::now();

    schedule_write_result(store.update_schedule(&schedule))?;

    let entry = load_entry(store, &schedule.id)?;
    Ok::<_, ApiError>(Json(ApiResponse::success(entry)))
}

pub async fn list_schedules(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListSchedulesParams>,
) -> impl IntoResponse {
    let entries = state
        .store
        .list_class_schedule(&params.class_id)
        .api_err("Failed to list schedule")?;

    Ok::<_, ApiError>(Json(ApiResponse::success(entries)))
}

pub async fn get_schedule(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let entry = load_entry(state.store.as_ref(), &id)?;

    Ok::<_, ApiError>(Json(ApiResponse::success(entry)))
}

/// Deleting an entry that is already gone succeeds.
pub async fn delete_schedule(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let removed = state
        .store
        .delete_schedule(&id)
        .api_err("Failed to delete schedule")?;

    if removed {
        tracing::info!(schedule_id = %id, "removed lesson");
    } else {
        tracing::debug!(schedule_id = %id, "lesson already removed");
    }

    Ok::<_, ApiError>(StatusCode::NO_CONTENT)
}
