use std::collections::HashSet;
use std::sync::Arc;

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};

use crate::auth::RequireTeacher;
use crate::server::AppState;
use crate::server::dto::{TeacherDashboard, TeacherStats};
use crate::server::response::{ApiError, ApiResponse, StoreResultExt};
use crate::types::group_by_day;

pub fn teacher_router() -> Router<Arc<AppState>> {
    Router::new().route("/teacher/dashboard", get(dashboard))
}

/// The signed-in teacher's subjects and week, with totals.
pub async fn dashboard(
    auth: RequireTeacher,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let profile = auth.profile;

    let subjects = state
        .store
        .list_teacher_subjects(&profile.id)
        .api_err("Failed to list subjects")?;

    let entries = state
        .store
        .list_teacher_schedule(&profile.id)
        .api_err("Failed to load schedule")?;

    let total_classes = entries
        .iter()
        .map(|e| e.class.id.as_str())
        .collect::<HashSet<_>>()
        .len();

    let schedule = group_by_day(entries);
    let stats = TeacherStats {
        total_classes,
        total_subjects: subjects.len(),
        weekly_hours: schedule.entry_count(),
    };

    Ok::<_, ApiError>(Json(ApiResponse::success(TeacherDashboard {
        profile,
        subjects,
        schedule,
        stats,
    })))
}
