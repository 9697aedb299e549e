use serde::{Deserialize, Serialize};

use crate::types::{
    Profile, Session, Subject, SubjectIcon, TimeSlot, WeekGrid, Weekday,
};

#[derive(Debug, Deserialize)]
pub struct RegisterAdminRequest {
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Returned by sign-in and admin registration. The raw token is only
/// ever shown here.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub session: Session,
    pub profile: Profile,
}

#[derive(Debug, Serialize)]
pub struct CurrentSessionResponse {
    pub session: Session,
    pub profile: Profile,
}

#[derive(Debug, Deserialize)]
pub struct CreateClassRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateClassRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateSubjectRequest {
    pub name: String,
    #[serde(default)]
    pub icon: Option<SubjectIcon>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateSubjectRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon: Option<SubjectIcon>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTeacherRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub subject_ids: Vec<String>,
}

/// `subject_ids` replaces the whole subject set when present.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTeacherRequest {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub subject_ids: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct CreateScheduleRequest {
    pub class_id: String,
    pub subject_id: String,
    #[serde(default)]
    pub teacher_id: Option<String>,
    pub day_of_week: Weekday,
    pub time_slot: TimeSlot,
}

#[derive(Debug, Deserialize)]
pub struct UpdateScheduleRequest {
    /// Moves the lesson to another class when set.
    #[serde(default)]
    pub class_id: Option<String>,
    pub subject_id: String,
    #[serde(default)]
    pub teacher_id: Option<String>,
    pub day_of_week: Weekday,
    pub time_slot: TimeSlot,
}

#[derive(Debug, Deserialize)]
pub struct ListSchedulesParams {
    pub class_id: String,
}

#[derive(Debug, Serialize)]
pub struct TeacherStats {
    pub total_classes: usize,
    pub total_subjects: usize,
    pub weekly_hours: usize,
}

#[derive(Debug, Serialize)]
pub struct TeacherDashboard {
    pub profile: Profile,
    pub subjects: Vec<Subject>,
    pub schedule: WeekGrid,
    pub stats: TeacherStats,
}

/// Payload of a view route the caller is allowed to open.
#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub view: &'static str,
    pub role: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
}
