use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Role, TimeSlot, Weekday};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub full_name: String,
    #[serde(skip)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    #[serde(skip)]
    pub token_hash: String,
    #[serde(skip)]
    pub token_lookup: String,
    pub profile_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_used_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Class {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Icon tag rendered next to a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubjectIcon {
    #[default]
    BookOpen,
    Calculator,
    Flask,
    Globe,
    Microscope,
    Palette,
    Music,
    Activity,
    Brain,
    Languages,
}

impl SubjectIcon {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SubjectIcon::BookOpen => "book-open",
            SubjectIcon::Calculator => "calculator",
            SubjectIcon::Flask => "flask",
            SubjectIcon::Globe => "globe",
            SubjectIcon::Microscope => "microscope",
            SubjectIcon::Palette => "palette",
            SubjectIcon::Music => "music",
            SubjectIcon::Activity => "activity",
            SubjectIcon::Brain => "brain",
            SubjectIcon::Languages => "languages",
        }
    }

    pub fn parse(s: &str) -> Option<SubjectIcon> {
        const ALL: [SubjectIcon; 10] = [
            SubjectIcon::BookOpen,
            SubjectIcon::Calculator,
            SubjectIcon::Flask,
            SubjectIcon::Globe,
            SubjectIcon::Microscope,
            SubjectIcon::Palette,
            SubjectIcon::Music,
            SubjectIcon::Activity,
            SubjectIcon::Brain,
            SubjectIcon::Languages,
        ];
        ALL.into_iter().find(|icon| icon.as_str() == s)
    }
}

pub const DEFAULT_SUBJECT_COLOR: &str = "#3B82F6";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub icon: SubjectIcon,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A schedule row as stored: one subject, optionally one teacher, for one
/// class at one weekday/time slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub id: String,
    pub class_id: String,
    pub subject_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<String>,
    pub day_of_week: Weekday,
    pub time_slot: TimeSlot,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRef {
    pub id: String,
    pub name: String,
    pub icon: SubjectIcon,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherRef {
    pub id: String,
    pub full_name: String,
}

/// A schedule row joined with the class, subject and teacher it points at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: String,
    pub day_of_week: Weekday,
    pub time_slot: TimeSlot,
    pub class: ClassRef,
    pub subject: SubjectRef,
    pub teacher: Option<TeacherRef>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeacherWithSubjects {
    #[serde(flatten)]
    pub profile: Profile,
    pub subjects: Vec<Subject>,
}

/// Which uniqueness rule a schedule write would break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// The class already has a subject at that day and slot.
    ClassSlotTaken,
    /// The teacher already teaches another lesson at that day and slot.
    TeacherDoubleBooked,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleConflict {
    pub kind: ConflictKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing_id: Option<String>,
    pub day_of_week: Weekday,
    pub time_slot: TimeSlot,
}

impl fmt::Display for ScheduleConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ConflictKind::ClassSlotTaken => write!(
                f,
                "class already has a lesson on {} at {}",
                self.day_of_week, self.time_slot
            ),
            ConflictKind::TeacherDoubleBooked => write!(
                f,
                "teacher is already booked on {} at {}",
                self.day_of_week, self.time_slot
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Overview {
    pub classes: i64,
    pub subjects: i64,
    pub teachers: i64,
    pub schedules: i64,
}
