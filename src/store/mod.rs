mod schema;
mod sqlite;

pub use sqlite::SqliteStore;

use crate::error::Result;
use crate::types::*;

/// Store defines the database interface.
pub trait Store: Send + Sync {
    fn initialize(&self) -> Result<()>;

    // Profile operations
    fn create_profile(&self, profile: &Profile) -> Result<()>;
    fn get_profile(&self, id: &str) -> Result<Option<Profile>>;
    fn get_profile_by_email(&self, email: &str) -> Result<Option<Profile>>;
    fn list_profiles_by_role(&self, role: Role) -> Result<Vec<Profile>>;
    fn delete_profile(&self, id: &str) -> Result<bool>;
    fn has_admin(&self) -> Result<bool>;

    // Session operations
    fn create_session(&self, session: &Session) -> Result<()>;
    fn get_session_by_lookup(&self, lookup: &str) -> Result<Option<Session>>;
    fn delete_session(&self, id: &str) -> Result<bool>;
    fn delete_profile_sessions(&self, profile_id: &str) -> Result<usize>;
    fn update_session_last_used(&self, id: &str) -> Result<()>;

    // Class operations
    fn create_class(&self, class: &Class) -> Result<()>;
    fn get_class(&self, id: &str) -> Result<Option<Class>>;
    fn list_classes(&self) -> Result<Vec<Class>>;
    fn update_class(&self, class: &Class) -> Result<()>;
    fn delete_class(&self, id: &str) -> Result<bool>;

    // Subject operations
    fn create_subject(&self, subject: &Subject) -> Result<()>;
    fn get_subject(&self, id: &str) -> Result<Option<Subject>>;
    fn list_subjects(&self) -> Result<Vec<Subject>>;
    fn update_subject(&self, subject: &Subject) -> Result<()>;
    fn delete_subject(&self, id: &str) -> Result<bool>;

    // Teacher-Subject M2M operations
    fn list_teacher_subjects(&self, teacher_id: &str) -> Result<Vec<Subject>>;
    fn create_teacher(&self, profile: &Profile, subject_ids: &[String]) -> Result<()>;
    /// Saves profile fields, optionally replaces the subject set and revokes
    /// sessions, all or nothing. Returns the number of revoked sessions.
    fn update_teacher(
        &self,
        profile: &Profile,
        subject_ids: Option<&[String]>,
        revoke_sessions: bool,
    ) -> Result<usize>;

    // Schedule operations
    fn assign_schedule(&self, schedule: &Schedule) -> Result<()>;
    fn update_schedule(&self, schedule: &Schedule) -> Result<()>;
    fn get_schedule(&self, id: &str) -> Result<Option<Schedule>>;
    fn get_schedule_entry(&self, id: &str) -> Result<Option<ScheduleEntry>>;
    fn list_class_schedule(&self, class_id: &str) -> Result<Vec<ScheduleEntry>>;
    fn list_teacher_schedule(&self, teacher_id: &str) -> Result<Vec<ScheduleEntry>>;
    fn delete_schedule(&self, id: &str) -> Result<bool>;

    fn overview(&self) -> Result<Overview>;
}
