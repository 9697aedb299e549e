use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{Connection, OptionalExtension, Row, TransactionBehavior, params};

use super::Store;
use super::schema::SCHEMA;
use crate::error::{Error, Result};
use crate::types::*;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open(db_path)?;

        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.busy_timeout(std::time::Duration::from_secs(5))?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Runs the conflict check and the write in one IMMEDIATE transaction,
    /// so no other writer can slip a row in between.
    fn write_schedule(&self, schedule: &Schedule, update: bool) -> Result<()> {
        let mut conn = self.conn();
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        if let Some(conflict) = find_conflict(&tx, schedule)? {
            tracing::info!(
                schedule_id = %schedule.id,
                class_id = %schedule.class_id,
                "rejected schedule write: {conflict}"
            );
            return Err(Error::ScheduleConflict(conflict));
        }

        let result = if update {
            tx.execute(
                "UPDATE schedules
                 SET class_id = ?1, subject_id = ?2, teacher_id = ?3, day_of_week = ?4,
                     time_slot = ?5, updated_at = ?6
                 WHERE id = ?7",
                params![
                    schedule.class_id,
                    schedule.subject_id,
                    schedule.teacher_id,
                    schedule.day_of_week,
                    schedule.time_slot,
                    format_datetime(&schedule.updated_at),
                    schedule.id,
                ],
            )
        } else {
            tx.execute(
                "INSERT INTO schedules
                    (id, class_id, subject_id, teacher_id, day_of_week, time_slot, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    schedule.id,
                    schedule.class_id,
                    schedule.subject_id,
                    schedule.teacher_id,
                    schedule.day_of_week,
                    schedule.time_slot,
                    format_datetime(&schedule.created_at),
                    format_datetime(&schedule.updated_at),
                ],
            )
        };

        match result {
            Ok(0) if update => return Err(Error::NotFound),
            Ok(_) => {}
            Err(e) => return Err(map_schedule_write_error(e, schedule)),
        }

        tx.commit()?;
        Ok(())
    }
}

fn parse_datetime(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            // Handle SQLite's default datetime format: "YYYY-MM-DD HH:MM:SS"
            chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc())
        })
        .unwrap_or_else(|e| {
            tracing::error!("Invalid datetime in database: '{}' - {}", s, e);
            Utc::now()
        })
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

fn constraint_code(e: &rusqlite::Error) -> Option<i32> {
    match e {
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Some(err.extended_code)
        }
        _ => None,
    }
}

fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(
        constraint_code(e),
        Some(rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE | rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY)
    )
}

fn map_schedule_write_error(e: rusqlite::Error, schedule: &Schedule) -> Error {
    match constraint_code(&e) {
        Some(rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE) => {
            let kind = if e.to_string().contains("schedules.teacher_id") {
                ConflictKind::TeacherDoubleBooked
            } else {
                ConflictKind::ClassSlotTaken
            };
            Error::ScheduleConflict(ScheduleConflict {
                kind,
                existing_id: None,
                day_of_week: schedule.day_of_week,
                time_slot: schedule.time_slot,
            })
        }
        Some(rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY) => Error::BadRequest(
            "schedule references a class, subject or teacher that does not exist".to_string(),
        ),
        _ => Error::from(e),
    }
}

fn find_conflict(conn: &Connection, schedule: &Schedule) -> Result<Option<ScheduleConflict>> {
    let class_clash: Option<String> = conn
        .query_row(
            "SELECT id FROM schedules
             WHERE class_id = ?1 AND day_of_week = ?2 AND time_slot = ?3 AND id != ?4
             LIMIT 1",
            params![
                schedule.class_id,
                schedule.day_of_week,
                schedule.time_slot,
                schedule.id
            ],
            |row| row.get(0),
        )
        .optional()?;

    if let Some(existing_id) = class_clash {
        return Ok(Some(ScheduleConflict {
            kind: ConflictKind::ClassSlotTaken,
            existing_id: Some(existing_id),
            day_of_week: schedule.day_of_week,
            time_slot: schedule.time_slot,
        }));
    }

    let Some(teacher_id) = &schedule.teacher_id else {
        return Ok(None);
    };

    let teacher_clash: Option<String> = conn
        .query_row(
            "SELECT id FROM schedules
             WHERE teacher_id = ?1 AND day_of_week = ?2 AND time_slot = ?3 AND id != ?4
             LIMIT 1",
            params![teacher_id, schedule.day_of_week, schedule.time_slot, schedule.id],
            |row| row.get(0),
        )
        .optional()?;

    Ok(teacher_clash.map(|existing_id| ScheduleConflict {
        kind: ConflictKind::TeacherDoubleBooked,
        existing_id: Some(existing_id),
        day_of_week: schedule.day_of_week,
        time_slot: schedule.time_slot,
    }))
}

fn insert_teacher_subjects(
    conn: &Connection,
    teacher_id: &str,
    subject_ids: &[String],
) -> Result<()> {
    let now = format_datetime(&Utc::now());
    let mut stmt = conn.prepare(
        "INSERT OR IGNORE INTO teacher_subjects (teacher_id, subject_id, created_at) VALUES (?1, ?2, ?3)",
    )?;
    for subject_id in subject_ids {
        stmt.execute(params![teacher_id, subject_id, now])
            .map_err(|e| match constraint_code(&e) {
                Some(rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY) => {
                    Error::BadRequest(format!("subject not found: {subject_id}"))
                }
                _ => Error::from(e),
            })?;
    }
    Ok(())
}

impl ToSql for Role {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Role {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let s = value.as_str()?;
        Role::parse(s).ok_or_else(|| FromSqlError::Other(format!("unknown role: {s}").into()))
    }
}

impl ToSql for Weekday {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(i64::from(self.number())))
    }
}

impl FromSql for Weekday {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let n = value.as_i64()?;
        u8::try_from(n)
            .ok()
            .and_then(|n| Weekday::try_from(n).ok())
            .ok_or(FromSqlError::OutOfRange(n))
    }
}

impl ToSql for TimeSlot {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TimeSlot {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let s = value.as_str()?;
        TimeSlot::parse(s)
            .ok_or_else(|| FromSqlError::Other(format!("unknown time slot: {s}").into()))
    }
}

impl ToSql for SubjectIcon {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for SubjectIcon {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        // unknown tags fall back to the default icon rather than failing the read
        Ok(SubjectIcon::parse(value.as_str()?).unwrap_or_default())
    }
}

const PROFILE_COLUMNS: &str = "id, email, role, full_name, password_hash, created_at, updated_at";

fn profile_from_row(row: &Row<'_>) -> rusqlite::Result<Profile> {
    Ok(Profile {
        id: row.get(0)?,
        email: row.get(1)?,
        role: row.get(2)?,
        full_name: row.get(3)?,
        password_hash: row.get(4)?,
        created_at: parse_datetime(&row.get::<_, String>(5)?),
        updated_at: parse_datetime(&row.get::<_, String>(6)?),
    })
}

const SESSION_COLUMNS: &str =
    "id, token_hash, token_lookup, profile_id, created_at, expires_at, last_used_at";

fn session_from_row(row: &Row<'_>) -> rusqlite::Result<Session> {
    Ok(Session {
        id: row.get(0)?,
        token_hash: row.get(1)?,
        token_lookup: row.get(2)?,
        profile_id: row.get(3)?,
        created_at: parse_datetime(&row.get::<_, String>(4)?),
        expires_at: row.get::<_, Option<String>>(5)?.map(|s| parse_datetime(&s)),
        last_used_at: row.get::<_, Option<String>>(6)?.map(|s| parse_datetime(&s)),
    })
}

fn class_from_row(row: &Row<'_>) -> rusqlite::Result<Class> {
    Ok(Class {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        created_at: parse_datetime(&row.get::<_, String>(3)?),
        updated_at: parse_datetime(&row.get::<_, String>(4)?),
    })
}

fn subject_from_row(row: &Row<'_>) -> rusqlite::Result<Subject> {
    Ok(Subject {
        id: row.get(0)?,
        name: row.get(1)?,
        icon: row.get(2)?,
        color: row.get(3)?,
        created_at: parse_datetime(&row.get::<_, String>(4)?),
        updated_at: parse_datetime(&row.get::<_, String>(5)?),
    })
}

fn schedule_from_row(row: &Row<'_>) -> rusqlite::Result<Schedule> {
    Ok(Schedule {
        id: row.get(0)?,
        class_id: row.get(1)?,
        subject_id: row.get(2)?,
        teacher_id: row.get(3)?,
        day_of_week: row.get(4)?,
        time_slot: row.get(5)?,
        created_at: parse_datetime(&row.get::<_, String>(6)?),
        updated_at: parse_datetime(&row.get::<_, String>(7)?),
    })
}

const ENTRY_SELECT: &str = "SELECT s.id, s.day_of_week, s.time_slot,
        c.id, c.name,
        sub.id, sub.name, sub.icon, sub.color,
        p.id, p.full_name
     FROM schedules s
     JOIN classes c ON c.id = s.class_id
     JOIN subjects sub ON sub.id = s.subject_id
     LEFT JOIN profiles p ON p.id = s.teacher_id";

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<ScheduleEntry> {
    let teacher = match (
        row.get::<_, Option<String>>(9)?,
        row.get::<_, Option<String>>(10)?,
    ) {
        (Some(id), Some(full_name)) => Some(TeacherRef { id, full_name }),
        _ => None,
    };

    Ok(ScheduleEntry {
        id: row.get(0)?,
        day_of_week: row.get(1)?,
        time_slot: row.get(2)?,
        class: ClassRef {
            id: row.get(3)?,
            name: row.get(4)?,
        },
        subject: SubjectRef {
            id: row.get(5)?,
            name: row.get(6)?,
            icon: row.get(7)?,
            color: row.get(8)?,
        },
        teacher,
    })
}

impl Store for SqliteStore {
    fn initialize(&self) -> Result<()> {
        self.conn().execute_batch(SCHEMA)?;
        Ok(())
    }

    // Profile operations

    fn create_profile(&self, profile: &Profile) -> Result<()> {
        let result = self.conn().execute(
            "INSERT INTO profiles (id, email, role, full_name, password_hash, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                profile.id,
                profile.email,
                profile.role,
                profile.full_name,
                profile.password_hash,
                format_datetime(&profile.created_at),
                format_datetime(&profile.updated_at),
            ],
        );

        match result {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(Error::AlreadyExists),
            Err(e) => Err(Error::from(e)),
        }
    }

    fn get_profile(&self, id: &str) -> Result<Option<Profile>> {
        let conn = self.conn();
        conn.query_row(
            &format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = ?1"),
            params![id],
            profile_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn get_profile_by_email(&self, email: &str) -> Result<Option<Profile>> {
        let conn = self.conn();
        conn.query_row(
            &format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE email = ?1"),
            params![email],
            profile_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn list_profiles_by_role(&self, role: Role) -> Result<Vec<Profile>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE role = ?1 ORDER BY full_name, id"
        ))?;

        let rows = stmt.query_map(params![role], profile_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn delete_profile(&self, id: &str) -> Result<bool> {
        // teacher links and sessions cascade, schedule rows keep their slot with no teacher
        let rows = self
            .conn()
            .execute("DELETE FROM profiles WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }

    fn has_admin(&self) -> Result<bool> {
        let conn = self.conn();
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM profiles WHERE role = 'admin'",
            [],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    // Session operations

    fn create_session(&self, session: &Session) -> Result<()> {
        let result = self.conn().execute(
            "INSERT INTO sessions (id, token_hash, token_lookup, profile_id, created_at, expires_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                session.id,
                session.token_hash,
                session.token_lookup,
                session.profile_id,
                format_datetime(&session.created_at),
                session.expires_at.as_ref().map(format_datetime),
            ],
        );

        match result {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(Error::TokenLookupCollision),
            Err(e) => Err(Error::from(e)),
        }
    }

    fn get_session_by_lookup(&self, lookup: &str) -> Result<Option<Session>> {
        let conn = self.conn();
        conn.query_row(
            &format!("SELECT {SESSION_COLUMNS} FROM sessions WHERE token_lookup = ?1"),
            params![lookup],
            session_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn delete_session(&self, id: &str) -> Result<bool> {
        let rows = self
            .conn()
            .execute("DELETE FROM sessions WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }

    fn delete_profile_sessions(&self, profile_id: &str) -> Result<usize> {
        let rows = self.conn().execute(
            "DELETE FROM sessions WHERE profile_id = ?1",
            params![profile_id],
        )?;
        Ok(rows)
    }

    fn update_session_last_used(&self, id: &str) -> Result<()> {
        self.conn().execute(
            "UPDATE sessions SET last_used_at = ?1 WHERE id = ?2",
            params![format_datetime(&Utc::now()), id],
        )?;
        Ok(())
    }

    // Class operations

    fn create_class(&self, class: &Class) -> Result<()> {
        self.conn().execute(
            "INSERT INTO classes (id, name, description, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                class.id,
                class.name,
                class.description,
                format_datetime(&class.created_at),
                format_datetime(&class.updated_at),
            ],
        )?;
        Ok(())
    }

    fn get_class(&self, id: &str) -> Result<Option<Class>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT id, name, description, created_at, updated_at FROM classes WHERE id = ?1",
            params![id],
            class_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn list_classes(&self) -> Result<Vec<Class>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, name, description, created_at, updated_at FROM classes ORDER BY name, id",
        )?;

        let rows = stmt.query_map([], class_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn update_class(&self, class: &Class) -> Result<()> {
        let rows = self.conn().execute(
            "UPDATE classes SET name = ?1, description = ?2, updated_at = ?3 WHERE id = ?4",
            params![
                class.name,
                class.description,
                format_datetime(&class.updated_at),
                class.id
            ],
        )?;

        if rows == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }

    fn delete_class(&self, id: &str) -> Result<bool> {
        let rows = self
            .conn()
            .execute("DELETE FROM classes WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }

    // Subject operations

    fn create_subject(&self, subject: &Subject) -> Result<()> {
        self.conn().execute(
            "INSERT INTO subjects (id, name, icon, color, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                subject.id,
                subject.name,
                subject.icon,
                subject.color,
                format_datetime(&subject.created_at),
                format_datetime(&subject.updated_at),
            ],
        )?;
        Ok(())
    }

    fn get_subject(&self, id: &str) -> Result<Option<Subject>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT id, name, icon, color, created_at, updated_at FROM subjects WHERE id = ?1",
            params![id],
            subject_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn list_subjects(&self) -> Result<Vec<Subject>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, name, icon, color, created_at, updated_at FROM subjects ORDER BY name, id",
        )?;

        let rows = stmt.query_map([], subject_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn update_subject(&self, subject: &Subject) -> Result<()> {
        let rows = self.conn().execute(
            "UPDATE subjects SET name = ?1, icon = ?2, color = ?3, updated_at = ?4 WHERE id = ?5",
            params![
                subject.name,
                subject.icon,
                subject.color,
                format_datetime(&subject.updated_at),
                subject.id
            ],
        )?;

        if rows == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }

    fn delete_subject(&self, id: &str) -> Result<bool> {
        let rows = self
            .conn()
            .execute("DELETE FROM subjects WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }

    // Teacher-Subject M2M operations

    fn list_teacher_subjects(&self, teacher_id: &str) -> Result<Vec<Subject>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT s.id, s.name, s.icon, s.color, s.created_at, s.updated_at
             FROM subjects s
             JOIN teacher_subjects ts ON ts.subject_id = s.id
             WHERE ts.teacher_id = ?1
             ORDER BY s.name, s.id",
        )?;

        let rows = stmt.query_map(params![teacher_id], subject_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn create_teacher(&self, profile: &Profile, subject_ids: &[String]) -> Result<()> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        let result = tx.execute(
            "INSERT INTO profiles (id, email, role, full_name, password_hash, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                profile.id,
                profile.email,
                Role::Teacher,
                profile.full_name,
                profile.password_hash,
                format_datetime(&profile.created_at),
                format_datetime(&profile.updated_at),
            ],
        );

        match result {
            Ok(_) => {}
            Err(e) if is_unique_violation(&e) => return Err(Error::AlreadyExists),
            Err(e) => return Err(Error::from(e)),
        }

        insert_teacher_subjects(&tx, &profile.id, subject_ids)?;

        tx.commit()?;
        Ok(())
    }

    fn update_teacher(
        &self,
        profile: &Profile,
        subject_ids: Option<&[String]>,
        revoke_sessions: bool,
    ) -> Result<usize> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        let result = tx.execute(
            "UPDATE profiles SET email = ?1, full_name = ?2, password_hash = ?3, updated_at = ?4
             WHERE id = ?5 AND role = ?6",
            params![
                profile.email,
                profile.full_name,
                profile.password_hash,
                format_datetime(&profile.updated_at),
                profile.id,
                Role::Teacher,
            ],
        );

        match result {
            Ok(0) => return Err(Error::NotFound),
            Ok(_) => {}
            Err(e) if is_unique_violation(&e) => return Err(Error::AlreadyExists),
            Err(e) => return Err(Error::from(e)),
        }

        if let Some(subject_ids) = subject_ids {
            tx.execute(
                "DELETE FROM teacher_subjects WHERE teacher_id = ?1",
                params![profile.id],
            )?;
            insert_teacher_subjects(&tx, &profile.id, subject_ids)?;
        }

        let revoked = if revoke_sessions {
            tx.execute(
                "DELETE FROM sessions WHERE profile_id = ?1",
                params![profile.id],
            )?
        } else {
            0
        };

        tx.commit()?;
        Ok(revoked)
    }

    // Schedule operations

    fn assign_schedule(&self, schedule: &Schedule) -> Result<()> {
        self.write_schedule(schedule, false)
    }

    fn update_schedule(&self, schedule: &Schedule) -> Result<()> {
        self.write_schedule(schedule, true)
    }

    fn get_schedule(&self, id: &str) -> Result<Option<Schedule>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT id, class_id, subject_id, teacher_id, day_of_week, time_slot, created_at, updated_at
             FROM schedules WHERE id = ?1",
            params![id],
            schedule_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn get_schedule_entry(&self, id: &str) -> Result<Option<ScheduleEntry>> {
        let conn = self.conn();
        conn.query_row(
            &format!("{ENTRY_SELECT} WHERE s.id = ?1"),
            params![id],
            entry_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn list_class_schedule(&self, class_id: &str) -> Result<Vec<ScheduleEntry>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(&format!(
            "{ENTRY_SELECT} WHERE s.class_id = ?1 ORDER BY s.day_of_week, s.time_slot"
        ))?;

        let rows = stmt.query_map(params![class_id], entry_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn list_teacher_schedule(&self, teacher_id: &str) -> Result<Vec<ScheduleEntry>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(&format!(
            "{ENTRY_SELECT} WHERE s.teacher_id = ?1 ORDER BY s.day_of_week, s.time_slot"
        ))?;

        let rows = stmt.query_map(params![teacher_id], entry_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn delete_schedule(&self, id: &str) -> Result<bool> {
        let rows = self
            .conn()
            .execute("DELETE FROM schedules WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }

    fn overview(&self) -> Result<Overview> {
        let conn = self.conn();
        let count = |sql: &str| -> Result<i64> { Ok(conn.query_row(sql, [], |row| row.get(0))?) };

        Ok(Overview {
            classes: count("SELECT COUNT(*) FROM classes")?,
            subjects: count("SELECT COUNT(*) FROM subjects")?,
            teachers: count("SELECT COUNT(*) FROM profiles WHERE role = 'teacher'")?,
            schedules: count("SELECT COUNT(*) FROM schedules")?,
        })
    }
}
