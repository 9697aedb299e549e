//! Route guard for the view surface.
//!
//! Access is decided by matching on the caller, never by comparing role
//! strings: a view either renders or redirects somewhere the caller can go.

use crate::types::Caller;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    AdminRegister,
    PublicSchedule,
    AdminDashboard,
    TeacherDashboard,
}

impl View {
    /// Maps a request path to a view. Unknown paths have no view and are
    /// sent home.
    #[must_use]
    pub fn resolve(path: &str) -> Option<View> {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        match path {
            "/" => Some(View::PublicSchedule),
            "/login" => Some(View::Login),
            "/admin-register" => Some(View::AdminRegister),
            "/admin" => Some(View::AdminDashboard),
            "/teacher" => Some(View::TeacherDashboard),
            _ => None,
        }
    }

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            View::Login => LOGIN_PATH,
            View::AdminRegister => "/admin-register",
            View::PublicSchedule => HOME_PATH,
            View::AdminDashboard => "/admin",
            View::TeacherDashboard => "/teacher",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(&'static str),
}

#[must_use]
pub fn authorize(view: View, caller: &Caller) -> Access {
    match (view, caller) {
        (View::Login | View::AdminRegister | View::PublicSchedule, _) => Access::Allow,
        (View::AdminDashboard, Caller::Admin(_)) => Access::Allow,
        (View::TeacherDashboard, Caller::Teacher(_)) => Access::Allow,
        (View::AdminDashboard | View::TeacherDashboard, Caller::Guest) => {
            Access::Redirect(LOGIN_PATH)
        }
        (View::AdminDashboard, Caller::Teacher(_))
        | (View::TeacherDashboard, Caller::Admin(_)) => Access::Redirect(HOME_PATH),
    }
}
