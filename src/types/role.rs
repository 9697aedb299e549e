use std::fmt;

use serde::{Deserialize, Serialize};

use super::Profile;

/// Role stored on a profile. Fixed when the account is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Teacher,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Teacher => "teacher",
        }
    }

    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "admin" => Some(Role::Admin),
            "teacher" => Some(Role::Teacher),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who is making a request. Guests have no session.
#[derive(Debug, Clone)]
pub enum Caller {
    Admin(Profile),
    Teacher(Profile),
    Guest,
}

impl Caller {
    #[must_use]
    pub fn from_profile(profile: Profile) -> Self {
        match profile.role {
            Role::Admin => Caller::Admin(profile),
            Role::Teacher => Caller::Teacher(profile),
        }
    }

    #[must_use]
    pub fn profile(&self) -> Option<&Profile> {
        match self {
            Caller::Admin(p) | Caller::Teacher(p) => Some(p),
            Caller::Guest => None,
        }
    }

    #[must_use]
    pub fn role_name(&self) -> &'static str {
        match self {
            Caller::Admin(_) => "admin",
            Caller::Teacher(_) => "teacher",
            Caller::Guest => "guest",
        }
    }
}
