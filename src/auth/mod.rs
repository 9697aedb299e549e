pub mod guard;
mod helpers;
mod middleware;
mod token;

pub use guard::{Access, View, authorize};
pub use helpers::issue_session;
pub use middleware::{AuthError, RequireAdmin, RequireAuth, RequireTeacher};
pub use token::{MIN_PASSWORD_LEN, SecretHasher, parse_session_token};
