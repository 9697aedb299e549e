mod admin;
mod auth;
pub mod dto;
mod public;
pub mod response;
mod router;
mod teacher;
pub mod validation;
mod views;

pub use admin::admin_router;
pub use auth::auth_router;
pub use public::public_router;
pub use router::{AppState, create_router};
pub use teacher::teacher_router;
pub use views::view_router;
