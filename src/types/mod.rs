mod calendar;
mod models;
mod role;

pub use calendar::*;
pub use models::*;
pub use role::*;
