//! # Timegrid
//!
//! A school timetable server: admins manage classes, subjects, teachers and
//! the weekly lesson grid; teachers see their own week; anyone can read a
//! class schedule. Usable both as a standalone binary and as a library.
//!
//! ## Library Usage
//!
//! ```toml
//! [dependencies]
//! timegrid = { version = "0.0.1", default-features = false }
//! ```
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use timegrid::config::ServerConfig;
//! use timegrid::server::{AppState, create_router};
//! use timegrid::store::{SqliteStore, Store};
//!
//! let config = ServerConfig::from_data_dir("./data").unwrap();
//! let store = SqliteStore::new(config.db_path()).unwrap();
//! store.initialize().unwrap();
//!
//! let state = Arc::new(AppState::new(Arc::new(store), &config).unwrap());
//! let router = create_router(state);
//! // Serve with axum...
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): Includes CLI module. Disable with `default-features = false`.

pub mod auth;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod server;
pub mod store;
pub mod types;
