mod server;

pub use server::{
    CONFIG_FILE_NAME, DB_FILE_NAME, FileConfig, MAX_SESSION_TTL_HOURS, ServerConfig, validate_ttl,
};
