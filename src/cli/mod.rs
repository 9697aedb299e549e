mod admin;
mod commands;
mod info;

pub use admin::{run_create_admin, run_init};
pub use commands::AdminCommands;
pub use info::run_info;

use std::path::Path;

use crate::config::DB_FILE_NAME;
use crate::store::SqliteStore;

/// Open the store in `data_dir`, failing if `admin init` has not run yet.
pub fn init_store(data_dir: impl AsRef<Path>) -> anyhow::Result<SqliteStore> {
    let db_path = data_dir.as_ref().join(DB_FILE_NAME);

    if !db_path.exists() {
        anyhow::bail!(
            "Database not found at {}. Run 'timegrid admin init' first.",
            db_path.display()
        );
    }

    SqliteStore::new(&db_path).map_err(Into::into)
}
