use serde::Serialize;

use crate::store::Store;
use crate::types::{Overview, Role};

use super::init_store;

#[derive(Serialize)]
struct ServerInfo {
    #[serde(flatten)]
    overview: Overview,
    admins: usize,
}

pub fn run_info(data_dir: String, json: bool) -> anyhow::Result<()> {
    let store = init_store(&data_dir)?;

    let info = ServerInfo {
        overview: store.overview()?,
        admins: store.list_profiles_by_role(Role::Admin)?.len(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!();
    println!("Timegrid Status");
    println!("{}", "─".repeat(15));
    println!("Admins:    {}", info.admins);
    println!("Teachers:  {}", info.overview.teachers);
    println!("Classes:   {}", info.overview.classes);
    println!("Subjects:  {}", info.overview.subjects);
    println!("Lessons:   {}", info.overview.schedules);
    println!();

    Ok(())
}
