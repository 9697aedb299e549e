use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use inquire::validator::Validation;
use inquire::{Confirm, Password, Text};
use uuid::Uuid;

use crate::auth::SecretHasher;
use crate::config::DB_FILE_NAME;
use crate::error::Error;
use crate::server::validation::{validate_email, validate_full_name, validate_password};
use crate::store::{SqliteStore, Store};
use crate::types::{Profile, Role};

use super::init_store;

pub fn run_init(data_dir: String, non_interactive: bool) -> anyhow::Result<()> {
    let data_path: PathBuf = data_dir.into();
    fs::create_dir_all(&data_path)?;

    let db_path = data_path.join(DB_FILE_NAME);
    let store = SqliteStore::new(&db_path)?;
    store.initialize()?;

    println!("Database ready at {}", db_path.display());

    if store.has_admin()? {
        println!("An admin account already exists.");
        return Ok(());
    }

    if non_interactive {
        println!(
            "No admin account yet. Create one with 'timegrid admin create-admin' or the registration page."
        );
        return Ok(());
    }

    let create = Confirm::new("Would you like to create an admin account now?")
        .with_default(true)
        .prompt()?;

    if create {
        let (email, full_name, password) = prompt_admin_fields(None, None, None)?;
        create_admin(&store, &email, &full_name, &password)?;
    }

    Ok(())
}

pub fn run_create_admin(
    data_dir: String,
    email: Option<String>,
    full_name: Option<String>,
    password: Option<String>,
    non_interactive: bool,
) -> anyhow::Result<()> {
    let store = init_store(&data_dir)?;

    let (email, full_name, password) = if non_interactive {
        match (email, full_name, password) {
            (Some(e), Some(n), Some(p)) => (e, n, p),
            _ => anyhow::bail!(
                "--email, --full-name and --password are required in non-interactive mode"
            ),
        }
    } else {
        prompt_admin_fields(email, full_name, password)?
    };

    create_admin(&store, &email, &full_name, &password)
}

fn create_admin(
    store: &SqliteStore,
    email: &str,
    full_name: &str,
    password: &str,
) -> anyhow::Result<()> {
    let email = validate_email(email).map_err(|e| anyhow::anyhow!(e.message))?;
    let full_name = validate_full_name(full_name).map_err(|e| anyhow::anyhow!(e.message))?;
    validate_password(password).map_err(|e| anyhow::anyhow!(e.message))?;

    let now = Utc::now();
    let profile = Profile {
        id: Uuid::new_v4().to_string(),
        email,
        role: Role::Admin,
        full_name,
        password_hash: SecretHasher::new().hash_password(password)?,
        created_at: now,
        updated_at: now,
    };

    match store.create_profile(&profile) {
        Ok(()) => {}
        Err(Error::AlreadyExists) => {
            anyhow::bail!("Email '{}' is already registered", profile.email)
        }
        Err(e) => return Err(e.into()),
    }

    println!();
    println!("Created admin \"{}\" <{}>", profile.full_name, profile.email);
    println!();

    Ok(())
}

fn prompt_admin_fields(
    email: Option<String>,
    full_name: Option<String>,
    password: Option<String>,
) -> anyhow::Result<(String, String, String)> {
    let email = match email {
        Some(e) => e,
        None => Text::new("Email:")
            .with_validator(|input: &str| {
                Ok(match validate_email(input) {
                    Ok(_) => Validation::Valid,
                    Err(e) => Validation::Invalid(e.message.into()),
                })
            })
            .prompt()?,
    };

    let full_name = match full_name {
        Some(n) => n,
        None => Text::new("Full name:")
            .with_validator(|input: &str| {
                Ok(match validate_full_name(input) {
                    Ok(_) => Validation::Valid,
                    Err(e) => Validation::Invalid(e.message.into()),
                })
            })
            .prompt()?,
    };

    let password = match password {
        Some(p) => p,
        None => Password::new("Password:")
            .with_validator(|input: &str| {
                Ok(match validate_password(input) {
                    Ok(()) => Validation::Valid,
                    Err(e) => Validation::Invalid(e.message.into()),
                })
            })
            .prompt()?,
    };

    Ok((email, full_name, password))
}
