use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use chrono::TimeDelta;
use serde::Deserialize;

use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "timegrid.toml";
pub const DB_FILE_NAME: &str = "timegrid.db";

/// Ten years.
pub const MAX_SESSION_TTL_HOURS: i64 = 24 * 365 * 10;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    /// How long a sign-in stays valid. `None` keeps sessions until sign-out.
    pub session_ttl_hours: Option<i64>,
    /// Whether `/api/v1/auth/admin-register` accepts new admin accounts.
    pub allow_admin_registration: bool,
}

/// Optional overrides read from `<data_dir>/timegrid.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub session_ttl_hours: Option<i64>,
    pub allow_admin_registration: Option<bool>,
}

impl FileConfig {
    /// Reads the config file if it exists. A missing file is not an error.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }
}

impl ServerConfig {
    /// Builds a config for `data_dir`, applying the config file on top of the defaults.
    pub fn from_data_dir(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let mut config = Self {
            data_dir: data_dir.into(),
            ..Self::default()
        };
        let file = FileConfig::load(&config.data_dir)?;
        config.apply(file)?;
        Ok(config)
    }

    pub fn apply(&mut self, file: FileConfig) -> Result<()> {
        if let Some(host) = file.host {
            self.host = host;
        }
        if let Some(port) = file.port {
            self.port = port;
        }
        if let Some(ttl) = file.session_ttl_hours {
            self.session_ttl_hours = validate_ttl(ttl)?;
        }
        if let Some(allow) = file.allow_admin_registration {
            self.allow_admin_registration = allow;
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> std::result::Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    #[must_use]
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }

    /// Session lifetime as a duration; re-checks the range since the field is public.
    pub fn session_ttl(&self) -> Result<Option<TimeDelta>> {
        let Some(hours) = self.session_ttl_hours else {
            return Ok(None);
        };
        validate_ttl(hours)?
            .map(|h| {
                TimeDelta::try_hours(h).ok_or_else(|| {
                    Error::Config(format!("session_ttl_hours out of range: {h}"))
                })
            })
            .transpose()
    }
}

/// Zero disables expiry; negative values and values past
/// [`MAX_SESSION_TTL_HOURS`] are rejected.
pub fn validate_ttl(hours: i64) -> Result<Option<i64>> {
    match hours {
        h if h < 0 => Err(Error::Config(
            "session_ttl_hours cannot be negative".to_string(),
        )),
        0 => Ok(None),
        h if h > MAX_SESSION_TTL_HOURS => Err(Error::Config(format!(
            "session_ttl_hours cannot exceed {MAX_SESSION_TTL_HOURS}"
        ))),
        h => Ok(Some(h)),
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            data_dir: PathBuf::from("./data"),
            session_ttl_hours: Some(168),
            allow_admin_registration: true,
        }
    }
}
