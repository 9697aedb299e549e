use std::sync::Arc;

use anyhow::bail;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use timegrid::cli::{AdminCommands, run_create_admin, run_info, run_init};
use timegrid::config::{ServerConfig, validate_ttl};
use timegrid::server::{AppState, create_router};
use timegrid::store::{SqliteStore, Store};

#[derive(Parser)]
#[command(name = "timegrid")]
#[command(about = "School timetable server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Administrative commands
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },

    /// Start the server
    Serve {
        /// Host to bind to (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides the config file)
        #[arg(long, short)]
        port: Option<u16>,

        /// Data directory for the database and config file
        #[arg(long, default_value = "./data")]
        data_dir: String,

        /// Hours a sign-in stays valid; 0 disables expiry
        #[arg(long)]
        session_ttl_hours: Option<i64>,

        /// Reject self-service admin registration
        #[arg(long)]
        disable_admin_registration: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("timegrid=info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Admin { command } => match command {
            AdminCommands::Init {
                data_dir,
                non_interactive,
            } => run_init(data_dir, non_interactive)?,
            AdminCommands::CreateAdmin {
                data_dir,
                email,
                full_name,
                password,
                non_interactive,
            } => run_create_admin(data_dir, email, full_name, password, non_interactive)?,
            AdminCommands::Info { data_dir, json } => run_info(data_dir, json)?,
        },
        Commands::Serve {
            host,
            port,
            data_dir,
            session_ttl_hours,
            disable_admin_registration,
        } => {
            let mut config = ServerConfig::from_data_dir(data_dir)?;
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(ttl) = session_ttl_hours {
                config.session_ttl_hours = validate_ttl(ttl)?;
            }
            if disable_admin_registration {
                config.allow_admin_registration = false;
            }

            if !config.db_path().exists() {
                bail!("Database not found. Run 'timegrid admin init' first to create it.");
            }

            let store = SqliteStore::new(config.db_path())?;
            store.initialize()?;

            if !store.has_admin()? {
                if config.allow_admin_registration {
                    warn!("No admin account yet. Register one at /admin-register");
                } else {
                    warn!(
                        "No admin account and registration is disabled. Run 'timegrid admin create-admin'"
                    );
                }
            }

            let state = Arc::new(AppState::new(Arc::new(store), &config)?);

            let app = create_router(state);
            let addr = config.socket_addr()?;

            info!("Starting server on {}", addr);

            let listener = tokio::net::TcpListener::bind(addr).await?;
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
