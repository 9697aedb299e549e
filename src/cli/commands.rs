use clap::Subcommand;

#[derive(Subcommand)]
pub enum AdminCommands {
    /// Initialize the data directory and database
    Init {
        /// Data directory for the database and config file
        #[arg(long, default_value = "./data")]
        data_dir: String,

        /// Skip interactive prompts
        #[arg(long)]
        non_interactive: bool,
    },

    /// Create an admin account
    CreateAdmin {
        /// Data directory for the database and config file
        #[arg(long, default_value = "./data")]
        data_dir: String,

        /// Email used to sign in
        #[arg(long)]
        email: Option<String>,

        /// Display name
        #[arg(long)]
        full_name: Option<String>,

        /// Password (at least 6 characters)
        #[arg(long)]
        password: Option<String>,

        /// Fail instead of prompting for missing values
        #[arg(long)]
        non_interactive: bool,
    },

    /// Show counts of classes, subjects, teachers and lessons
    Info {
        /// Data directory for the database and config file
        #[arg(long, default_value = "./data")]
        data_dir: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
