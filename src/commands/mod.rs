//! CLI command definitions and dispatch.

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

use devboard_core::config::AppConfig;
use devboard_core::error::AppError;

/// Devboard: notifications backend for developer dashboards
#[derive(Debug, Parser)]
#[command(name = "devboard-server", version, about, long_about = None)]
pub struct Cli {
    /// Environment overlay to load (`config/{env}.toml`)
    #[arg(short, long, global = true, env = "DEVBOARD_ENV", default_value = "development")]
    pub env: String,

    /// Subcommand to execute (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Apply pending database migrations and exit
    Migrate,
}

impl Cli {
    /// Execute the selected command against the loaded configuration.
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        match &self.command {
            Some(Commands::Serve(args)) => serve::execute(args, config).await,
            Some(Commands::Migrate) => migrate::execute(config).await,
            None => serve::execute(&serve::ServeArgs::default(), config).await,
        }
    }
}
