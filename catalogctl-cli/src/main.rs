//! catalogctl CLI - list and remove rows of the players and titles catalogs
//!
//! Every query goes through a resource gateway, so database failures show up
//! as the error sentinel (for listings) or `false` (for removals) rather than
//! as a failing exit status. Only setup problems (bad config, no pool) exit
//! non-zero.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use catalogctl_core::CatalogConfig;

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "catalogctl",
    author,
    version,
    about = "List and remove rows of the players and titles catalogs"
)]
struct Cli {
    /// Config file (default: ~/.catalogctl/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Database URL (overrides config file)
    #[arg(long, global = true, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Game-card catalog (list, remove)
    Players(commands::players::PlayersArgs),
    /// Media-title catalog (list, remove)
    Titles(commands::titles::TitlesArgs),
    /// Inspect catalogctl configuration (show, path, validate)
    Config(commands::config::ConfigArgs),
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Self::Players(_) => "players",
            Self::Titles(_) => "titles",
            Self::Config(_) => "config",
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap reads DATABASE_URL
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    let mut config = CatalogConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(url) = cli.database_url {
        config.database.url = url;
    }

    tracing::debug!(command = cli.command.name(), "dispatching command");

    match cli.command {
        Commands::Players(args) => commands::run_players(args, &config).await,
        Commands::Titles(args) => commands::run_titles(args, &config).await,
        Commands::Config(args) => commands::run_config(args, &config),
    }
}
