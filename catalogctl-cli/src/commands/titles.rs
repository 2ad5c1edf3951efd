//! Titles command - list and remove media titles

use anyhow::Result;
use clap::{Parser, Subcommand};

use catalogctl_core::CatalogConfig;

use super::{open_catalog, run_list, run_remove};

#[derive(Parser, Debug)]
#[command(about = "Media-title catalog (shows and films)")]
pub struct TitlesArgs {
    #[command(subcommand)]
    pub command: TitlesCommand,
}

#[derive(Subcommand, Debug)]
pub enum TitlesCommand {
    /// List every title as JSON
    List,
    /// Remove a title (prints true when exactly one title was removed)
    Remove {
        /// Show id of the title to remove (e.g. s1)
        show_id: String,
        /// Print removed, not_found or failed instead of true/false
        #[arg(long)]
        detailed: bool,
    },
}

pub async fn run_titles(args: TitlesArgs, config: &CatalogConfig) -> Result<()> {
    let (db, catalog) = open_catalog(config).await?;

    let result = match args.command {
        TitlesCommand::List => run_list(catalog.titles()).await,
        TitlesCommand::Remove { show_id, detailed } => {
            run_remove(catalog.titles(), show_id, detailed).await
        }
    };

    db.close().await;
    result
}
