//! Players command - list and remove player cards

use anyhow::Result;
use clap::{Parser, Subcommand};

use catalogctl_core::CatalogConfig;

use super::{open_catalog, run_list, run_remove};

#[derive(Parser, Debug)]
#[command(about = "Game-card catalog (player cards)")]
pub struct PlayersArgs {
    #[command(subcommand)]
    pub command: PlayersCommand,
}

#[derive(Subcommand, Debug)]
pub enum PlayersCommand {
    /// List every player card as JSON
    List,
    /// Remove a player card (prints true when exactly one card was removed)
    Remove {
        /// Player id of the card to remove
        playerid: i64,
        /// Print removed, not_found or failed instead of true/false
        #[arg(long)]
        detailed: bool,
    },
}

pub async fn run_players(args: PlayersArgs, config: &CatalogConfig) -> Result<()> {
    let (db, catalog) = open_catalog(config).await?;

    let result = match args.command {
        PlayersCommand::List => run_list(catalog.players()).await,
        PlayersCommand::Remove { playerid, detailed } => {
            run_remove(catalog.players(), playerid, detailed).await
        }
    };

    db.close().await;
    result
}
