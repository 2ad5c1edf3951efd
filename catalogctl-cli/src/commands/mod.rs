//! Command implementations for catalogctl CLI

pub mod config;
pub mod players;
pub mod titles;

use anyhow::{Context, Result};
use serde::Serialize;
use std::sync::Arc;

use catalogctl_core::{
    Catalog, CatalogConfig, Deletable, Listable, Listing, PgDatabase, ERROR_SENTINEL,
};

// Re-export dispatcher functions for flat access from main.rs
pub use config::run_config;
pub use players::run_players;
pub use titles::run_titles;

/// Open the process-wide pool and build both gateways over it.
///
/// The caller owns the returned `PgDatabase` and must close it at shutdown.
pub(crate) async fn open_catalog(config: &CatalogConfig) -> Result<(PgDatabase, Catalog)> {
    let db = PgDatabase::connect(&config.database)
        .await
        .context("Failed to create database pool")?;
    let catalog = Catalog::new(Arc::new(db.clone()), config)
        .context("Invalid catalog configuration")?;

    Ok((db, catalog))
}

/// Render a listing: pretty JSON rows, or the bare sentinel line.
pub(crate) fn render_listing<T: Serialize>(listing: &Listing<T>) -> Result<String> {
    match listing {
        Listing::Rows(rows) => {
            serde_json::to_string_pretty(rows).context("Failed to encode rows")
        }
        Listing::Unavailable => Ok(ERROR_SENTINEL.to_string()),
    }
}

pub(crate) async fn run_list<G>(gateway: &G) -> Result<()>
where
    G: Listable,
    G::Row: Serialize,
{
    let listing = gateway.list_all().await;
    println!("{}", render_listing(&listing)?);
    Ok(())
}

pub(crate) async fn run_remove<G: Deletable>(gateway: &G, key: G::Key, detailed: bool) -> Result<()> {
    if detailed {
        println!("{}", gateway.delete_outcome(key).await);
    } else {
        println!("{}", gateway.remove_by_key(key).await);
    }
    Ok(())
}
