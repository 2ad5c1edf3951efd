//! Both catalogs over one shared database handle

use std::sync::Arc;

use crate::config::CatalogConfig;
use crate::db::Database;
use crate::error::{CatalogError, Result};
use crate::gateway::{Resource, TableSpec};
use crate::resources::{Players, PlayersGateway, Titles, TitlesGateway};

/// The players and titles gateways, sharing one pool.
pub struct Catalog {
    players: PlayersGateway,
    titles: TitlesGateway,
}

impl Catalog {
    /// Build both gateways from `config`. Fails only on invalid table or
    /// key-column names; nothing is queried here.
    pub fn new(db: Arc<dyn Database>, config: &CatalogConfig) -> Result<Self> {
        let diagnostics = &config.diagnostics;

        let players =
            PlayersGateway::from_config(Arc::clone(&db), &config.resources.players, diagnostics)
                .map_err(|e| CatalogError::validation(Players::NAME, e))?;
        let titles = TitlesGateway::from_config(db, &config.resources.titles, diagnostics)
            .map_err(|e| CatalogError::validation(Titles::NAME, e))?;

        Ok(Self { players, titles })
    }

    /// Check every configured table and key-column name without a database.
    pub fn validate(config: &CatalogConfig) -> Result<()> {
        TableSpec::for_resource::<Players>(&config.resources.players)
            .map_err(|e| CatalogError::validation(Players::NAME, e))?;
        TableSpec::for_resource::<Titles>(&config.resources.titles)
            .map_err(|e| CatalogError::validation(Titles::NAME, e))?;
        Ok(())
    }

    pub fn players(&self) -> &PlayersGateway {
        &self.players
    }

    pub fn titles(&self) -> &TitlesGateway {
        &self.titles
    }
}
