//! catalogctl-core: resource query gateways
//!
//! Lists and deletes rows of the players and titles catalogs through one
//! generic [`ResourceGateway`]. Query failures never escape a gateway; they
//! come back as [`Listing::Unavailable`] or `false`.

pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod gateway;
pub mod resources;
pub mod validation;

pub use catalog::Catalog;
pub use config::{CatalogConfig, DatabaseConfig, DiagnosticsConfig, ErrorDetail, ResourceConfig};
pub use db::{create_pool, Database, DbError, PgDatabase, SqlParam};
pub use error::{CatalogError, Result};
pub use gateway::{
    Deletable, DeleteOutcome, Listable, Listing, Resource, ResourceGateway, TableSpec,
    ERROR_SENTINEL,
};
pub use resources::{PlayerCard, Players, PlayersGateway, Title, Titles, TitlesGateway};
