//! Database layer - the query seam and its PostgreSQL implementation
//!
//! # Design Principles
//!
//! - Gateways talk to a [`Database`], never to a pool directly
//! - One process-wide pool, created once and closed at shutdown
//! - Rows cross the seam as JSON objects (`to_jsonb(t)`)

pub mod database;
pub mod pool;

#[cfg(test)]
pub(crate) mod mock;

pub use database::{Database, DbError, JsonRow, SqlParam};
pub use pool::{create_pool, create_pool_with_options, PgDatabase};
