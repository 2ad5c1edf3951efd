//! Configuration for catalogctl
//!
//! Loaded from `~/.catalogctl/config.toml` (or an explicit path). Every field
//! has a default, so a missing default file is not an error. `DATABASE_URL`
//! overrides `database.url`.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

use crate::db::pool::{DEFAULT_ACQUIRE_TIMEOUT, DEFAULT_MAX_CONNECTIONS};
use crate::error::{CatalogError, Result};

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/catalog";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub database: DatabaseConfig,
    pub diagnostics: DiagnosticsConfig,
    pub resources: ResourcesConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout_secs: DEFAULT_ACQUIRE_TIMEOUT.as_secs(),
        }
    }
}

/// How much of a swallowed query failure reaches the log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorDetail {
    /// Nothing is logged; the sentinel is the only signal.
    Off,
    /// The error message.
    #[default]
    Summary,
    /// The full error value including its source chain.
    Detailed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    pub error_detail: ErrorDetail,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourcesConfig {
    pub players: ResourceConfig,
    pub titles: ResourceConfig,
}

/// Per-resource overrides; unset fields fall back to the resource's defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_column: Option<String>,
}

impl ResourceConfig {
    pub fn table_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.table.as_deref().unwrap_or(default)
    }

    pub fn key_column_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.key_column.as_deref().unwrap_or(default)
    }
}

impl CatalogConfig {
    /// Load config from `path`, or from `~/.catalogctl/config.toml` when `None`.
    ///
    /// An explicit path must exist; the default path may be absent, in which
    /// case defaults are used. Environment overrides are applied last.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CatalogError::config(format!(
                        "Config not found at {:?}",
                        path
                    )));
                }
                Self::from_file(path)?
            }
            None => {
                let default_path = Self::config_path();
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    tracing::debug!(path = %default_path.display(), "no config file, using defaults");
                    Self::default()
                }
            }
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Get config file path: ~/.catalogctl/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".catalogctl/config.toml")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CatalogError::config_parse(path, e))
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("DATABASE_URL").filter(|url| !url.is_empty()) {
            self.database.url = url;
        }
    }

    /// Render as TOML with the database password masked.
    pub fn to_redacted_toml(&self) -> Result<String> {
        let mut shown = self.clone();
        shown.database.url = redact_url(&self.database.url);
        Ok(toml::to_string_pretty(&shown)?)
    }
}

const MASK: &str = "****";

/// Mask the password in a database URL, both the `user:password@` form and a
/// libpq-style `password=` query parameter.
pub fn redact_url(raw: &str) -> String {
    let Ok(mut url) = Url::parse(raw) else {
        return "<invalid database url>".to_string();
    };

    if url.password().is_some() {
        // Only fails for URLs without a host, which cannot carry a password.
        let _ = url.set_password(Some(MASK));
    }

    if url.query_pairs().any(|(key, _)| key == "password") {
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(key, value)| {
                let value = if key == "password" {
                    MASK.to_string()
                } else {
                    value.into_owned()
                };
                (key.into_owned(), value)
            })
            .collect();
        url.query_pairs_mut().clear().extend_pairs(pairs);
    }

    url.to_string()
}
