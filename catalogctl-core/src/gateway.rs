//! Resource query gateway
//!
//! One generic implementation of "list every row" and "delete by key" over a
//! shared [`Database`]. The gateway is the terminal error boundary: engine
//! failures are logged and turned into sentinel values, never returned as
//! errors and never retried.
//!
//! | Engine outcome        | `list_all`              | `remove_by_key` | `delete_outcome` |
//! |-----------------------|-------------------------|-----------------|------------------|
//! | rows / 1 affected     | `Listing::Rows`         | `true`          | `Removed`        |
//! | 0 affected            | n/a                     | `false`         | `NotFound`       |
//! | error                 | `Listing::Unavailable`  | `false`         | `Failed`         |

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};

use crate::config::{DiagnosticsConfig, ErrorDetail, ResourceConfig};
use crate::db::{Database, DbError, JsonRow, SqlParam};
use crate::validation::{Identifier, ValidationError};

/// Returned in place of rows when listing fails.
pub const ERROR_SENTINEL: &str = "error, verifique os logs do servidor";

/// A resource collection the gateway can serve.
pub trait Resource: Send + Sync + 'static {
    /// Row shape. The catalogs use [`JsonRow`] so rows pass through untouched;
    /// a narrower type makes any row that does not fit a listing failure.
    type Row: DeserializeOwned + Serialize + Send + Sync;
    /// Key type bound as `$1` in deletes.
    type Key: Into<SqlParam> + Send;

    /// Short name used in logs and errors.
    const NAME: &'static str;
    const DEFAULT_TABLE: &'static str;
    const DEFAULT_KEY_COLUMN: &'static str;
}

/// Result of [`Listable::list_all`]: the rows, or the error sentinel.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<T> {
    Rows(Vec<T>),
    Unavailable,
}

impl<T> Listing<T> {
    pub fn rows(&self) -> Option<&[T]> {
        match self {
            Self::Rows(rows) => Some(rows),
            Self::Unavailable => None,
        }
    }

    pub fn into_rows(self) -> Option<Vec<T>> {
        match self {
            Self::Rows(rows) => Some(rows),
            Self::Unavailable => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }

    /// The sentinel string when listing failed.
    pub fn sentinel(&self) -> Option<&'static str> {
        self.is_unavailable().then_some(ERROR_SENTINEL)
    }
}

impl Listing<JsonRow> {
    /// Decode raw rows into a typed view. The listing itself is left as
    /// received; an unavailable listing stays unavailable.
    pub fn typed<T: DeserializeOwned>(&self) -> Result<Listing<T>, serde_json::Error> {
        match self {
            Self::Rows(rows) => rows
                .iter()
                .cloned()
                .map(serde_json::from_value)
                .collect::<Result<Vec<T>, _>>()
                .map(Listing::Rows),
            Self::Unavailable => Ok(Listing::Unavailable),
        }
    }
}

/// Serializes as the bare row array or the bare sentinel string.
impl<T: Serialize> Serialize for Listing<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Rows(rows) => rows.serialize(serializer),
            Self::Unavailable => serializer.serialize_str(ERROR_SENTINEL),
        }
    }
}

/// Tagged delete result that [`Deletable::remove_by_key`] collapses to a bool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Removed,
    NotFound,
    Failed,
}

impl DeleteOutcome {
    /// Map an affected-row count. More than one row breaks key uniqueness.
    pub fn from_affected(affected: u64) -> Self {
        match affected {
            0 => Self::NotFound,
            1 => Self::Removed,
            _ => Self::Failed,
        }
    }

    pub fn is_removed(self) -> bool {
        self == Self::Removed
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Removed => "removed",
            Self::NotFound => "not_found",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for DeleteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability: list the whole collection.
#[async_trait]
pub trait Listable: Send + Sync {
    type Row: Send;

    async fn list_all(&self) -> Listing<Self::Row>;
}

/// Capability: delete one row by key.
#[async_trait]
pub trait Deletable: Send + Sync {
    type Key: Send + 'static;

    async fn delete_outcome(&self, key: Self::Key) -> DeleteOutcome;

    /// `true` iff exactly one row was deleted. Not-found and engine failure
    /// both yield `false`; use [`Deletable::delete_outcome`] to tell them apart.
    async fn remove_by_key(&self, key: Self::Key) -> bool {
        self.delete_outcome(key).await.is_removed()
    }
}

/// Validated target of a gateway: table plus key column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    table: Identifier,
    key_column: Identifier,
}

impl TableSpec {
    pub fn new(table: &str, key_column: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            table: Identifier::new("table", table)?,
            key_column: Identifier::new("key column", key_column)?,
        })
    }

    /// Resolve a resource's configured names, falling back to its defaults.
    pub fn for_resource<R: Resource>(resource: &ResourceConfig) -> Result<Self, ValidationError> {
        Self::new(
            resource.table_or(R::DEFAULT_TABLE),
            resource.key_column_or(R::DEFAULT_KEY_COLUMN),
        )
    }

    pub fn table(&self) -> &Identifier {
        &self.table
    }

    pub fn key_column(&self) -> &Identifier {
        &self.key_column
    }

    pub fn select_all_sql(&self) -> String {
        format!("SELECT to_jsonb(t) AS row FROM {} t", self.table)
    }

    pub fn delete_by_key_sql(&self) -> String {
        format!("DELETE FROM {} WHERE {} = $1", self.table, self.key_column)
    }
}

/// Generic gateway over one resource table.
pub struct ResourceGateway<R: Resource> {
    db: Arc<dyn Database>,
    spec: TableSpec,
    error_detail: ErrorDetail,
    select_sql: String,
    delete_sql: String,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> ResourceGateway<R> {
    pub fn new(db: Arc<dyn Database>, spec: TableSpec) -> Self {
        Self {
            db,
            select_sql: spec.select_all_sql(),
            delete_sql: spec.delete_by_key_sql(),
            spec,
            error_detail: ErrorDetail::default(),
            _resource: PhantomData,
        }
    }

    /// Gateway over the resource's default table and key column.
    pub fn with_defaults(db: Arc<dyn Database>) -> Result<Self, ValidationError> {
        let spec = TableSpec::new(R::DEFAULT_TABLE, R::DEFAULT_KEY_COLUMN)?;
        Ok(Self::new(db, spec))
    }

    pub fn from_config(
        db: Arc<dyn Database>,
        resource: &ResourceConfig,
        diagnostics: &DiagnosticsConfig,
    ) -> Result<Self, ValidationError> {
        let spec = TableSpec::for_resource::<R>(resource)?;
        Ok(Self::new(db, spec).with_error_detail(diagnostics.error_detail))
    }

    pub fn with_error_detail(mut self, error_detail: ErrorDetail) -> Self {
        self.error_detail = error_detail;
        self
    }

    pub fn spec(&self) -> &TableSpec {
        &self.spec
    }

    async fn fetch_all(&self) -> Result<Vec<R::Row>, DbError> {
        let rows = self.db.fetch_rows(&self.select_sql, &[]).await?;
        rows.into_iter()
            .map(|row| {
                serde_json::from_value(row).map_err(|source| DbError::Decode {
                    resource: R::NAME,
                    source,
                })
            })
            .collect()
    }

    fn report_failure(&self, operation: &'static str, key: Option<&SqlParam>, err: &DbError) {
        let key = key.map(tracing::field::display);
        match self.error_detail {
            ErrorDetail::Off => {}
            ErrorDetail::Summary => tracing::error!(
                resource = R::NAME,
                table = %self.spec.table,
                operation,
                key,
                error = %err,
                "query failed"
            ),
            ErrorDetail::Detailed => tracing::error!(
                resource = R::NAME,
                table = %self.spec.table,
                operation,
                key,
                error = ?err,
                "query failed"
            ),
        }
    }
}

#[async_trait]
impl<R: Resource> Listable for ResourceGateway<R> {
    type Row = R::Row;

    async fn list_all(&self) -> Listing<R::Row> {
        match self.fetch_all().await {
            Ok(rows) => {
                tracing::debug!(resource = R::NAME, count = rows.len(), "listed rows");
                Listing::Rows(rows)
            }
            Err(err) => {
                self.report_failure("list_all", None, &err);
                Listing::Unavailable
            }
        }
    }
}

#[async_trait]
impl<R: Resource> Deletable for ResourceGateway<R>
where
    R::Key: 'static,
{
    type Key = R::Key;

    async fn delete_outcome(&self, key: R::Key) -> DeleteOutcome {
        let key: SqlParam = key.into();
        match self.db.execute(&self.delete_sql, std::slice::from_ref(&key)).await {
            Ok(affected) => {
                let outcome = DeleteOutcome::from_affected(affected);
                if affected > 1 {
                    tracing::warn!(
                        resource = R::NAME,
                        key = %key,
                        affected,
                        "delete matched more than one row"
                    );
                } else {
                    tracing::debug!(resource = R::NAME, key = %key, %outcome, "delete finished");
                }
                outcome
            }
            Err(err) => {
                self.report_failure("remove_by_key", Some(&key), &err);
                DeleteOutcome::Failed
            }
        }
    }
}
