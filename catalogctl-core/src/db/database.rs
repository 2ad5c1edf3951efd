//! Query seam between gateways and the connection pool

use std::fmt;

use async_trait::async_trait;

/// One row as produced by the engine, before it is decoded into a row shape.
pub type JsonRow = serde_json::Value;

/// Scalar bind parameter for `$n` placeholders.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl fmt::Display for SqlParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(v) => write!(f, "'{}'", v),
            Self::Bool(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for SqlParam {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for SqlParam {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<f64> for SqlParam {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for SqlParam {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for SqlParam {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<bool> for SqlParam {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("failed to decode {resource} row: {source}")]
    Decode {
        resource: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Query capability shared by every gateway.
///
/// Read statements go through [`Database::fetch_rows`], write statements
/// through [`Database::execute`], which reports the affected-row count.
/// Implementations fail by returning `Err`; they never panic on engine errors.
#[async_trait]
pub trait Database: Send + Sync {
    /// Run a read statement whose single output column is a JSON row.
    async fn fetch_rows(&self, sql: &str, params: &[SqlParam]) -> Result<Vec<JsonRow>, DbError>;

    /// Run a write statement and return the number of affected rows.
    async fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<u64, DbError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_from_keys() {
        assert_eq!(SqlParam::from(7_i32), SqlParam::Int(7));
        assert_eq!(SqlParam::from("s1"), SqlParam::Text("s1".into()));
        assert_eq!(SqlParam::from(String::from("s2")), SqlParam::Text("s2".into()));
    }

    #[test]
    fn param_display_quotes_text() {
        assert_eq!(SqlParam::Int(1).to_string(), "1");
        assert_eq!(SqlParam::Text("s1".into()).to_string(), "'s1'");
    }

    #[test]
    fn decode_error_names_resource() {
        let source = serde_json::from_str::<u8>("\"x\"").unwrap_err();
        let err = DbError::Decode {
            resource: "titles",
            source,
        };
        assert!(err.to_string().starts_with("failed to decode titles row"));
    }
}
