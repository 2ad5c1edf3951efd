//! Identifier validation for configurable table and column names
//!
//! Table and key-column names are spliced into SQL text (identifiers cannot be
//! bound as `$n` parameters), so only plain unquoted identifiers are accepted.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// PostgreSQL truncates identifiers beyond NAMEDATALEN - 1 bytes.
const MAX_IDENTIFIER_LEN: usize = 63;

static IDENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("invalid identifier regex"));

/// Validation error for configured names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// String doesn't match the identifier format
    InvalidFormat { field: &'static str, reason: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validated SQL identifier, optionally schema-qualified (`schema.table`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Validate `raw` as an identifier for `field`.
    ///
    /// # Rules
    /// - At most one `.` separating schema and name
    /// - Each part starts with a letter or underscore, then letters, digits, underscores
    /// - Each part at most 63 bytes
    ///
    /// # Example
    /// ```
    /// use catalogctl_core::validation::Identifier;
    ///
    /// assert!(Identifier::new("table", "fifa_players").is_ok());
    /// assert!(Identifier::new("table", "public.netflix_titles").is_ok());
    /// assert!(Identifier::new("table", "players; DROP TABLE x").is_err());
    /// ```
    pub fn new(field: &'static str, raw: &str) -> Result<Self, ValidationError> {
        if raw.is_empty() {
            return Err(ValidationError::Empty { field });
        }

        let parts: Vec<&str> = raw.split('.').collect();
        if parts.len() > 2 {
            return Err(ValidationError::InvalidFormat {
                field,
                reason: "at most one schema qualifier is allowed",
            });
        }

        for part in parts {
            if part.len() > MAX_IDENTIFIER_LEN {
                return Err(ValidationError::TooLong {
                    field,
                    max: MAX_IDENTIFIER_LEN,
                });
            }
            if !IDENT_RE.is_match(part) {
                return Err(ValidationError::InvalidFormat {
                    field,
                    reason: "must start with a letter or underscore and contain only letters, digits and underscores",
                });
            }
        }

        Ok(Self(raw.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
