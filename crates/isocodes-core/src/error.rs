// crates/isocodes-core/src/error.rs

//! Error types for the ISO code catalogs.
//!
//! Lookups that simply find nothing are *not* errors: they return `None`
//! (or the caller-supplied default). Everything here signals misuse of the
//! API or a malformed catalog document.

use thiserror::Error;

/// Top-level error type for catalog bootstrap and queries.
#[derive(Debug, Error)]
pub enum IsoError {
    /// `get` was called with zero or more than one selection criterion.
    #[error("Only one criteria may be given, got {0}")]
    CriteriaCount(usize),

    /// A query referenced a field that is not part of the record schema.
    #[error("{record} allows get() only for {allowed}; unknown field `{field}`")]
    InvalidField {
        record: &'static str,
        field: String,
        allowed: String,
    },

    /// A query value was not text.
    #[error("The value {value} for `{field}` must be a string")]
    InvalidValueType { field: String, value: String },

    /// `search` / `lookup` on a record type without searchable fields.
    #[error("Method not available for {0}: no searchable fields declared")]
    NoSearchableFields(&'static str),

    /// A catalog document does not match the closed record schema.
    #[error("Schema error in catalog {catalog}: {message}")]
    Schema { catalog: String, message: String },

    #[error("Dataset not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure classes callers are expected to distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong number of criteria.
    Argument,
    /// Unknown field, either in a query or in loaded data.
    Schema,
    /// Non-text value where text is required.
    Type,
    /// Operation not supported by the record type.
    Capability,
    /// Dataset could not be read.
    Io,
}

impl IsoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            IsoError::CriteriaCount(_) => ErrorKind::Argument,
            IsoError::InvalidField { .. } | IsoError::Schema { .. } => ErrorKind::Schema,
            IsoError::InvalidValueType { .. } => ErrorKind::Type,
            IsoError::NoSearchableFields(_) => ErrorKind::Capability,
            IsoError::NotFound(_) | IsoError::Io(_) | IsoError::Json(_) => ErrorKind::Io,
        }
    }

    /// Classifies a `serde_json` failure while decoding the catalog `catalog`.
    ///
    /// Data errors (unknown field, missing field, wrong type) violate the
    /// closed schema. A failing reader surfaces as [`IsoError::Io`]; anything
    /// else is a malformed document.
    pub(crate) fn from_document(catalog: &str, err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Data => IsoError::Schema {
                catalog: catalog.to_string(),
                message: err.to_string(),
            },
            serde_json::error::Category::Io => IsoError::Io(err.into()),
            _ => IsoError::Json(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, IsoError>;
