use thiserror::Error;

/// Errors that can arise while persisting or editing gear data.
#[derive(Debug, Error)]
pub enum GearError {
    /// Wrapper around IO errors (directory creation, atomic replace, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapper around JSON errors from the persisted gear configuration file.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Wrapper around bincode serialization and deserialization errors.
    #[error("serialization error: {0}")]
    Bincode(#[from] bincode::Error),

    /// Wrapper around sled's error type.
    #[error("sled error: {0}")]
    Sled(#[from] sled::Error),

    /// Returned when fetching a record or configuration key that is not present.
    #[error("not found: {0}")]
    NotFound(String),

    /// Returned when deserializing a record with an unexpected schema version.
    #[error("schema mismatch for {entity}: expected {expected}, got {found}")]
    SchemaMismatch {
        entity: &'static str,
        expected: u8,
        found: u8,
    },

    /// A value that cannot be coerced to the field's type.
    #[error("invalid value for {field}: '{value}'")]
    InvalidValue { field: &'static str, value: String },

    /// A value that is not a member of the governing category list.
    #[error("'{value}' is not a valid {namespace} {category} entry")]
    Validation {
        namespace: &'static str,
        category: &'static str,
        value: String,
    },

    /// An attribute or category name that does not exist.
    #[error("unknown field: {0}")]
    UnknownField(String),
}
