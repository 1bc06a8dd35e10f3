use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// Unparsable record or missing required field. Isolated per record;
    /// whether it aborts the whole load is deployment policy.
    #[error("malformed descriptor {file}: {reason}")]
    MalformedDescriptor { file: String, reason: String },

    /// No version-control provenance for a record. Non-fatal, the entry is
    /// loaded with an unset timestamp.
    #[error("no history found for {file}")]
    HistoryUnavailable { file: String },

    /// Fetch or parse failure on the external color document. Non-fatal,
    /// yields an empty color map.
    #[error("color source unavailable: {reason}")]
    ColorSourceUnavailable { reason: String },

    /// Unrecognized filter/sort tag in the query string. Dropped silently by
    /// the codec, never surfaced to the user.
    #[error("invalid query value for {key}: {value:?}")]
    InvalidQueryValue { key: &'static str, value: String },

    #[error("invalid configuration for {field}: {reason}")]
    InvalidConfigValue { field: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
