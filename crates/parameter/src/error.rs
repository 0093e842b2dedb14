/// Error type for prop catalog and schema operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropError {
    /// Catalog entry with the given key was not found.
    #[error("prop not found in catalog: `{key}`")]
    NotFound { key: String },

    /// Value type does not match the prop's declared kind.
    #[error("invalid type for `{key}`: expected {expected_type}, got {actual_details}")]
    InvalidType {
        key: String,
        expected_type: String,
        actual_details: String,
    },
}

impl PropError {
    /// Broad error category for grouping in logs.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::NotFound { .. } => "lookup",
            Self::InvalidType { .. } => "type",
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::NotFound { .. } => "PROP_NOT_FOUND",
            Self::InvalidType { .. } => "PROP_INVALID_TYPE",
        }
    }

    /// Whether the operation might succeed if retried with the same
    /// input. Prop errors are deterministic, so never.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}
