//! Error types for CardioRisk

/// Result type alias using CardioRisk's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for CardioRisk operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required input field is absent from the request payload
    #[error("missing field: {field}")]
    MissingField {
        /// Canonical name of the missing field
        field: String,
    },

    /// The inference model or its scaler failed to load
    #[error("resource unavailable: {0}")]
    ResourceUnavailable(String),

    /// Unexpected failure while deriving features or running inference
    #[error("computation error: {0}")]
    Computation(String),

    /// Payload is not a usable request at all (e.g. not a JSON object)
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a new resource unavailable error
    pub fn resource_unavailable(msg: impl Into<String>) -> Self {
        Self::ResourceUnavailable(msg.into())
    }

    /// Create a new computation error
    pub fn computation(msg: impl Into<String>) -> Self {
        Self::Computation(msg.into())
    }

    /// Create a new invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Stable machine-readable kind, used in error bodies and metric labels
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "missing_field",
            Self::ResourceUnavailable(_) => "resource_unavailable",
            Self::InvalidRequest(_) => "invalid_request",
            Self::Computation(_) | Self::Serialization(_) => "computation_error",
            Self::Config(_) | Self::Io(_) => "internal_error",
        }
    }

    /// Whether the caller can fix this by changing the request
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingField { .. } | Self::InvalidRequest(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_names_field() {
        let err = Error::missing_field("glucose");
        assert_eq!(err.to_string(), "missing field: glucose");
        assert_eq!(err.kind(), "missing_field");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_server_side_kinds() {
        assert_eq!(Error::resource_unavailable("x").kind(), "resource_unavailable");
        assert_eq!(Error::computation("x").kind(), "computation_error");
        assert!(!Error::computation("x").is_client_error());
        assert!(!Error::resource_unavailable("x").is_client_error());
    }
}
