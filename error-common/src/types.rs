use thiserror::Error;

use crate::codes;

/// Cross-crate error for startup code and the HTTP edge
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Caller supplied input that failed validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Database operation errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Internal system errors
    #[error("Internal error: {0}")]
    InternalError(String),

    /// Wrapped external errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlatformError {
    /// Stable error code for logs and dashboards
    pub fn code(&self) -> &'static str {
        match self {
            Self::ValidationError(_) => codes::validation::INVALID_INPUT,
            Self::NotFound(_) => codes::lookup::CLAIM_NOT_FOUND,
            Self::DatabaseError(_) => codes::database::QUERY_FAILED,
            Self::ConfigError(_) => codes::system::CONFIGURATION,
            Self::InternalError(_) | Self::Other(_) => codes::system::INTERNAL,
        }
    }

    /// Short category name used as a log field
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::ValidationError(_) => "validation",
            Self::NotFound(_) => "not_found",
            Self::DatabaseError(_) => "database",
            Self::ConfigError(_) => "configuration",
            Self::InternalError(_) | Self::Other(_) => "internal",
        }
    }

    /// Whether the failure is the caller's fault rather than ours
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::NotFound(_))
    }
}

/// Result type alias for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
