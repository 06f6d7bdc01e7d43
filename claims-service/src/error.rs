use error_common::PlatformError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClaimsError {
    #[error("Invalid claim ID")]
    InvalidClaimId,

    #[error("Code reference store error: {0}")]
    CodeStore(String),

    #[error("Fixture error: {0}")]
    Fixture(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ClaimsResult<T> = Result<T, ClaimsError>;

impl From<ClaimsError> for PlatformError {
    fn from(error: ClaimsError) -> Self {
        match error {
            ClaimsError::InvalidClaimId => PlatformError::ValidationError(error.to_string()),
            ClaimsError::Database(_) | ClaimsError::Migration(_) | ClaimsError::CodeStore(_) => {
                PlatformError::DatabaseError(error.to_string())
            }
            ClaimsError::Fixture(_) | ClaimsError::Io(_) => PlatformError::ConfigError(error.to_string()),
            ClaimsError::Serialization(_) => PlatformError::InternalError(error.to_string()),
        }
    }
}
