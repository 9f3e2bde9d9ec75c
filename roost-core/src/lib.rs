pub mod format;
pub mod repository;
pub mod status;

pub use repository::{
    BookingRepository, ProfileRepository, PropertyRepository, RepoError, RepoResult,
};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
