pub mod models;
pub mod repository;
pub mod password;
pub mod memory;
pub mod user;
pub mod flight;
pub mod booking;

pub use booking::BookingService;
pub use flight::FlightService;
pub use memory::MemoryStore;
pub use password::PasswordHasher;
pub use user::UserService;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

impl CoreError {
    /// Wraps a repository or runtime failure. The detail is kept for logging only.
    pub(crate) fn internal(err: impl std::fmt::Display) -> Self {
        CoreError::InternalError(err.to_string())
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
