use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The submitted email already has a waitlist entry. Expected outcome,
    /// surfaced to the caller as a conflict rather than a failure.
    #[error("Email already registered")]
    DuplicateEmail,

    /// The signup count could not be read from storage.
    #[error("Count unavailable: {0}")]
    CountUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;
