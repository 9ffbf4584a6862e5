use thiserror::Error;

/// Message shown when a save would break name uniqueness.
pub const DUPLICATE_NAME_MESSAGE: &str = "A recipe with this name already exists.";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    #[error("{}", DUPLICATE_NAME_MESSAGE)]
    DuplicateName(String),
    /// The stored collection exists but does not decode; it is left untouched.
    #[error("saved recipes could not be read: {0}")]
    Unreadable(String),
}

/// Errors from the recipe generation endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("service returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("invalid endpoint: {0}")]
    Endpoint(String),
}
