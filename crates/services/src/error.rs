//! Shared error types for the services crate.

use thiserror::Error;

use math_core::model::UserError;
use storage::repository::StorageError;

/// Errors emitted by `AuthService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    #[error("player name cannot be empty")]
    EmptyUsername,
    #[error("this player name already exists")]
    UsernameTaken,
    #[error("invalid player name or password")]
    InvalidCredentials,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<UserError> for AuthError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::EmptyUsername => AuthError::EmptyUsername,
        }
    }
}

/// Errors emitted by `ProgressService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
