//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during admin authentication.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown username or wrong password.
    ///
    /// Deliberately a single variant: callers must not be able to tell
    /// which half failed, or the login form becomes a username oracle.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// A new password failed the strength requirements.
    #[error("weak password: {0}")]
    WeakPassword(String),

    /// Hashing a password failed.
    #[error("password hashing failed")]
    PasswordHash,

    /// Database operation failed.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}
