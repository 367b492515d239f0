//! Error type for authentication operations

use common::DatabaseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// A required field is missing or malformed
    #[error("{0}")]
    Validation(String),

    /// The email is already registered
    #[error("Email already registered")]
    Conflict,

    /// Unknown email or wrong password; the two are deliberately not told apart
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Missing, malformed, tampered or expired bearer token
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<DatabaseError> for AuthError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::UniqueViolation(_) => AuthError::Conflict,
            other => AuthError::Internal(other.into()),
        }
    }
}
