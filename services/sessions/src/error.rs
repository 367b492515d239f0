//! Error type for session lifecycle operations

use common::DatabaseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    /// A required field is missing or empty
    #[error("{0}")]
    Validation(String),

    /// No session with that id belongs to the caller
    ///
    /// Returned both when the session does not exist and when it belongs to
    /// someone else.
    #[error("Session not found")]
    NotFound,

    /// The store failed or returned something unusable
    #[error("Internal error: {0}")]
    Internal(#[from] DatabaseError),
}
