//! API models for request and response payloads
//!
//! Request bodies default every field so that a missing value reaches the
//! service-level validation and gets its proper error message.

use serde::{Deserialize, Serialize};
use sessions::{SaveDraftInput, Session, SessionError, parse_session_id};
use uuid::Uuid;

/// Request for user registration and login
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// Response carrying only a message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response for successful login
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Request for saving a draft
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SaveDraftRequest {
    pub id: Option<String>,
    pub title: Option<String>,
    pub tags: Option<Vec<String>>,
    #[serde(alias = "resourceUrl")]
    pub json_file_url: Option<String>,
}

impl SaveDraftRequest {
    /// The title is checked before the id, so a blank title is always a
    /// validation error whatever id accompanies it.
    pub fn into_input(self) -> Result<SaveDraftInput, SessionError> {
        let input = SaveDraftInput::new(
            None,
            self.title,
            self.tags.unwrap_or_default(),
            self.json_file_url,
        )?;
        let id = optional_id(self.id.as_deref())?;
        Ok(input.with_id(id))
    }
}

/// Request for publishing a session
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PublishRequest {
    pub id: Option<String>,
}

/// Response wrapping a single session after a mutation
#[derive(Debug, Serialize)]
pub struct SessionEnvelope {
    pub message: String,
    pub session: Session,
}

/// Blank ids count as absent; anything else has to name a session.
pub fn optional_id(raw: Option<&str>) -> Result<Option<Uuid>, SessionError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => parse_session_id(raw).map(Some),
    }
}
