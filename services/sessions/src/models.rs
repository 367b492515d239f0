//! Session model, status state machine and validated inputs

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SessionError;

/// Publication state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    #[default]
    Draft,
    Published,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Draft => "draft",
            SessionStatus::Published => "published",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(SessionStatus::Draft),
            "published" => Ok(SessionStatus::Published),
            other => Err(format!("unknown session status '{}'", other)),
        }
    }
}

/// Session entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub tags: Vec<String>,
    pub resource_url: Option<String>,
    pub status: SessionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Build a fresh draft owned by `owner_id`
    pub fn new_draft(owner_id: Uuid, content: DraftContent, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            title: content.title,
            tags: content.tags,
            resource_url: content.resource_url,
            status: SessionStatus::Draft,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the editable fields; any edit puts the session back in draft
    pub fn apply_draft(&mut self, content: &DraftContent, now: DateTime<Utc>) {
        self.title = content.title.clone();
        self.tags = content.tags.clone();
        self.resource_url = content.resource_url.clone();
        self.status = SessionStatus::Draft;
        self.updated_at = now;
    }

    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.status = SessionStatus::Published;
        self.updated_at = now;
    }

    pub fn is_published(&self) -> bool {
        self.status == SessionStatus::Published
    }
}

/// The user-editable part of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftContent {
    pub title: String,
    pub tags: Vec<String>,
    pub resource_url: Option<String>,
}

/// Save-draft request, validated at construction
///
/// Without an id a new session is created; with one, that session is
/// overwritten in place.
#[derive(Debug, Clone)]
pub struct SaveDraftInput {
    id: Option<Uuid>,
    content: DraftContent,
}

impl SaveDraftInput {
    pub fn new(
        id: Option<Uuid>,
        title: Option<String>,
        tags: Vec<String>,
        resource_url: Option<String>,
    ) -> Result<Self, SessionError> {
        let title = title.unwrap_or_default();
        if title.trim().is_empty() {
            return Err(SessionError::Validation("Title is required".to_string()));
        }

        // Tags are kept exactly as sent.
        let resource_url = resource_url.filter(|url| !url.trim().is_empty());

        Ok(Self {
            id,
            content: DraftContent {
                title,
                tags,
                resource_url,
            },
        })
    }

    /// Target an existing session instead of creating one
    pub fn with_id(mut self, id: Option<Uuid>) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    pub fn content(&self) -> &DraftContent {
        &self.content
    }
}

/// Publish request, validated at construction
#[derive(Debug, Clone, Copy)]
pub struct PublishInput {
    id: Uuid,
}

impl PublishInput {
    pub fn new(id: Option<Uuid>) -> Result<Self, SessionError> {
        let id = id.ok_or_else(|| SessionError::Validation("Session ID is required".to_string()))?;
        Ok(Self { id })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
}

/// Parse a caller-supplied session id
///
/// An id that cannot name any session is reported the same way as one that
/// names a session the caller cannot see.
pub fn parse_session_id(raw: &str) -> Result<Uuid, SessionError> {
    Uuid::parse_str(raw.trim()).map_err(|_| SessionError::NotFound)
}
