//! Draft/publish lifecycle for owner-scoped sessions
//!
//! `draft -> published` happens only through publish. Any save-draft on an
//! existing session forces it back to `draft`; there is no separate unpublish.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    error::SessionError,
    models::{PublishInput, SaveDraftInput, Session},
    repositories::SessionRepository,
};

#[derive(Clone)]
pub struct SessionLifecycleService {
    sessions: Arc<dyn SessionRepository>,
}

impl SessionLifecycleService {
    pub fn new(sessions: Arc<dyn SessionRepository>) -> Self {
        Self { sessions }
    }

    /// Create a draft, or overwrite one of the owner's sessions and put it
    /// back into draft
    pub async fn save_draft(
        &self,
        owner_id: Uuid,
        input: SaveDraftInput,
    ) -> Result<Session, SessionError> {
        let now = Utc::now();

        match input.id() {
            None => {
                let draft = Session::new_draft(owner_id, input.content().clone(), now);
                let session = self.sessions.insert(&draft).await?;
                info!("Created draft session {} for owner {}", session.id, owner_id);
                Ok(session)
            }
            Some(id) => {
                let session = self
                    .sessions
                    .update_draft(id, owner_id, input.content(), now)
                    .await?
                    .ok_or_else(|| {
                        warn!("Save-draft for session {} by {} matched nothing", id, owner_id);
                        SessionError::NotFound
                    })?;
                info!("Saved draft session {}", session.id);
                Ok(session)
            }
        }
    }

    /// Publish one of the owner's sessions; publishing twice is harmless
    pub async fn publish(
        &self,
        owner_id: Uuid,
        input: PublishInput,
    ) -> Result<Session, SessionError> {
        let id = input.id();
        let session = self
            .sessions
            .publish(id, owner_id, Utc::now())
            .await?
            .ok_or_else(|| {
                warn!("Publish for session {} by {} matched nothing", id, owner_id);
                SessionError::NotFound
            })?;

        info!("Published session {}", session.id);
        Ok(session)
    }

    pub async fn get_owned(&self, owner_id: Uuid, id: Uuid) -> Result<Session, SessionError> {
        self.sessions
            .find_by_id_and_owner(id, owner_id)
            .await?
            .ok_or(SessionError::NotFound)
    }

    /// The owner's sessions, newest-created first
    pub async fn list_owned(&self, owner_id: Uuid) -> Result<Vec<Session>, SessionError> {
        Ok(self.sessions.find_by_owner(owner_id).await?)
    }
}
