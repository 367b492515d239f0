//! In-memory session repository for tests and local runs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::DatabaseResult;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::SessionRepository;
use crate::models::{DraftContent, Session, SessionStatus};

/// Sessions kept in insertion order
#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<Vec<Session>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Newest-created first; ties keep the later insert in front
    fn newest_first<'a>(sessions: impl DoubleEndedIterator<Item = &'a Session>) -> Vec<Session> {
        let mut out: Vec<Session> = sessions.rev().cloned().collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        out
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn insert(&self, session: &Session) -> DatabaseResult<Session> {
        self.sessions.write().await.push(session.clone());
        Ok(session.clone())
    }

    async fn find_by_status(&self, status: SessionStatus) -> DatabaseResult<Vec<Session>> {
        let sessions = self.sessions.read().await;
        Ok(Self::newest_first(
            sessions.iter().filter(|s| s.status == status),
        ))
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> DatabaseResult<Vec<Session>> {
        let sessions = self.sessions.read().await;
        Ok(Self::newest_first(
            sessions.iter().filter(|s| s.owner_id == owner_id),
        ))
    }

    async fn find_by_id_and_owner(
        &self,
        id: Uuid,
        owner_id: Uuid,
    ) -> DatabaseResult<Option<Session>> {
        let sessions = self.sessions.read().await;
        Ok(sessions
            .iter()
            .find(|s| s.id == id && s.owner_id == owner_id)
            .cloned())
    }

    async fn update_draft(
        &self,
        id: Uuid,
        owner_id: Uuid,
        content: &DraftContent,
        updated_at: DateTime<Utc>,
    ) -> DatabaseResult<Option<Session>> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions
            .iter_mut()
            .find(|s| s.id == id && s.owner_id == owner_id)
            .map(|session| {
                session.apply_draft(content, updated_at);
                session.clone()
            }))
    }

    async fn publish(
        &self,
        id: Uuid,
        owner_id: Uuid,
        updated_at: DateTime<Utc>,
    ) -> DatabaseResult<Option<Session>> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions
            .iter_mut()
            .find(|s| s.id == id && s.owner_id == owner_id)
            .map(|session| {
                session.publish(updated_at);
                session.clone()
            }))
    }

    async fn health_check(&self) -> bool {
        true
    }
}
