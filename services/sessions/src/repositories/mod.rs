//! Session storage

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::DatabaseResult;
use uuid::Uuid;

use crate::models::{DraftContent, Session, SessionStatus};

pub mod memory;
pub mod postgres;

pub use memory::InMemorySessionRepository;
pub use postgres::PgSessionRepository;

/// Persistence port for sessions
///
/// Every owner-scoped lookup and update matches on both `id` and `owner_id`,
/// so a session owned by someone else behaves exactly like a missing one.
/// Updates must be atomic per record.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Store a newly created session
    async fn insert(&self, session: &Session) -> DatabaseResult<Session>;

    /// All sessions in `status`, newest-created first
    async fn find_by_status(&self, status: SessionStatus) -> DatabaseResult<Vec<Session>>;

    /// All sessions owned by `owner_id`, newest-created first
    async fn find_by_owner(&self, owner_id: Uuid) -> DatabaseResult<Vec<Session>>;

    async fn find_by_id_and_owner(
        &self,
        id: Uuid,
        owner_id: Uuid,
    ) -> DatabaseResult<Option<Session>>;

    /// Overwrite the editable fields and force the status back to draft
    ///
    /// Returns `None` when no session with that id belongs to `owner_id`.
    async fn update_draft(
        &self,
        id: Uuid,
        owner_id: Uuid,
        content: &DraftContent,
        updated_at: DateTime<Utc>,
    ) -> DatabaseResult<Option<Session>>;

    /// Mark the session published
    ///
    /// Returns `None` when no session with that id belongs to `owner_id`.
    async fn publish(
        &self,
        id: Uuid,
        owner_id: Uuid,
        updated_at: DateTime<Utc>,
    ) -> DatabaseResult<Option<Session>>;

    /// Whether the backing store is reachable
    async fn health_check(&self) -> bool;
}
