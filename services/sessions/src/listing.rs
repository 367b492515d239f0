//! Public, read-only view over published sessions

use std::sync::Arc;

use crate::{
    error::SessionError,
    models::{Session, SessionStatus},
    repositories::SessionRepository,
};

#[derive(Clone)]
pub struct PublicListingService {
    sessions: Arc<dyn SessionRepository>,
}

impl PublicListingService {
    pub fn new(sessions: Arc<dyn SessionRepository>) -> Self {
        Self { sessions }
    }

    /// Every published session, newest-created first
    pub async fn list_published(&self) -> Result<Vec<Session>, SessionError> {
        Ok(self
            .sessions
            .find_by_status(SessionStatus::Published)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        SessionLifecycleService,
        models::{PublishInput, SaveDraftInput},
        repositories::InMemorySessionRepository,
    };
    use uuid::Uuid;

    fn draft(title: &str) -> SaveDraftInput {
        SaveDraftInput::new(None, Some(title.to_string()), vec![], None).unwrap()
    }

    #[tokio::test]
    async fn only_published_sessions_are_listed() {
        let repo = Arc::new(InMemorySessionRepository::new());
        let lifecycle = SessionLifecycleService::new(repo.clone());
        let listing = PublicListingService::new(repo);
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let a = lifecycle.save_draft(alice, draft("A")).await.unwrap();
        lifecycle.save_draft(alice, draft("hidden")).await.unwrap();
        let b = lifecycle.save_draft(bob, draft("B")).await.unwrap();
        lifecycle
            .publish(alice, PublishInput::new(Some(a.id)).unwrap())
            .await
            .unwrap();
        lifecycle
            .publish(bob, PublishInput::new(Some(b.id)).unwrap())
            .await
            .unwrap();

        let published = listing.list_published().await.unwrap();
        let ids: Vec<Uuid> = published.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![b.id, a.id]);
        assert!(published.iter().all(|s| s.is_published()));
    }

    #[tokio::test]
    async fn redrafted_sessions_drop_out_of_the_listing() {
        let repo = Arc::new(InMemorySessionRepository::new());
        let lifecycle = SessionLifecycleService::new(repo.clone());
        let listing = PublicListingService::new(repo);
        let owner = Uuid::new_v4();

        let s = lifecycle.save_draft(owner, draft("A")).await.unwrap();
        lifecycle
            .publish(owner, PublishInput::new(Some(s.id)).unwrap())
            .await
            .unwrap();
        assert_eq!(listing.list_published().await.unwrap().len(), 1);

        let edit = SaveDraftInput::new(Some(s.id), Some("A2".into()), vec![], None).unwrap();
        lifecycle.save_draft(owner, edit).await.unwrap();
        assert!(listing.list_published().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let listing = PublicListingService::new(Arc::new(InMemorySessionRepository::new()));
        assert!(listing.list_published().await.unwrap().is_empty());
    }
}
