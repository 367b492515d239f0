//! Application state shared across handlers

use std::sync::Arc;

use auth::{AuthService, JwtService, UserRepository};
use sessions::{PublicListingService, SessionLifecycleService, SessionRepository};

/// Application state shared across handlers
///
/// Stores are injected at construction; nothing here is global.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub lifecycle_service: SessionLifecycleService,
    pub listing_service: PublicListingService,
    pub session_repository: Arc<dyn SessionRepository>,
}

impl AppState {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        session_repository: Arc<dyn SessionRepository>,
        jwt_service: JwtService,
    ) -> Self {
        Self {
            auth_service: AuthService::new(user_repository, jwt_service),
            lifecycle_service: SessionLifecycleService::new(session_repository.clone()),
            listing_service: PublicListingService::new(session_repository.clone()),
            session_repository,
        }
    }
}
