//! Credential storage

use async_trait::async_trait;
use common::DatabaseResult;
use crate::models::{NewUser, User};

pub mod memory;
pub mod user;

pub use memory::InMemoryUserRepository;
pub use user::PgUserRepository;

/// Persistence port for users and their credential hashes
///
/// Implementations must enforce email uniqueness and report a collision as
/// `DatabaseError::UniqueViolation`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user and return it with its generated id
    async fn create(&self, new_user: &NewUser) -> DatabaseResult<User>;

    /// Find a user by (normalized) email
    async fn find_by_email(&self, email: &str) -> DatabaseResult<Option<User>>;
}
