//! PostgreSQL user repository

use async_trait::async_trait;
use common::{DatabaseError, DatabaseResult};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use super::UserRepository;
use crate::models::{NewUser, User};

/// User repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, new_user: &NewUser) -> DatabaseResult<User> {
        let id = Uuid::new_v4();
        info!("Creating new user {}", id);

        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::from_query)
    }

    async fn find_by_email(&self, email: &str) -> DatabaseResult<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from_query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::database::{DatabaseConfig, init_pool, run_migrations};

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance (DATABASE_URL)"]
    async fn test_create_and_find_user() -> anyhow::Result<()> {
        let pool = init_pool(&DatabaseConfig::from_env()?).await?;
        run_migrations(&pool).await?;
        let repo = PgUserRepository::new(pool);

        let email = format!("{}@example.com", Uuid::new_v4());
        let created = repo
            .create(&NewUser {
                email: email.clone(),
                password_hash: "hash".to_string(),
            })
            .await?;

        let found = repo.find_by_email(&email).await?.expect("user not found");
        assert_eq!(found.id, created.id);

        let duplicate = repo
            .create(&NewUser {
                email,
                password_hash: "hash".to_string(),
            })
            .await;
        assert!(matches!(duplicate, Err(DatabaseError::UniqueViolation(_))));
        Ok(())
    }
}
