//! PostgreSQL session repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::{DatabaseError, DatabaseResult, database};
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use super::SessionRepository;
use crate::models::{DraftContent, Session, SessionStatus};

const SESSION_COLUMNS: &str =
    "id, owner_id, title, tags, resource_url, status, created_at, updated_at";

/// Row shape as stored; `status` is kept as text
#[derive(FromRow)]
struct SessionRow {
    id: Uuid,
    owner_id: Uuid,
    title: String,
    tags: Vec<String>,
    resource_url: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<SessionRow> for Session {
    type Error = DatabaseError;

    fn try_from(row: SessionRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse::<SessionStatus>()
            .map_err(|e| DatabaseError::Corrupt(format!("session {}: {}", row.id, e)))?;

        Ok(Session {
            id: row.id,
            owner_id: row.owner_id,
            title: row.title,
            tags: row.tags,
            resource_url: row.resource_url,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn into_sessions(rows: Vec<SessionRow>) -> DatabaseResult<Vec<Session>> {
    rows.into_iter().map(Session::try_from).collect()
}

fn into_session(row: Option<SessionRow>) -> DatabaseResult<Option<Session>> {
    row.map(Session::try_from).transpose()
}

/// Session repository
#[derive(Clone)]
pub struct PgSessionRepository {
    pool: PgPool,
}

impl PgSessionRepository {
    /// Create a new session repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    async fn insert(&self, session: &Session) -> DatabaseResult<Session> {
        info!("Creating session {} for owner {}", session.id, session.owner_id);

        let row = sqlx::query_as::<_, SessionRow>(&format!(
            r#"
            INSERT INTO sessions (id, owner_id, title, tags, resource_url, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {SESSION_COLUMNS}
            "#
        ))
        .bind(session.id)
        .bind(session.owner_id)
        .bind(&session.title)
        .bind(&session.tags)
        .bind(&session.resource_url)
        .bind(session.status.as_str())
        .bind(session.created_at)
        .bind(session.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        Session::try_from(row)
    }

    async fn find_by_status(&self, status: SessionStatus) -> DatabaseResult<Vec<Session>> {
        let rows = sqlx::query_as::<_, SessionRow>(&format!(
            r#"
            SELECT {SESSION_COLUMNS}
            FROM sessions
            WHERE status = $1
            ORDER BY created_at DESC
            "#
        ))
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        into_sessions(rows)
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> DatabaseResult<Vec<Session>> {
        let rows = sqlx::query_as::<_, SessionRow>(&format!(
            r#"
            SELECT {SESSION_COLUMNS}
            FROM sessions
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#
        ))
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        into_sessions(rows)
    }

    async fn find_by_id_and_owner(
        &self,
        id: Uuid,
        owner_id: Uuid,
    ) -> DatabaseResult<Option<Session>> {
        let row = sqlx::query_as::<_, SessionRow>(&format!(
            r#"
            SELECT {SESSION_COLUMNS}
            FROM sessions
            WHERE id = $1 AND owner_id = $2
            "#
        ))
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        into_session(row)
    }

    async fn update_draft(
        &self,
        id: Uuid,
        owner_id: Uuid,
        content: &DraftContent,
        updated_at: DateTime<Utc>,
    ) -> DatabaseResult<Option<Session>> {
        let row = sqlx::query_as::<_, SessionRow>(&format!(
            r#"
            UPDATE sessions
            SET title = $3, tags = $4, resource_url = $5, status = 'draft', updated_at = $6
            WHERE id = $1 AND owner_id = $2
            RETURNING {SESSION_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(owner_id)
        .bind(&content.title)
        .bind(&content.tags)
        .bind(&content.resource_url)
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        into_session(row)
    }

    async fn publish(
        &self,
        id: Uuid,
        owner_id: Uuid,
        updated_at: DateTime<Utc>,
    ) -> DatabaseResult<Option<Session>> {
        let row = sqlx::query_as::<_, SessionRow>(&format!(
            r#"
            UPDATE sessions
            SET status = 'published', updated_at = $3
            WHERE id = $1 AND owner_id = $2
            RETURNING {SESSION_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(owner_id)
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        into_session(row)
    }

    async fn health_check(&self) -> bool {
        database::health_check(&self.pool).await
    }
}
