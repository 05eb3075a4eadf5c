use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::db::errors::{DatabaseError, Result};
use crate::db::store::{FeedbackStore, LeaderboardStore};
use crate::models::{FeedbackLink, LeaderboardEntry, NewEntry};

/// PostgreSQL-backed implementation of both storage contracts
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeaderboardStore for PostgresStore {
    #[tracing::instrument(skip(self, entry), fields(entry_id = %entry.id, score = entry.score))]
    async fn insert_entry(&self, entry: NewEntry) -> Result<LeaderboardEntry> {
        sqlx::query(
            r#"
            INSERT INTO leaderboard (id, name, score, creation)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(entry.id)
        .bind(&entry.name)
        .bind(entry.score)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::QueryError)?;

        let inserted = sqlx::query_as::<_, LeaderboardEntry>(
            r#"
            SELECT id, name, score, creation
            FROM leaderboard
            WHERE id = $1
            "#,
        )
        .bind(entry.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::QueryError)?;

        let inserted = inserted.ok_or_else(|| {
            DatabaseError::NotFound(format!("Leaderboard entry {} missing after insert", entry.id))
        })?;

        debug!("Inserted leaderboard entry");
        Ok(inserted)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_all_entries(&self) -> Result<Vec<LeaderboardEntry>> {
        let entries = sqlx::query_as::<_, LeaderboardEntry>(
            r#"
            SELECT id, name, score, creation
            FROM leaderboard
            ORDER BY score DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::QueryError)?;

        debug!("Loaded {} leaderboard entries", entries.len());
        Ok(entries)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_all_entries(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM leaderboard")
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::QueryError)?;

        info!("Deleted {} leaderboard entries", result.rows_affected());
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl FeedbackStore for PostgresStore {
    #[tracing::instrument(skip(self))]
    async fn first_feedback_link(&self) -> Result<Option<FeedbackLink>> {
        let link = sqlx::query_as::<_, FeedbackLink>("SELECT link FROM feedbacklink LIMIT 1")
            .fetch_optional(&self.pool)
            .await
            .map_err(DatabaseError::QueryError)?;

        Ok(link)
    }
}
