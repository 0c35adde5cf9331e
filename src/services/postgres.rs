use serde::{Deserialize, Serialize};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum SwipeStoreError {
    #[error("Connection pool error: {0}")]
    PoolError(#[from] deadpool_postgres::PoolError),

    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Swipe actions as stored in PostgreSQL
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "swipe_action", rename_all = "lowercase")]
pub enum SwipeKind {
    Liked,
    Passed,
    Superliked,
    Matched,
}

impl From<crate::models::SwipeAction> for SwipeKind {
    fn from(value: crate::models::SwipeAction) -> Self {
        match value {
            crate::models::SwipeAction::Liked => SwipeKind::Liked,
            crate::models::SwipeAction::Passed => SwipeKind::Passed,
            crate::models::SwipeAction::Superliked => SwipeKind::Superliked,
            crate::models::SwipeAction::Matched => SwipeKind::Matched,
        }
    }
}

/// One recorded swipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeRecord {
    pub user_id: String,
    pub target_user_id: String,
    pub action: SwipeKind,
    pub swiped_at: chrono::DateTime<chrono::Utc>,
}

/// PostgreSQL store for swipe history
///
/// Holds the authoritative record of which profiles a user has already
/// swiped on. The daily match generator reads this set so the same
/// candidate is never surfaced twice.
pub struct SwipeStore {
    pool: PgPool,
}

impl SwipeStore {
    /// Create a new store from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, SwipeStoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new store from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, SwipeStoreError> {
        tracing::info!("Connecting to PostgreSQL with URL: {}", url);

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Record a swipe
    ///
    /// Uses INSERT ... ON CONFLICT so a repeat swipe on the same target
    /// updates the action and timestamp instead of failing.
    pub async fn record_swipe(
        &self,
        user_id: &str,
        target_user_id: &str,
        action: SwipeKind,
    ) -> Result<(), SwipeStoreError> {
        let query = r#"
            INSERT INTO swipes (user_id, target_user_id, action, swiped_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (user_id, target_user_id)
            DO UPDATE SET
                action = EXCLUDED.action,
                swiped_at = EXCLUDED.swiped_at
        "#;

        sqlx::query(query)
            .bind(user_id)
            .bind(target_user_id)
            .bind(&action)
            .execute(&self.pool)
            .await?;

        tracing::debug!(
            "Recorded swipe: {} -> {} ({:?})",
            user_id,
            target_user_id,
            action
        );

        Ok(())
    }

    /// Get all profile ids the given user has already swiped on
    ///
    /// These are excluded from future daily match generation.
    pub async fn seen_profile_ids(&self, user_id: &str) -> Result<Vec<String>, SwipeStoreError> {
        let query = r#"
            SELECT target_user_id
            FROM swipes
            WHERE user_id = $1
        "#;

        let rows = sqlx::query(query).bind(user_id).fetch_all(&self.pool).await?;

        let seen_ids: Vec<String> = rows
            .iter()
            .map(|row| row.get("target_user_id"))
            .collect();

        tracing::debug!("User {} has swiped on {} profiles", user_id, seen_ids.len());

        Ok(seen_ids)
    }

    /// Get swipes with pagination (for debugging/admin)
    pub async fn swipes_paginated(
        &self,
        user_id: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<SwipeRecord>, SwipeStoreError> {
        let query = r#"
            SELECT user_id, target_user_id, action, swiped_at
            FROM swipes
            WHERE user_id = $1
            ORDER BY swiped_at DESC
            LIMIT $2 OFFSET $3
        "#;

        let rows = sqlx::query(query)
            .bind(user_id)
            .bind(limit as i64)
            .bind(offset as i64)
            .fetch_all(&self.pool)
            .await?;

        let records: Result<Vec<SwipeRecord>, _> = rows
            .iter()
            .map(|row| {
                Ok(SwipeRecord {
                    user_id: row.get("user_id"),
                    target_user_id: row.get("target_user_id"),
                    action: row.get("action"),
                    swiped_at: row.get("swiped_at"),
                })
            })
            .collect();

        records
    }

    /// Remove a single swipe (e.g. an undo)
    pub async fn remove_swipe(
        &self,
        user_id: &str,
        target_user_id: &str,
    ) -> Result<bool, SwipeStoreError> {
        let query = r#"
            DELETE FROM swipes
            WHERE user_id = $1 AND target_user_id = $2
        "#;

        let result = sqlx::query(query)
            .bind(user_id)
            .bind(target_user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Clear all swipes for a user
    pub async fn clear_swipes(&self, user_id: &str) -> Result<u64, SwipeStoreError> {
        let query = r#"
            DELETE FROM swipes
            WHERE user_id = $1
        "#;

        let result = sqlx::query(query).bind(user_id).execute(&self.pool).await?;

        tracing::info!(
            "Cleared {} swipes for user {}",
            result.rows_affected(),
            user_id
        );

        Ok(result.rows_affected())
    }

    /// Get statistics about a user's swipes
    pub async fn swipe_stats(&self, user_id: &str) -> Result<SwipeStats, SwipeStoreError> {
        let query = r#"
            SELECT
                COUNT(*) as total_swipes,
                COUNT(*) FILTER (WHERE action = 'liked') as liked,
                COUNT(*) FILTER (WHERE action = 'passed') as passed,
                COUNT(*) FILTER (WHERE action = 'superliked') as superliked,
                COUNT(*) FILTER (WHERE action = 'matched') as matched,
                MAX(swiped_at) as last_swiped_at
            FROM swipes
            WHERE user_id = $1
        "#;

        let row = sqlx::query(query).bind(user_id).fetch_one(&self.pool).await?;

        Ok(SwipeStats {
            user_id: user_id.to_string(),
            total_swipes: row.get("total_swipes"),
            liked: row.get("liked"),
            passed: row.get("passed"),
            superliked: row.get("superliked"),
            matched: row.get("matched"),
            last_swiped_at: row.get("last_swiped_at"),
        })
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, SwipeStoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

/// Statistics about a user's swipe history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeStats {
    pub user_id: String,
    pub total_swipes: i64,
    pub liked: i64,
    pub passed: i64,
    pub superliked: i64,
    pub matched: i64,
    pub last_swiped_at: Option<chrono::DateTime<chrono::Utc>>,
}
