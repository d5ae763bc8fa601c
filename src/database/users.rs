// ABOUTME: User table operations
// ABOUTME: Creates user rows on demand and tracks the onboarding completion flag

use super::Database;
use crate::errors::AppResult;
use chrono::Utc;
use sqlx::Row;
use uuid::Uuid;

impl Database {
    /// Create the users table
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails
    pub(super) async fn migrate_users(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                display_name TEXT,
                onboarding_completed BOOLEAN NOT NULL DEFAULT 0,
                onboarding_completed_at TEXT,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_users_onboarding_completed ON users(onboarding_completed)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Create the user row if missing; a given display name replaces the stored one
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn ensure_user(&self, user_id: Uuid, display_name: Option<&str>) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (id, display_name) VALUES (?, ?)
            ON CONFLICT(id) DO UPDATE SET
                display_name = COALESCE(excluded.display_name, users.display_name)
            ",
        )
        .bind(user_id.to_string())
        .bind(display_name)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Set the onboarding completion flag, creating the user row if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn mark_onboarding_complete(&self, user_id: Uuid) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (id, onboarding_completed, onboarding_completed_at) VALUES (?, 1, ?)
            ON CONFLICT(id) DO UPDATE SET
                onboarding_completed = 1,
                onboarding_completed_at = excluded.onboarding_completed_at
            ",
        )
        .bind(user_id.to_string())
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Whether the user finished onboarding; unknown users have not
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn is_onboarding_complete(&self, user_id: Uuid) -> AppResult<bool> {
        let row = sqlx::query("SELECT onboarding_completed FROM users WHERE id = ?")
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => Ok(row.try_get::<bool, _>("onboarding_completed")?),
            None => Ok(false),
        }
    }

    /// Stored display name
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_display_name(&self, user_id: Uuid) -> AppResult<Option<String>> {
        let row = sqlx::query("SELECT display_name FROM users WHERE id = ?")
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => Ok(row.try_get::<Option<String>, _>("display_name")?),
            None => Ok(None),
        }
    }
}
