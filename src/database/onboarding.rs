// ABOUTME: Onboarding progress table and the SQLite implementation of the onboarding store
// ABOUTME: Snapshots are upserted per user with JSON columns for answers, progress and history

use super::Database;
use crate::constants::answer_keys;
use crate::errors::{AppError, AppResult};
use crate::models::OnboardingRecord;
use crate::onboarding::OnboardingStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;
use tracing::debug;
use uuid::Uuid;

impl Database {
    /// Create the onboarding progress table
    ///
    /// # Errors
    ///
    /// Returns an error if table creation fails
    pub(super) async fn migrate_onboarding(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS onboarding_progress (
                user_id TEXT PRIMARY KEY REFERENCES users(id) ON DELETE CASCADE,
                current_step TEXT NOT NULL,
                answers TEXT NOT NULL,
                progress TEXT NOT NULL,
                history TEXT NOT NULL,
                active_pack TEXT,
                selected_modules TEXT NOT NULL,
                is_complete BOOLEAN NOT NULL DEFAULT 0,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Upsert a full onboarding snapshot
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the database operation fails
    pub async fn upsert_onboarding_progress(&self, record: &OnboardingRecord) -> AppResult<()> {
        self.ensure_user(record.user_id, record.answers.text(answer_keys::FIRST_NAME))
            .await?;

        sqlx::query(
            r"
            INSERT INTO onboarding_progress (
                user_id, current_step, answers, progress, history,
                active_pack, selected_modules, is_complete, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(user_id) DO UPDATE SET
                current_step = excluded.current_step,
                answers = excluded.answers,
                progress = excluded.progress,
                history = excluded.history,
                active_pack = excluded.active_pack,
                selected_modules = excluded.selected_modules,
                is_complete = excluded.is_complete,
                updated_at = excluded.updated_at
            ",
        )
        .bind(record.user_id.to_string())
        .bind(&record.current_step)
        .bind(serde_json::to_string(&record.answers)?)
        .bind(serde_json::to_string(&record.progress)?)
        .bind(serde_json::to_string(&record.history)?)
        .bind(record.active_pack.as_deref())
        .bind(serde_json::to_string(&record.selected_modules)?)
        .bind(record.is_complete)
        .bind(record.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        debug!(user_id = %record.user_id, step = %record.current_step, "Onboarding snapshot stored");
        Ok(())
    }

    /// Load the saved onboarding snapshot for a user
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored column is malformed
    pub async fn get_onboarding_progress(
        &self,
        user_id: Uuid,
    ) -> AppResult<Option<OnboardingRecord>> {
        let row = sqlx::query(
            r"
            SELECT current_step, answers, progress, history, active_pack,
                   selected_modules, is_complete, updated_at
            FROM onboarding_progress WHERE user_id = ?
            ",
        )
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let updated_at: String = row.try_get("updated_at")?;
        let updated_at = DateTime::parse_from_rfc3339(&updated_at)
            .map_err(|e| {
                AppError::database(format!("Invalid onboarding timestamp: {e}")).with_user_id(user_id)
            })?
            .with_timezone(&Utc);

        Ok(Some(OnboardingRecord {
            user_id,
            current_step: row.try_get("current_step")?,
            answers: serde_json::from_str(&row.try_get::<String, _>("answers")?)?,
            progress: serde_json::from_str(&row.try_get::<String, _>("progress")?)?,
            history: serde_json::from_str(&row.try_get::<String, _>("history")?)?,
            active_pack: row.try_get("active_pack")?,
            selected_modules: serde_json::from_str(
                &row.try_get::<String, _>("selected_modules")?,
            )?,
            is_complete: row.try_get("is_complete")?,
            updated_at,
        }))
    }

    /// Delete a user's saved onboarding snapshot
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn delete_onboarding_progress(&self, user_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM onboarding_progress WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl OnboardingStore for Database {
    async fn save_progress(&self, record: &OnboardingRecord) -> AppResult<()> {
        self.upsert_onboarding_progress(record).await
    }

    async fn mark_complete(&self, user_id: Uuid) -> AppResult<()> {
        self.mark_onboarding_complete(user_id).await
    }

    async fn load_progress(&self, user_id: Uuid) -> AppResult<Option<OnboardingRecord>> {
        self.get_onboarding_progress(user_id).await
    }
}
