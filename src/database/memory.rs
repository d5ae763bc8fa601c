// ABOUTME: In-memory onboarding store backed by a tokio RwLock
// ABOUTME: Used for tests and sessions that should not touch disk

use crate::errors::AppResult;
use crate::models::OnboardingRecord;
use crate::onboarding::OnboardingStore;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Onboarding store that keeps snapshots in process memory
#[derive(Debug, Default)]
pub struct InMemoryOnboardingStore {
    records: RwLock<HashMap<Uuid, OnboardingRecord>>,
    completed: RwLock<HashSet<Uuid>>,
    saves: AtomicUsize,
}

impl InMemoryOnboardingStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `save_progress` calls
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::Relaxed)
    }

    /// Whether `mark_complete` was called for the user
    pub async fn is_marked_complete(&self, user_id: Uuid) -> bool {
        self.completed.read().await.contains(&user_id)
    }
}

#[async_trait]
impl OnboardingStore for InMemoryOnboardingStore {
    async fn save_progress(&self, record: &OnboardingRecord) -> AppResult<()> {
        self.records
            .write()
            .await
            .insert(record.user_id, record.clone());
        self.saves.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    async fn mark_complete(&self, user_id: Uuid) -> AppResult<()> {
        self.completed.write().await.insert(user_id);
        Ok(())
    }

    async fn load_progress(&self, user_id: Uuid) -> AppResult<Option<OnboardingRecord>> {
        Ok(self.records.read().await.get(&user_id).cloned())
    }
}
