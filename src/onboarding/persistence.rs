// ABOUTME: Persistence adapter seams for the onboarding controller
// ABOUTME: Store, current-user accessor and non-blocking notifier traits injected at construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero

//! # Persistence Adapter
//!
//! The controller never reaches for a global client. Everything it talks to
//! is injected:
//!
//! - [`OnboardingStore`] mirrors session snapshots (idempotent upserts)
//! - [`CurrentUserProvider`] resolves the authenticated user
//! - [`ProgressNotifier`] surfaces non-blocking warnings in debug mode

use crate::errors::AppResult;
use crate::models::OnboardingRecord;
use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

/// Backing store for onboarding sessions
///
/// Implementations must make [`save_progress`](Self::save_progress)
/// idempotent: the same or a growing record may be written any number of
/// times, and the last write wins.
#[async_trait]
pub trait OnboardingStore: Send + Sync {
    /// Upsert the full session snapshot keyed by `record.user_id`
    async fn save_progress(&self, record: &OnboardingRecord) -> AppResult<()>;

    /// Set the onboarding-complete flag on the user record
    async fn mark_complete(&self, user_id: Uuid) -> AppResult<()>;

    /// Load the last saved snapshot for a user
    async fn load_progress(&self, user_id: Uuid) -> AppResult<Option<OnboardingRecord>>;
}

/// Accessor for the authenticated user's identity
pub trait CurrentUserProvider: Send + Sync {
    /// Current user id, `None` when nobody is signed in
    fn current_user_id(&self) -> Option<Uuid>;
}

/// Provider that always returns the same user
#[derive(Debug, Clone, Copy)]
pub struct FixedUser(Option<Uuid>);

impl FixedUser {
    /// Signed-in user
    #[must_use]
    pub const fn new(user_id: Uuid) -> Self {
        Self(Some(user_id))
    }

    /// Nobody signed in
    #[must_use]
    pub const fn anonymous() -> Self {
        Self(None)
    }
}

impl CurrentUserProvider for FixedUser {
    fn current_user_id(&self) -> Option<Uuid> {
        self.0
    }
}

/// Non-blocking user-facing warnings
pub trait ProgressNotifier: Send + Sync {
    /// Show a warning without interrupting the flow
    fn notify_warning(&self, message: &str);
}

/// Notifier that routes warnings to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl ProgressNotifier for TracingNotifier {
    fn notify_warning(&self, message: &str) {
        warn!(notification = %message, "Onboarding notification");
    }
}
