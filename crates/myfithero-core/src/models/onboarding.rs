// ABOUTME: Onboarding progress bookkeeping and the record mirrored to persistence
// ABOUTME: Tracks completion order, skips, back navigations and activity timestamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero

use super::AnswerSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Derived bookkeeping attached to an answer set.
///
/// `completed_steps` keeps completion order and never holds duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingProgress {
    /// Step ids in the order they were completed
    pub completed_steps: Vec<String>,
    /// Step ids the user skipped at least once
    pub skipped_steps: BTreeSet<String>,
    /// Number of back navigations
    pub back_navigations: u32,
    /// Number of skips
    pub skips: u32,
    /// Estimated minutes needed to finish
    pub estimated_minutes_left: u32,
    /// When the session started
    pub started_at: DateTime<Utc>,
    /// Last navigation or answer
    pub last_activity: DateTime<Utc>,
    /// Set once the onboarding has been completed
    pub completed_at: Option<DateTime<Utc>>,
}

impl OnboardingProgress {
    /// Fresh progress block starting now
    #[must_use]
    pub fn new(estimated_minutes_left: u32) -> Self {
        let now = Utc::now();
        Self {
            completed_steps: Vec::new(),
            skipped_steps: BTreeSet::new(),
            back_navigations: 0,
            skips: 0,
            estimated_minutes_left,
            started_at: now,
            last_activity: now,
            completed_at: None,
        }
    }

    /// Append a completed step unless it is already present
    pub fn mark_completed(&mut self, step_id: &str) {
        if !self.is_completed(step_id) {
            self.completed_steps.push(step_id.to_owned());
        }
    }

    /// Remove a step from the completed list, keeping the order of the rest
    pub fn unmark_completed(&mut self, step_id: &str) {
        self.completed_steps.retain(|id| id != step_id);
    }

    /// Whether `step_id` is currently completed
    #[must_use]
    pub fn is_completed(&self, step_id: &str) -> bool {
        self.completed_steps.iter().any(|id| id == step_id)
    }

    /// Record a skip of `step_id`
    pub fn record_skip(&mut self, step_id: &str) {
        self.skips += 1;
        self.skipped_steps.insert(step_id.to_owned());
    }

    /// Record a back navigation
    pub fn record_back_navigation(&mut self) {
        self.back_navigations += 1;
    }

    /// Update the last activity timestamp
    pub fn touch(&mut self) {
        self.last_activity = Utc::now();
    }

    /// Session duration so far
    #[must_use]
    pub fn elapsed(&self) -> chrono::Duration {
        self.completed_at.unwrap_or(self.last_activity) - self.started_at
    }
}

/// Snapshot of one user's onboarding session, mirrored to persistence.
///
/// Every save carries the full record so a late write is overwritten by the
/// next one instead of corrupting state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingRecord {
    /// Owner of the session
    pub user_id: Uuid,
    /// Accumulated answers
    pub answers: AnswerSet,
    /// Progress bookkeeping
    pub progress: OnboardingProgress,
    /// Step the user is currently on
    pub current_step: String,
    /// Navigation history (previously visited step ids)
    pub history: Vec<String>,
    /// Active pack, when a linear pack drives navigation
    pub active_pack: Option<String>,
    /// Modules selected on the custom path
    pub selected_modules: Vec<String>,
    /// Whether onboarding has been completed
    pub is_complete: bool,
    /// When this snapshot was taken
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_steps_never_duplicate() {
        let mut progress = OnboardingProgress::new(5);
        progress.mark_completed("age");
        progress.mark_completed("gender");
        progress.mark_completed("age");
        assert_eq!(progress.completed_steps, vec!["age", "gender"]);

        progress.unmark_completed("age");
        assert_eq!(progress.completed_steps, vec!["gender"]);
        assert!(!progress.is_completed("age"));
    }

    #[test]
    fn test_skip_bookkeeping() {
        let mut progress = OnboardingProgress::new(5);
        progress.record_skip("gender");
        progress.record_skip("gender");
        assert_eq!(progress.skips, 2);
        assert_eq!(progress.skipped_steps.len(), 1);
    }
}
