// ABOUTME: Stateful onboarding controller driving navigation over a flow definition
// ABOUTME: Validates answers, tracks progress and history, and mirrors snapshots to the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero

//! # Onboarding Controller
//!
//! One controller owns one user session. Every navigation call applies its
//! in-memory transition first; persistence runs afterwards and its result is
//! reported in the returned outcome. A failed save never undoes or blocks a
//! transition.
//!
//! Programming errors (going back with no history, skipping a required
//! step, navigating after completion) are reported as
//! [`NavigationOutcome::Ignored`] rather than errors.

use super::flow::{FlowDefinition, Step, StepEffect};
use super::persistence::{CurrentUserProvider, OnboardingStore, ProgressNotifier, TracingNotifier};
use super::validation;
use crate::config::OnboardingConfig;
use crate::constants::onboarding::COMPLETION_STEP;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{AnswerSet, AnswerValue, OnboardingProgress, OnboardingRecord};
use chrono::Utc;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Result of mirroring state to the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SaveStatus {
    /// The step is not on the autosave allow-list
    NotRequested,
    /// Written to the store
    Saved,
    /// No authenticated user
    Skipped,
    /// The store rejected the write; navigation was not affected
    Failed {
        /// Error family
        code: ErrorCode,
        /// Error text
        message: String,
    },
}

impl SaveStatus {
    /// Whether the store reported a failure
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Why a navigation call did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoredReason {
    /// Back navigation with an empty history
    NoHistory,
    /// Skip requested on a required step
    NotSkippable,
    /// Onboarding already completed
    AlreadyComplete,
    /// Already at the terminal step
    AtCompletion,
}

/// Result of a navigation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum NavigationOutcome {
    /// Moved forward
    Advanced {
        /// Step that was completed
        from: String,
        /// New current step
        to: String,
        /// Autosave result
        saved: SaveStatus,
    },
    /// Validation failed, the step did not change
    Rejected {
        /// Current step
        step_id: String,
        /// Failure messages in rule order
        errors: Vec<String>,
    },
    /// Moved back one step
    WentBack {
        /// New current step
        to: String,
    },
    /// Nothing happened
    Ignored {
        /// Why
        reason: IgnoredReason,
    },
}

impl NavigationOutcome {
    /// Whether the call moved forward
    #[must_use]
    pub const fn is_advanced(&self) -> bool {
        matches!(self, Self::Advanced { .. })
    }

    /// Validation messages, empty unless rejected
    #[must_use]
    pub fn errors(&self) -> &[String] {
        match self {
            Self::Rejected { errors, .. } => errors,
            _ => &[],
        }
    }
}

/// Returned by [`OnboardingController::complete_onboarding`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionReport {
    /// Final answer set
    pub answers: AnswerSet,
    /// Final progress block
    pub progress: OnboardingProgress,
    /// Result of the final save
    pub saved: SaveStatus,
    /// Result of flagging the user record
    pub marked_complete: SaveStatus,
}

/// Conversational onboarding state machine
pub struct OnboardingController {
    flow: Arc<FlowDefinition>,
    store: Arc<dyn OnboardingStore>,
    user: Arc<dyn CurrentUserProvider>,
    notifier: Arc<dyn ProgressNotifier>,
    config: OnboardingConfig,
    current_step: String,
    answers: AnswerSet,
    pending: Option<AnswerValue>,
    validation_errors: Vec<String>,
    history: Vec<String>,
    progress: OnboardingProgress,
    active_pack: Option<String>,
    selected_modules: Vec<String>,
    is_complete: bool,
}

impl std::fmt::Debug for OnboardingController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnboardingController")
            .field("current_step", &self.current_step)
            .field("history", &self.history)
            .field("active_pack", &self.active_pack)
            .field("is_complete", &self.is_complete)
            .finish_non_exhaustive()
    }
}

impl OnboardingController {
    /// Create a controller positioned at the flow's initial step
    #[must_use]
    pub fn new(
        flow: Arc<FlowDefinition>,
        store: Arc<dyn OnboardingStore>,
        user: Arc<dyn CurrentUserProvider>,
        config: OnboardingConfig,
    ) -> Self {
        let mut controller = Self {
            current_step: flow.initial_step().to_owned(),
            flow,
            store,
            user,
            notifier: Arc::new(TracingNotifier),
            config,
            answers: AnswerSet::new(),
            pending: None,
            validation_errors: Vec::new(),
            history: Vec::new(),
            progress: OnboardingProgress::new(0),
            active_pack: None,
            selected_modules: Vec::new(),
            is_complete: false,
        };
        controller.refresh_estimate();
        controller
    }

    /// Replace the notifier used for debug-mode warnings
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn ProgressNotifier>) -> Self {
        self.notifier = notifier;
        self
    }

    // ================================
    // State accessors
    // ================================

    /// Flow this controller navigates
    #[must_use]
    pub fn flow(&self) -> &FlowDefinition {
        &self.flow
    }

    /// Current step id (may be the completion sentinel)
    #[must_use]
    pub fn current_step_id(&self) -> &str {
        &self.current_step
    }

    /// Current step, `None` at the completion sentinel
    #[must_use]
    pub fn current_step(&self) -> Option<&Step> {
        self.flow.step(&self.current_step)
    }

    /// Accumulated answers
    #[must_use]
    pub const fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Progress bookkeeping
    #[must_use]
    pub const fn progress(&self) -> &OnboardingProgress {
        &self.progress
    }

    /// Previously visited steps, most recent last
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Uncommitted answer for the current step
    #[must_use]
    pub const fn pending_response(&self) -> Option<&AnswerValue> {
        self.pending.as_ref()
    }

    /// Messages from the last rejected submission
    #[must_use]
    pub fn validation_errors(&self) -> &[String] {
        &self.validation_errors
    }

    /// Pack driving navigation, if any
    #[must_use]
    pub fn active_pack(&self) -> Option<&str> {
        self.active_pack.as_deref()
    }

    /// Modules selected on the custom path
    #[must_use]
    pub fn selected_modules(&self) -> &[String] {
        &self.selected_modules
    }

    /// Whether onboarding has been completed
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Whether the terminal step has been reached
    #[must_use]
    pub fn is_at_completion(&self) -> bool {
        FlowDefinition::is_terminal(&self.current_step)
    }

    /// Whether back navigation would do anything
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.is_complete && !self.history.is_empty()
    }

    /// Whether the current step may be skipped
    #[must_use]
    pub fn can_skip(&self) -> bool {
        !self.is_complete && self.current_step().is_some_and(|step| step.skippable)
    }

    /// Share of in-scope steps already completed, 0 to 100
    #[must_use]
    pub fn progress_percentage(&self) -> u8 {
        if self.is_complete || self.is_at_completion() {
            return 100;
        }
        let done = self
            .progress
            .completed_steps
            .iter()
            .filter(|id| id.as_str() != COMPLETION_STEP)
            .count();
        let total = done + self.remaining_steps().len();
        if total == 0 {
            return 0;
        }
        ((done * 100) / total) as u8
    }

    /// Snapshot of the session for the current user
    #[must_use]
    pub fn record(&self) -> Option<OnboardingRecord> {
        self.user
            .current_user_id()
            .map(|user_id| self.snapshot(user_id))
    }

    // ================================
    // Navigation
    // ================================

    /// Store the in-progress answer and clear previous validation errors
    pub fn set_current_response(&mut self, value: impl Into<AnswerValue>) {
        if self.is_complete {
            debug!("Onboarding complete, response ignored");
            return;
        }
        self.pending = Some(value.into());
        self.validation_errors.clear();
    }

    /// Validate the pending answer and move forward.
    ///
    /// Without a pending answer, null is validated. A value stored by an
    /// earlier visit is never committed again unless it is set as pending.
    pub async fn go_to_next_step(&mut self) -> NavigationOutcome {
        if self.is_complete {
            return NavigationOutcome::Ignored {
                reason: IgnoredReason::AlreadyComplete,
            };
        }
        let flow = Arc::clone(&self.flow);
        let Some(step) = flow.step(&self.current_step) else {
            return NavigationOutcome::Ignored {
                reason: IgnoredReason::AtCompletion,
            };
        };

        let value = self.pending.clone().unwrap_or_default();

        let errors = validation::evaluate(&step.rules, &value, &self.answers);
        if !errors.is_empty() {
            debug!(
                step_id = %step.id,
                failures = errors.len(),
                "Onboarding answer rejected"
            );
            self.validation_errors.clone_from(&errors);
            return NavigationOutcome::Rejected {
                step_id: step.id.clone(),
                errors,
            };
        }

        if let Some(key) = &step.data_key {
            self.answers.insert(key.clone(), value.clone());
        }
        self.progress.mark_completed(&step.id);
        self.progress.touch();
        self.apply_effect(step, &value);

        let next = self.next_step_id(step, &value);
        self.history.push(step.id.clone());
        self.current_step.clone_from(&next);
        self.pending = None;
        self.validation_errors.clear();
        self.refresh_estimate();

        info!(
            from = %step.id,
            to = %next,
            completed = self.progress.completed_steps.len(),
            minutes_left = self.progress.estimated_minutes_left,
            "Onboarding step completed"
        );

        let saved = if self.config.should_autosave(&step.id) {
            self.persist_progress().await
        } else {
            SaveStatus::NotRequested
        };

        NavigationOutcome::Advanced {
            from: step.id.clone(),
            to: next,
            saved,
        }
    }

    /// Undo the last forward transition. The stored answer is kept.
    pub fn go_to_previous_step(&mut self) -> NavigationOutcome {
        if self.is_complete {
            return NavigationOutcome::Ignored {
                reason: IgnoredReason::AlreadyComplete,
            };
        }
        let Some(previous) = self.history.pop() else {
            return NavigationOutcome::Ignored {
                reason: IgnoredReason::NoHistory,
            };
        };

        self.progress.unmark_completed(&previous);
        self.progress.record_back_navigation();
        self.progress.touch();
        self.current_step.clone_from(&previous);
        self.pending = None;
        self.validation_errors.clear();
        self.reconcile_selections();
        self.refresh_estimate();

        debug!(
            to = %previous,
            back_navigations = self.progress.back_navigations,
            "Onboarding went back"
        );
        NavigationOutcome::WentBack { to: previous }
    }

    /// Skip the current step with its default value, if it is skippable
    pub async fn skip_current_step(&mut self) -> NavigationOutcome {
        if self.is_complete {
            return NavigationOutcome::Ignored {
                reason: IgnoredReason::AlreadyComplete,
            };
        }
        let Some(step) = self.current_step() else {
            return NavigationOutcome::Ignored {
                reason: IgnoredReason::AtCompletion,
            };
        };
        if !step.skippable {
            debug!(step_id = %step.id, "Skip ignored on required step");
            return NavigationOutcome::Ignored {
                reason: IgnoredReason::NotSkippable,
            };
        }

        let step_id = step.id.clone();
        let seeded = step.default_value.clone().unwrap_or_default();
        self.progress.record_skip(&step_id);
        self.pending = Some(seeded);
        self.validation_errors.clear();
        debug!(step_id = %step_id, skips = self.progress.skips, "Onboarding step skipped");

        self.go_to_next_step().await
    }

    /// Freeze the session, persist it and flag the user as onboarded.
    ///
    /// Calling this again returns the same answers without touching the
    /// store.
    pub async fn complete_onboarding(&mut self) -> CompletionReport {
        if self.is_complete {
            return CompletionReport {
                answers: self.answers.clone(),
                progress: self.progress.clone(),
                saved: SaveStatus::NotRequested,
                marked_complete: SaveStatus::NotRequested,
            };
        }

        let now = Utc::now();
        self.progress.completed_at = Some(now);
        self.progress.last_activity = now;
        self.progress.mark_completed(COMPLETION_STEP);
        self.progress.estimated_minutes_left = 0;
        self.pending = None;
        self.validation_errors.clear();
        self.is_complete = true;

        let saved = self.persist_progress().await;
        let marked_complete = match self.user.current_user_id() {
            None => SaveStatus::Skipped,
            Some(user_id) => match self.store.mark_complete(user_id).await {
                Ok(()) => SaveStatus::Saved,
                Err(error) => self.report_failure("mark onboarding complete", &error),
            },
        };

        info!(
            answers = self.answers.len(),
            skips = self.progress.skips,
            back_navigations = self.progress.back_navigations,
            elapsed_secs = self.progress.elapsed().num_seconds(),
            "Onboarding completed"
        );

        CompletionReport {
            answers: self.answers.clone(),
            progress: self.progress.clone(),
            saved,
            marked_complete,
        }
    }

    /// Discard everything and return to the initial step
    pub fn reset_onboarding(&mut self) {
        self.current_step = self.flow.initial_step().to_owned();
        self.answers = AnswerSet::new();
        self.pending = None;
        self.validation_errors.clear();
        self.history.clear();
        self.progress = OnboardingProgress::new(0);
        self.active_pack = None;
        self.selected_modules.clear();
        self.is_complete = false;
        self.refresh_estimate();
        info!(initial_step = %self.current_step, "Onboarding reset");
    }

    // ================================
    // Resume
    // ================================

    /// Rebuild the session from a saved snapshot
    ///
    /// # Errors
    ///
    /// Returns an error if nobody is signed in, the record belongs to another
    /// user, or it references steps or packs this flow does not have
    pub fn resume(&mut self, record: OnboardingRecord) -> AppResult<()> {
        let user_id = self
            .user
            .current_user_id()
            .ok_or_else(AppError::auth_required)?;
        if record.user_id != user_id {
            return Err(
                AppError::invalid_input("Saved onboarding belongs to another user")
                    .with_user_id(record.user_id),
            );
        }
        if !FlowDefinition::is_terminal(&record.current_step)
            && self.flow.step(&record.current_step).is_none()
        {
            return Err(AppError::not_found(format!("Onboarding step {}", record.current_step))
                .with_resource_id(record.current_step));
        }
        if let Some(pack) = &record.active_pack {
            if self.flow.pack(pack).is_none() {
                return Err(AppError::not_found(format!("Onboarding pack {pack}"))
                    .with_resource_id(pack.clone()));
            }
        }

        self.current_step = record.current_step;
        self.answers = record.answers;
        self.progress = record.progress;
        self.history = record.history;
        self.active_pack = record.active_pack;
        self.selected_modules = record.selected_modules;
        self.is_complete = record.is_complete;
        self.pending = None;
        self.validation_errors.clear();
        if !self.is_complete {
            self.refresh_estimate();
        }

        info!(
            user_id = %user_id,
            current_step = %self.current_step,
            completed = self.progress.completed_steps.len(),
            "Onboarding restored"
        );
        Ok(())
    }

    /// Restore the current user's last saved snapshot, if there is one
    ///
    /// # Errors
    ///
    /// Returns an error if nobody is signed in, the store fails, or the
    /// snapshot does not fit this flow
    pub async fn load_saved_progress(&mut self) -> AppResult<bool> {
        let user_id = self
            .user
            .current_user_id()
            .ok_or_else(AppError::auth_required)?;
        match self.store.load_progress(user_id).await? {
            Some(record) => {
                self.resume(record)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    // ================================
    // Internals
    // ================================

    fn apply_effect(&mut self, step: &Step, value: &AnswerValue) {
        match step.effect {
            StepEffect::None => {}
            StepEffect::SelectPack => {
                self.active_pack = value
                    .as_text()
                    .and_then(|id| self.flow.pack(id))
                    .filter(|pack| pack.is_linear())
                    .map(|pack| pack.id.clone());
                debug!(pack = ?self.active_pack, "Onboarding pack selected");
            }
            StepEffect::SelectModules => {
                self.selected_modules = value
                    .as_list()
                    .map(<[String]>::to_vec)
                    .unwrap_or_default();
                debug!(modules = ?self.selected_modules, "Onboarding modules selected");
            }
        }
    }

    fn next_step_id(&self, step: &Step, value: &AnswerValue) -> String {
        match self.active_pack.as_deref().and_then(|id| self.flow.pack(id)) {
            Some(pack) => self
                .flow
                .next_in_pack(pack, &step.id, &self.progress.completed_steps),
            None => self.flow.resolve_next(&step.id, value, &self.answers),
        }
    }

    /// Drop pack and module selections whose selecting step was undone
    fn reconcile_selections(&mut self) {
        let confirmed = |effect: StepEffect| {
            self.flow
                .steps()
                .any(|step| step.effect == effect && self.progress.is_completed(&step.id))
        };
        let pack_confirmed = confirmed(StepEffect::SelectPack);
        let modules_confirmed = confirmed(StepEffect::SelectModules);
        if !pack_confirmed {
            self.active_pack = None;
        }
        if !modules_confirmed {
            self.selected_modules.clear();
        }
    }

    /// Steps still ahead of the user.
    ///
    /// With a linear pack these are the pack entries not yet completed.
    /// Otherwise the graph is walked from the current step, resolving each
    /// edge with the answer stored so far (null when unanswered), so
    /// branches that were not taken are left out.
    fn remaining_steps(&self) -> Vec<&Step> {
        if let Some(pack) = self.active_pack.as_deref().and_then(|id| self.flow.pack(id)) {
            return pack
                .steps
                .iter()
                .filter_map(|id| self.flow.step(id))
                .filter(|step| !self.progress.is_completed(&step.id))
                .collect();
        }

        let mut ahead = Vec::new();
        let mut visited = HashSet::new();
        let mut cursor = self.current_step.clone();
        while let Some(step) = self.flow.step(&cursor) {
            if !visited.insert(step.id.as_str()) {
                break;
            }
            if !self.progress.is_completed(&step.id) {
                ahead.push(step);
            }
            let answer = step
                .data_key
                .as_deref()
                .and_then(|key| self.answers.get(key))
                .cloned()
                .unwrap_or_default();
            cursor = self.flow.resolve_next(&step.id, &answer, &self.answers);
        }
        ahead
    }

    fn refresh_estimate(&mut self) {
        let seconds: u32 = self
            .remaining_steps()
            .iter()
            .map(|step| step.estimated_seconds)
            .sum();
        self.progress.estimated_minutes_left = seconds.div_ceil(60);
    }

    fn snapshot(&self, user_id: Uuid) -> OnboardingRecord {
        OnboardingRecord {
            user_id,
            answers: self.answers.clone(),
            progress: self.progress.clone(),
            current_step: self.current_step.clone(),
            history: self.history.clone(),
            active_pack: self.active_pack.clone(),
            selected_modules: self.selected_modules.clone(),
            is_complete: self.is_complete,
            updated_at: Utc::now(),
        }
    }

    async fn persist_progress(&self) -> SaveStatus {
        let Some(user_id) = self.user.current_user_id() else {
            debug!("No authenticated user, onboarding progress not saved");
            return SaveStatus::Skipped;
        };
        let record = self.snapshot(user_id);
        match self.store.save_progress(&record).await {
            Ok(()) => {
                debug!(
                    user_id = %user_id,
                    current_step = %record.current_step,
                    "Onboarding progress saved"
                );
                SaveStatus::Saved
            }
            Err(error) => self.report_failure("save onboarding progress", &error),
        }
    }

    fn report_failure(&self, action: &str, error: &AppError) -> SaveStatus {
        warn!(error = %error, code = ?error.code, "Failed to {action}");
        if self.config.debug_mode {
            self.notifier
                .notify_warning(&format!("Could not {action}: {}", error.message));
        }
        SaveStatus::Failed {
            code: error.code,
            message: error.to_string(),
        }
    }
}
