// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, controller builders, answer fixtures and store test doubles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `myfithero`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use async_trait::async_trait;
use myfithero::config::OnboardingConfig;
use myfithero::database::{Database, InMemoryOnboardingStore};
use myfithero::errors::{AppError, AppResult};
use myfithero::models::{AnswerValue, OnboardingRecord};
use myfithero::onboarding::{
    myfithero_flow, FixedUser, FlowDefinition, OnboardingController, OnboardingStore,
    ProgressNotifier,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level, quiet by default
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Shared instance of the default flow
pub fn default_flow() -> Arc<FlowDefinition> {
    Arc::new(myfithero_flow().unwrap())
}

/// Standard in-memory database setup
pub async fn create_test_database() -> AppResult<Database> {
    init_test_logging();
    Database::new("sqlite::memory:").await
}

/// Controller over the default flow with a signed-in user
pub fn create_test_controller(
    store: Arc<dyn OnboardingStore>,
    user_id: Uuid,
    config: OnboardingConfig,
) -> OnboardingController {
    init_test_logging();
    OnboardingController::new(
        default_flow(),
        store,
        Arc::new(FixedUser::new(user_id)),
        config,
    )
}

/// Controller over the default flow backed by a fresh in-memory store
pub fn create_memory_controller() -> (OnboardingController, Arc<InMemoryOnboardingStore>, Uuid) {
    let store = Arc::new(InMemoryOnboardingStore::new());
    let user_id = Uuid::new_v4();
    let controller = create_test_controller(store.clone(), user_id, OnboardingConfig::default());
    (controller, store, user_id)
}

/// An answer that passes every rule of the given step of the default flow
pub fn valid_answer(step_id: &str) -> AnswerValue {
    match step_id {
        "welcome" => AnswerValue::Null,
        "first_name" => AnswerValue::text("Alex"),
        "age" => AnswerValue::Number(30.0),
        "gender" => AnswerValue::text("female"),
        "height_cm" => AnswerValue::Number(168.0),
        "weight_kg" => AnswerValue::Number(70.0),
        "activity_level" => AnswerValue::text("moderate"),
        "pack_selection" => AnswerValue::text("custom"),
        "module_selection" => AnswerValue::list(["sport", "sleep"]),
        "main_objective" => AnswerValue::text("performance"),
        "target_weight" => AnswerValue::Number(64.0),
        "sport" => AnswerValue::text("running"),
        "training_frequency" => AnswerValue::Number(4.0),
        "strength_experience" => AnswerValue::text("beginner"),
        "dietary_preference" => AnswerValue::text("vegetarian"),
        "food_allergies" => AnswerValue::list(["nuts"]),
        "sleep_hours" => AnswerValue::Number(8.0),
        "sleep_quality" => AnswerValue::text("good"),
        "daily_water_intake" => AnswerValue::Number(2.0),
        "stress_level" => AnswerValue::text("low"),
        "terms_acceptance" => AnswerValue::Bool(true),
        other => panic!("no fixture answer for step {other}"),
    }
}

/// Answer the current step with its fixture (or `overrides`) until the
/// controller reaches completion; returns the number of forward steps taken
pub async fn answer_until_completion(
    controller: &mut OnboardingController,
    overrides: &[(&str, AnswerValue)],
) -> usize {
    let mut forward_steps = 0;
    while !controller.is_at_completion() {
        assert!(forward_steps < 100, "flow did not terminate");
        let step_id = controller.current_step_id().to_owned();
        let answer = overrides
            .iter()
            .find(|(id, _)| *id == step_id)
            .map_or_else(|| valid_answer(&step_id), |(_, value)| value.clone());
        controller.set_current_response(answer);
        let outcome = controller.go_to_next_step().await;
        assert!(
            outcome.is_advanced(),
            "step {step_id} was not accepted: {outcome:?}"
        );
        forward_steps += 1;
    }
    forward_steps
}

/// Store whose writes always fail
#[derive(Debug, Default)]
pub struct FailingStore {
    attempts: AtomicUsize,
}

impl FailingStore {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OnboardingStore for FailingStore {
    async fn save_progress(&self, _record: &OnboardingRecord) -> AppResult<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(AppError::storage("backend unavailable"))
    }

    async fn mark_complete(&self, _user_id: Uuid) -> AppResult<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(AppError::storage("backend unavailable"))
    }

    async fn load_progress(&self, _user_id: Uuid) -> AppResult<Option<OnboardingRecord>> {
        Err(AppError::storage("backend unavailable"))
    }
}

/// Notifier that keeps every warning it receives
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    warnings: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }
}

impl ProgressNotifier for RecordingNotifier {
    fn notify_warning(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_owned());
    }
}
