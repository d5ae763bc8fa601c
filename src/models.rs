// ABOUTME: Data model re-exports from the foundation crate
// ABOUTME: Answers, progress bookkeeping and the persisted onboarding record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero

//! # Data Models
//!
//! - `AnswerValue` / `AnswerSet`: questionnaire answers keyed by data key
//! - `OnboardingProgress`: completion order, skips and timing
//! - `OnboardingRecord`: the full session snapshot written to stores

pub use myfithero_core::models::*;
