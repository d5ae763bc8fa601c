// ABOUTME: Core data models shared by the flow controller, stores and goal calculator
// ABOUTME: Re-exports answer values, answer sets, progress bookkeeping and persisted records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero

//! # Data Models
//!
//! - `AnswerValue`: one answer (text, number, list, boolean or null)
//! - `AnswerSet`: accumulated answers keyed by step data key
//! - `OnboardingProgress`: completion order, skips, back navigations, timing
//! - `OnboardingRecord`: the snapshot mirrored to persistence

mod answers;
mod onboarding;

pub use answers::{AnswerSet, AnswerValue};
pub use onboarding::{OnboardingProgress, OnboardingRecord};
