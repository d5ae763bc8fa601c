// ABOUTME: Main library entry point for the MyFitHero onboarding engine
// ABOUTME: Conversational onboarding flow, answer validation, autosave stores and goal calculation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero

#![deny(unsafe_code)]

//! # MyFitHero Onboarding
//!
//! A conversational onboarding engine: a static question graph, a
//! per-session controller that validates answers and tracks progress, and
//! best-effort persistence of the session after important steps.
//!
//! ## Architecture
//!
//! - **Onboarding**: flow graph, validation rules, controller, persistence traits
//! - **Database**: SQLite and in-memory onboarding stores
//! - **Intelligence**: personalized calorie and hydration goals from answers
//! - **Config**: environment configuration and calculation coefficients
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use myfithero::config::OnboardingConfig;
//! use myfithero::database::InMemoryOnboardingStore;
//! use myfithero::errors::AppResult;
//! use myfithero::onboarding::{myfithero_flow, FixedUser, OnboardingController};
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let flow = Arc::new(myfithero_flow()?);
//!     let mut controller = OnboardingController::new(
//!         flow,
//!         Arc::new(InMemoryOnboardingStore::new()),
//!         Arc::new(FixedUser::new(Uuid::new_v4())),
//!         OnboardingConfig::default(),
//!     );
//!
//!     controller.go_to_next_step().await; // welcome screen
//!     controller.set_current_response("Alex");
//!     let outcome = controller.go_to_next_step().await;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Application constants
pub mod constants;

/// SQLite and in-memory onboarding stores
pub mod database;

/// Unified error handling
pub mod errors;

/// Personalized goal calculation
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Answer and progress models
pub mod models;

/// Conversational onboarding engine
pub mod onboarding;
