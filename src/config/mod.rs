// ABOUTME: Configuration management module for runtime settings and calculation parameters
// ABOUTME: Handles environment configs, onboarding behavior and goal calculation coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero
//! Configuration module
//!
//! - **Environment**: log level, database and onboarding flags from environment variables
//! - **Intelligence**: coefficients for personalized goal calculation

/// Environment and onboarding configuration
pub mod environment;
/// Goal calculation coefficients
pub mod intelligence;

pub use environment::{AppConfig, DatabaseUrl, Environment, LogLevel, OnboardingConfig};
pub use intelligence::GoalsConfig;
