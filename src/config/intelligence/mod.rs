// ABOUTME: Goal calculation configuration with documented physiological defaults
// ABOUTME: Groups calorie and hydration coefficients behind a single lazily initialized config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero

//! Goal Calculation Configuration
//!
//! - `nutrition` - BMR coefficients, activity factors and calorie targets
//! - `hydration` - daily water intake adjustments

/// Water intake coefficients
pub mod hydration;
/// BMR, activity and calorie target coefficients
pub mod nutrition;

pub use hydration::HydrationConfig;
pub use nutrition::{ActivityFactorsConfig, BmrConfig, CalorieTargetConfig};

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Coefficients used to derive personalized goals from onboarding answers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalsConfig {
    /// BMR formula coefficients
    pub bmr: BmrConfig,
    /// TDEE activity multipliers
    pub activity_factors: ActivityFactorsConfig,
    /// Objective adjustments and floors
    pub calorie_target: CalorieTargetConfig,
    /// Water intake coefficients
    pub hydration: HydrationConfig,
}

impl GoalsConfig {
    /// Shared default configuration
    pub fn global() -> &'static Self {
        static CONFIG: OnceLock<GoalsConfig> = OnceLock::new();
        CONFIG.get_or_init(Self::default)
    }
}
