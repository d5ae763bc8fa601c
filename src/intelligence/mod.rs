// ABOUTME: Goal calculation from onboarding answers
// ABOUTME: Energy expenditure, BMI and hydration calculators plus the combined goals summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero

//! # Intelligence
//!
//! Pure calculators. Every coefficient comes from
//! [`GoalsConfig`](crate::config::GoalsConfig).

/// Combined daily goals
pub mod goals;
/// Water intake goal
pub mod hydration_calculator;
/// BMR, TDEE, calorie target and BMI
pub mod nutrition_calculator;

pub use goals::PersonalizedGoals;
pub use hydration_calculator::{calculate_hydration_goal, HydrationParams, SportCategory};
pub use nutrition_calculator::{
    calculate_bmi, calculate_calorie_target, calculate_mifflin_st_jeor, calculate_tdee,
    ActivityLevel, BmiCategory, Gender, Objective,
};
