// ABOUTME: Daily hydration goal calculation
// ABOUTME: Weight-based intake adjusted by gender, age band, sport category and training frequency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero

use super::nutrition_calculator::Gender;
use crate::config::intelligence::HydrationConfig;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Sweat-loss profile of a sport
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SportCategory {
    /// Long continuous efforts (running, cycling, swimming, triathlon)
    Endurance,
    /// Strength and team sports
    Intermittent,
    /// Yoga, walking and similar
    LowIntensity,
    /// No sport given
    None,
}

impl SportCategory {
    /// Classify a sport answer
    #[must_use]
    pub fn from_sport(sport: Option<&str>) -> Self {
        match sport {
            Some("running" | "cycling" | "swimming" | "triathlon" | "rowing") => Self::Endurance,
            Some("football" | "basketball" | "tennis" | "crossfit" | "strength" | "other") => {
                Self::Intermittent
            }
            Some("yoga" | "pilates" | "walking") => Self::LowIntensity,
            _ => Self::None,
        }
    }
}

/// Inputs for [`calculate_hydration_goal`]
#[derive(Debug, Clone, Copy)]
pub struct HydrationParams {
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Gender
    pub gender: Gender,
    /// Age (years)
    pub age: u32,
    /// Sport profile
    pub sport: SportCategory,
    /// Training sessions per week
    pub sessions_per_week: f64,
}

/// Daily water goal in milliliters, rounded and clamped to the configured bounds
///
/// # Errors
///
/// Returns an error if weight is not positive or training frequency is negative
pub fn calculate_hydration_goal(params: &HydrationParams, config: &HydrationConfig) -> AppResult<f64> {
    if params.weight_kg <= 0.0 {
        return Err(AppError::out_of_range("Weight must be positive"));
    }
    if params.sessions_per_week < 0.0 {
        return Err(AppError::out_of_range("Training frequency cannot be negative"));
    }

    let mut goal = params.weight_kg * config.base_ml_per_kg;

    goal *= match params.gender {
        Gender::Male => 1.0,
        Gender::Female => config.female_multiplier,
        Gender::Other => config.other_multiplier,
    };

    if params.age >= config.senior_age {
        goal *= config.senior_multiplier;
    } else if params.age < config.youth_age {
        goal *= config.youth_multiplier;
    }

    let per_session = match params.sport {
        SportCategory::Endurance => config.endurance_session_ml,
        SportCategory::Intermittent => config.intermittent_session_ml,
        SportCategory::LowIntensity => config.low_intensity_session_ml,
        SportCategory::None => 0.0,
    };
    // Spread weekly training needs over every day
    goal += per_session * params.sessions_per_week.min(14.0) / 7.0;

    let clamped = goal.clamp(config.min_daily_ml, config.max_daily_ml);
    Ok((clamped / config.rounding_ml).round() * config.rounding_ml)
}
