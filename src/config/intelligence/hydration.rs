// ABOUTME: Hydration goal configuration
// ABOUTME: Per-kilogram base intake with gender, age band, sport and training frequency adjustments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero

use serde::{Deserialize, Serialize};

/// Daily water intake configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrationConfig {
    /// Base intake per kilogram of body weight (ml)
    pub base_ml_per_kg: f64,
    /// Multiplier applied for women
    pub female_multiplier: f64,
    /// Multiplier applied when gender is not given
    pub other_multiplier: f64,
    /// Age from which the senior multiplier applies
    pub senior_age: u32,
    /// Multiplier applied from `senior_age`
    pub senior_multiplier: f64,
    /// Age below which the youth multiplier applies
    pub youth_age: u32,
    /// Multiplier applied below `youth_age`
    pub youth_multiplier: f64,
    /// Extra intake per endurance session (ml)
    pub endurance_session_ml: f64,
    /// Extra intake per strength or team-sport session (ml)
    pub intermittent_session_ml: f64,
    /// Extra intake per low-intensity session (ml)
    pub low_intensity_session_ml: f64,
    /// Lower bound on the daily goal (ml)
    pub min_daily_ml: f64,
    /// Upper bound on the daily goal (ml)
    pub max_daily_ml: f64,
    /// Rounding step for the final goal (ml)
    pub rounding_ml: f64,
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self {
            base_ml_per_kg: 35.0,
            female_multiplier: 0.9,
            other_multiplier: 0.95,
            senior_age: 65,
            senior_multiplier: 0.9,
            youth_age: 18,
            youth_multiplier: 0.95,
            endurance_session_ml: 750.0,
            intermittent_session_ml: 500.0,
            low_intensity_session_ml: 250.0,
            min_daily_ml: 1500.0,
            max_daily_ml: 5000.0,
            rounding_ml: 50.0,
        }
    }
}
