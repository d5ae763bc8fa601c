// ABOUTME: Energy expenditure configuration for personalized calorie targets
// ABOUTME: Mifflin-St Jeor coefficients, activity factors, objective adjustments and safety floors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero

//! Calorie Target Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use serde::{Deserialize, Serialize};

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
    /// Lower bound applied to any computed BMR
    pub min_bmr_kcal: f64,
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-2 sessions/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-4 sessions/week): 1.55
    pub moderately_active: f64,
    /// Very active (5-6 sessions/week): 1.725
    pub very_active: f64,
    /// Extra active (daily hard training): 1.9
    pub extra_active: f64,
}

/// Daily calorie target adjustments by main objective
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieTargetConfig {
    /// Deficit applied for weight loss (kcal/day)
    pub weight_loss_deficit_kcal: f64,
    /// Surplus applied for muscle gain (kcal/day)
    pub muscle_gain_surplus_kcal: f64,
    /// Surplus applied for performance objectives (kcal/day)
    pub performance_surplus_kcal: f64,
    /// Minimum daily target for men
    pub male_floor_kcal: f64,
    /// Minimum daily target for women
    pub female_floor_kcal: f64,
    /// Minimum daily target when gender is not given
    pub other_floor_kcal: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
            min_bmr_kcal: 1000.0,
        }
    }
}

impl BmrConfig {
    /// Gender constant used when the user did not state a gender
    #[must_use]
    pub fn neutral_constant(&self) -> f64 {
        (self.msj_male_constant + self.msj_female_constant) / 2.0
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}

impl Default for CalorieTargetConfig {
    fn default() -> Self {
        Self {
            weight_loss_deficit_kcal: 500.0,
            muscle_gain_surplus_kcal: 300.0,
            performance_surplus_kcal: 200.0,
            male_floor_kcal: 1500.0,
            female_floor_kcal: 1200.0,
            other_floor_kcal: 1350.0,
        }
    }
}
