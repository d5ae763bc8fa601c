// ABOUTME: Energy expenditure calculations using peer-reviewed formulas
// ABOUTME: BMR, TDEE, objective-adjusted calorie targets and BMI classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero

//! Nutrition Calculator Module
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - World Health Organization (2000). Obesity: preventing and managing the global epidemic.
//!   WHO Technical Report Series 894 (BMI categories).

use crate::config::intelligence::{ActivityFactorsConfig, BmrConfig, CalorieTargetConfig};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Gender for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male gender (higher BMR)
    Male,
    /// Female gender (lower BMR)
    Female,
    /// Not stated; uses the midpoint constant
    Other,
}

impl Gender {
    /// Parse an onboarding answer; anything unrecognized is `Other`
    #[must_use]
    pub fn from_answer(answer: Option<&str>) -> Self {
        match answer.map(str::to_lowercase).as_deref() {
            Some("male" | "m") => Self::Male,
            Some("female" | "f") => Self::Female,
            _ => Self::Other,
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise)
    Sedentary,
    /// Lightly active (1-2 sessions/week)
    LightlyActive,
    /// Moderately active (3-4 sessions/week)
    ModeratelyActive,
    /// Very active (5-6 sessions/week)
    VeryActive,
    /// Extra active (daily hard training)
    ExtraActive,
}

impl ActivityLevel {
    /// Parse an onboarding answer
    #[must_use]
    pub fn from_answer(answer: &str) -> Option<Self> {
        match answer {
            "sedentary" => Some(Self::Sedentary),
            "light" | "lightly_active" => Some(Self::LightlyActive),
            "moderate" | "moderately_active" => Some(Self::ModeratelyActive),
            "active" => Some(Self::VeryActive),
            "very_active" | "extra_active" => Some(Self::ExtraActive),
            _ => None,
        }
    }

    /// Derive from weekly training sessions
    #[must_use]
    pub fn from_training_frequency(sessions_per_week: f64) -> Self {
        match sessions_per_week {
            s if s < 1.0 => Self::Sedentary,
            s if s < 3.0 => Self::LightlyActive,
            s if s < 5.0 => Self::ModeratelyActive,
            s if s < 7.0 => Self::VeryActive,
            _ => Self::ExtraActive,
        }
    }
}

/// Main objective driving the calorie adjustment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    /// Caloric deficit
    WeightLoss,
    /// Caloric surplus
    MuscleGain,
    /// Small surplus for training quality
    Performance,
    /// Caloric balance, wellbeing focus
    Wellbeing,
    /// Caloric balance
    Maintenance,
}

impl Objective {
    /// Parse a `main_objective` answer
    #[must_use]
    pub fn from_answer(answer: &str) -> Option<Self> {
        match answer {
            "weight_loss" => Some(Self::WeightLoss),
            "muscle_gain" => Some(Self::MuscleGain),
            "performance" => Some(Self::Performance),
            "wellbeing" => Some(Self::Wellbeing),
            "maintenance" => Some(Self::Maintenance),
            _ => None,
        }
    }

    /// Objective implied by a pack when no objective was asked
    #[must_use]
    pub fn from_pack(pack: &str) -> Self {
        match pack {
            "weight_loss" => Self::WeightLoss,
            "athlete" => Self::Performance,
            "wellness" => Self::Wellbeing,
            _ => Self::Maintenance,
        }
    }
}

/// WHO BMI classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI 18.5 to 24.9
    Normal,
    /// BMI 25 to 29.9
    Overweight,
    /// BMI 30 and above
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor formula
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
/// - Not stated: midpoint of both
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
///
/// # Errors
///
/// Returns an error if input values are out of valid ranges
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> AppResult<f64> {
    if weight_kg <= 0.0 || weight_kg > 300.0 {
        return Err(AppError::out_of_range("Weight must be between 0 and 300 kg"));
    }
    if height_cm <= 0.0 || height_cm > 300.0 {
        return Err(AppError::out_of_range("Height must be between 0 and 300 cm"));
    }
    if !(10..=120).contains(&age) {
        return Err(AppError::out_of_range(
            "Age must be between 10 and 120 years (Mifflin-St Jeor formula validated for ages 10+)",
        ));
    }

    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
        Gender::Other => config.neutral_constant(),
    };

    let bmr = weight_component + height_component + age_component + gender_constant;
    Ok(bmr.max(config.min_bmr_kcal))
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x Activity Factor
///
/// # Errors
///
/// Returns an error if BMR is not positive
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> AppResult<f64> {
    if bmr <= 0.0 {
        return Err(AppError::out_of_range("BMR must be positive"));
    }

    let activity_factor = match activity_level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::LightlyActive => config.lightly_active,
        ActivityLevel::ModeratelyActive => config.moderately_active,
        ActivityLevel::VeryActive => config.very_active,
        ActivityLevel::ExtraActive => config.extra_active,
    };

    Ok(bmr * activity_factor)
}

/// Daily calorie target: TDEE adjusted by objective, never below the gender floor
#[must_use]
pub fn calculate_calorie_target(
    tdee: f64,
    objective: Objective,
    gender: Gender,
    config: &CalorieTargetConfig,
) -> f64 {
    let adjusted = match objective {
        Objective::WeightLoss => tdee - config.weight_loss_deficit_kcal,
        Objective::MuscleGain => tdee + config.muscle_gain_surplus_kcal,
        Objective::Performance => tdee + config.performance_surplus_kcal,
        Objective::Wellbeing | Objective::Maintenance => tdee,
    };
    let floor = match gender {
        Gender::Male => config.male_floor_kcal,
        Gender::Female => config.female_floor_kcal,
        Gender::Other => config.other_floor_kcal,
    };
    adjusted.max(floor).round()
}

/// Body Mass Index: weight (kg) / height (m)^2
///
/// # Errors
///
/// Returns an error if weight or height is not positive
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> AppResult<f64> {
    if weight_kg <= 0.0 || height_cm <= 0.0 {
        return Err(AppError::out_of_range("Weight and height must be positive"));
    }
    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mifflin_st_jeor_reference_values() {
        let config = BmrConfig::default();
        // 10*70 + 6.25*175 - 5*30 + 5 = 1648.75
        let male = calculate_mifflin_st_jeor(70.0, 175.0, 30, Gender::Male, &config).unwrap();
        assert!((male - 1648.75).abs() < 1e-9);
        // 10*60 + 6.25*165 - 5*25 - 161 = 1345.25
        let female = calculate_mifflin_st_jeor(60.0, 165.0, 25, Gender::Female, &config).unwrap();
        assert!((female - 1345.25).abs() < 1e-9);
        let other = calculate_mifflin_st_jeor(70.0, 175.0, 30, Gender::Other, &config).unwrap();
        assert!((other - 1565.75).abs() < 1e-9);
    }

    #[test]
    fn test_mifflin_rejects_out_of_range_inputs() {
        let config = BmrConfig::default();
        let err = calculate_mifflin_st_jeor(70.0, 175.0, 5, Gender::Male, &config).unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::ValueOutOfRange);
        assert!(calculate_mifflin_st_jeor(0.0, 175.0, 30, Gender::Male, &config).is_err());
    }

    #[test]
    fn test_calorie_target_respects_floor() {
        let config = CalorieTargetConfig::default();
        assert!(
            (calculate_calorie_target(1500.0, Objective::WeightLoss, Gender::Female, &config)
                - 1200.0)
                .abs()
                < f64::EPSILON
        );
        assert!(
            (calculate_calorie_target(2500.0, Objective::MuscleGain, Gender::Male, &config)
                - 2800.0)
                .abs()
                < f64::EPSILON
        );
    }

    #[test]
    fn test_bmi_categories() {
        let bmi = calculate_bmi(70.0, 175.0).unwrap();
        assert!((bmi - 22.857).abs() < 0.001);
        assert_eq!(BmiCategory::from_bmi(bmi), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(17.0), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(27.5), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(31.0), BmiCategory::Obese);
    }

    #[test]
    fn test_activity_from_training_frequency() {
        assert_eq!(ActivityLevel::from_training_frequency(0.0), ActivityLevel::Sedentary);
        assert_eq!(ActivityLevel::from_training_frequency(3.0), ActivityLevel::ModeratelyActive);
        assert_eq!(ActivityLevel::from_training_frequency(10.0), ActivityLevel::ExtraActive);
    }
}
