// ABOUTME: Personalized daily goals derived from completed onboarding answers
// ABOUTME: Combines BMR, TDEE, calorie target, BMI and hydration into one serializable summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero

use super::hydration_calculator::{calculate_hydration_goal, HydrationParams, SportCategory};
use super::nutrition_calculator::{
    calculate_bmi, calculate_calorie_target, calculate_mifflin_st_jeor, calculate_tdee,
    ActivityLevel, BmiCategory, Gender, Objective,
};
use crate::config::GoalsConfig;
use crate::constants::answer_keys;
use crate::errors::{AppError, AppResult};
use crate::models::AnswerSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Daily goals shown at the end of onboarding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalizedGoals {
    /// Gender used for the calculations
    pub gender: Gender,
    /// Objective used for the calorie adjustment
    pub objective: Objective,
    /// Activity level used for TDEE
    pub activity_level: ActivityLevel,
    /// Basal metabolic rate (kcal/day)
    pub bmr_kcal: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee_kcal: f64,
    /// Daily calorie target (kcal/day)
    pub daily_calories_kcal: f64,
    /// Body mass index
    pub bmi: f64,
    /// WHO category of `bmi`
    pub bmi_category: BmiCategory,
    /// Daily water goal (ml)
    pub hydration_ml: f64,
    /// Target weight, when one was given
    pub target_weight_kg: Option<f64>,
}

impl PersonalizedGoals {
    /// Compute goals from an answer set
    ///
    /// Age, height and weight are required. Gender defaults to `Other`,
    /// the objective falls back to the selected pack, and the activity level
    /// falls back to training frequency.
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when a required answer is absent and
    /// `ValueOutOfRange` when a value cannot be used
    pub fn from_answers(answers: &AnswerSet, config: &GoalsConfig) -> AppResult<Self> {
        let age = required_number(answers, answer_keys::AGE)?;
        let height_cm = required_number(answers, answer_keys::HEIGHT_CM)?;
        let weight_kg = required_number(answers, answer_keys::WEIGHT_KG)?;
        if !(0.0..=150.0).contains(&age) {
            return Err(AppError::out_of_range("Age must be between 0 and 150")
                .with_resource_id(answer_keys::AGE));
        }
        let age = age.round() as u32;

        let gender = Gender::from_answer(answers.text(answer_keys::GENDER));
        let objective = answers
            .text(answer_keys::MAIN_OBJECTIVE)
            .and_then(Objective::from_answer)
            .unwrap_or_else(|| {
                answers
                    .text(answer_keys::PACK)
                    .map_or(Objective::Maintenance, Objective::from_pack)
            });
        let sessions_per_week = answers
            .number(answer_keys::TRAINING_FREQUENCY)
            .unwrap_or(0.0);
        let activity_level = answers
            .text(answer_keys::ACTIVITY_LEVEL)
            .and_then(ActivityLevel::from_answer)
            .unwrap_or_else(|| ActivityLevel::from_training_frequency(sessions_per_week));

        let bmr_kcal = calculate_mifflin_st_jeor(weight_kg, height_cm, age, gender, &config.bmr)?;
        let tdee_kcal = calculate_tdee(bmr_kcal, activity_level, &config.activity_factors)?;
        let daily_calories_kcal =
            calculate_calorie_target(tdee_kcal, objective, gender, &config.calorie_target);
        let bmi = calculate_bmi(weight_kg, height_cm)?;
        let hydration_ml = calculate_hydration_goal(
            &HydrationParams {
                weight_kg,
                gender,
                age,
                sport: SportCategory::from_sport(answers.text(answer_keys::SPORT)),
                sessions_per_week,
            },
            &config.hydration,
        )?;

        debug!(
            bmr = bmr_kcal,
            tdee = tdee_kcal,
            calories = daily_calories_kcal,
            hydration_ml,
            "Personalized goals computed"
        );

        Ok(Self {
            gender,
            objective,
            activity_level,
            bmr_kcal: bmr_kcal.round(),
            tdee_kcal: tdee_kcal.round(),
            daily_calories_kcal,
            bmi: (bmi * 10.0).round() / 10.0,
            bmi_category: BmiCategory::from_bmi(bmi),
            hydration_ml,
            target_weight_kg: answers.number(answer_keys::TARGET_WEIGHT_KG),
        })
    }

    /// Hydration goal in liters
    #[must_use]
    pub fn hydration_liters(&self) -> f64 {
        self.hydration_ml / 1000.0
    }
}

fn required_number(answers: &AnswerSet, key: &str) -> AppResult<f64> {
    match answers.get(key) {
        None => Err(AppError::missing_field(key)),
        Some(value) if value.is_blank() => Err(AppError::missing_field(key)),
        Some(value) => value.as_number().ok_or_else(|| {
            AppError::out_of_range(format!("{key} must be a number")).with_resource_id(key)
        }),
    }
}
