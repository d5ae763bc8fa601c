// ABOUTME: Integration tests for personalized goal calculation from onboarding answers
// ABOUTME: Validates calorie, BMI and hydration goals plus fallbacks and input errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{answer_until_completion, create_memory_controller};
use myfithero::config::GoalsConfig;
use myfithero::errors::ErrorCode;
use myfithero::intelligence::{ActivityLevel, BmiCategory, Gender, Objective, PersonalizedGoals};
use myfithero::models::{AnswerSet, AnswerValue};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

fn base_answers() -> AnswerSet {
    [
        ("age", AnswerValue::Number(40.0)),
        ("gender", AnswerValue::text("male")),
        ("height_cm", AnswerValue::Number(180.0)),
        ("weight_kg", AnswerValue::Number(80.0)),
    ]
    .into_iter()
    .collect()
}

#[tokio::test]
async fn test_goals_from_completed_session() {
    let (mut controller, _, _) = create_memory_controller();
    answer_until_completion(&mut controller, &[]).await;
    let report = controller.complete_onboarding().await;

    let goals = PersonalizedGoals::from_answers(&report.answers, GoalsConfig::global()).unwrap();

    // Female, 30 years, 168 cm, 70 kg, moderate activity, performance objective
    assert_eq!(goals.gender, Gender::Female);
    assert_eq!(goals.objective, Objective::Performance);
    assert_eq!(goals.activity_level, ActivityLevel::ModeratelyActive);
    assert_close(goals.bmr_kcal, 1439.0);
    assert_close(goals.tdee_kcal, 2230.0);
    assert_close(goals.daily_calories_kcal, 2430.0);
    assert_close(goals.bmi, 24.8);
    assert_eq!(goals.bmi_category, BmiCategory::Normal);
    // 70 kg x 35 ml x 0.9 plus four running sessions a week, rounded to 50 ml
    assert_close(goals.hydration_ml, 2650.0);
    assert_close(goals.hydration_liters(), 2.65);
    assert_eq!(goals.target_weight_kg, None);
}

#[test]
fn test_objective_falls_back_to_pack() {
    let mut answers = base_answers();
    answers.insert("pack", AnswerValue::text("weight_loss"));
    answers.insert("activity_level", AnswerValue::text("sedentary"));

    let goals = PersonalizedGoals::from_answers(&answers, GoalsConfig::global()).unwrap();

    assert_eq!(goals.objective, Objective::WeightLoss);
    // 10*80 + 6.25*180 - 5*40 + 5 = 1730, x1.2 = 2076, -500
    assert_close(goals.bmr_kcal, 1730.0);
    assert_close(goals.daily_calories_kcal, 1576.0);
    assert_close(goals.hydration_ml, 2800.0);
}

#[test]
fn test_activity_falls_back_to_training_frequency() {
    let mut answers = base_answers();
    answers.insert("training_frequency", AnswerValue::Number(6.0));

    let goals = PersonalizedGoals::from_answers(&answers, GoalsConfig::global()).unwrap();

    assert_eq!(goals.activity_level, ActivityLevel::VeryActive);
    assert_eq!(goals.objective, Objective::Maintenance);
    assert_close(goals.tdee_kcal, (1730.0_f64 * 1.725).round());
}

#[test]
fn test_skipped_gender_uses_neutral_values() {
    let mut answers = base_answers();
    answers.insert("gender", AnswerValue::Null);
    answers.insert("target_weight_kg", AnswerValue::Number(72.0));

    let goals = PersonalizedGoals::from_answers(&answers, GoalsConfig::global()).unwrap();

    assert_eq!(goals.gender, Gender::Other);
    // Midpoint of +5 and -161
    assert_close(goals.bmr_kcal, 1647.0);
    assert_eq!(goals.target_weight_kg, Some(72.0));
}

#[test]
fn test_missing_and_invalid_inputs() {
    let mut answers = base_answers();
    answers.insert("weight_kg", AnswerValue::Null);
    let error = PersonalizedGoals::from_answers(&answers, GoalsConfig::global()).unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert_eq!(error.context.resource_id.as_deref(), Some("weight_kg"));

    let mut answers = base_answers();
    answers.insert("age", AnswerValue::text("forty"));
    let error = PersonalizedGoals::from_answers(&answers, GoalsConfig::global()).unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);

    let error = PersonalizedGoals::from_answers(&AnswerSet::new(), GoalsConfig::global())
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert_eq!(error.context.resource_id.as_deref(), Some("age"));
}

#[test]
fn test_goals_serialize_with_snake_case_enums() {
    let goals = PersonalizedGoals::from_answers(&base_answers(), GoalsConfig::global()).unwrap();
    let json = serde_json::to_value(&goals).unwrap();

    assert_eq!(json["gender"], "male");
    assert_eq!(json["objective"], "maintenance");
    assert_eq!(json["activity_level"], "sedentary");
    assert_eq!(json["bmi_category"], "normal");
}
