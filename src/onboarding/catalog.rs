// ABOUTME: Default MyFitHero onboarding flow: profile questions, packs and module sections
// ABOUTME: Custom path branches on the main objective and skips sections of unselected modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero

//! # Default Flow
//!
//! ```text
//! welcome -> first_name -> age -> gender -> height_cm -> weight_kg
//!   -> activity_level -> pack_selection
//!        |- wellness / athlete / weight_loss : fixed pack list -> completion
//!        `- custom -> module_selection -> main_objective
//!              -> [target_weight] -> module sections -> terms_acceptance
//! ```
//!
//! Module sections run in a fixed order. On the custom path the conditional
//! override jumps over every section whose module was not selected.

use super::flow::{
    ChoiceOption, FlowDefinition, InputType, NextStep, Pack, Step, StepEffect,
};
use super::validation::ValidationRule;
use crate::constants::answer_keys;
use crate::constants::onboarding::{CUSTOM_PACK, MODULE_SELECTION, PACK_SELECTION};
use crate::errors::FlowDefinitionError;
use crate::models::{AnswerSet, AnswerValue};

/// Module ids offered on the custom path, in section order
pub mod modules {
    /// Sport and training
    pub const SPORT: &str = "sport";
    /// Strength training
    pub const STRENGTH: &str = "strength";
    /// Nutrition
    pub const NUTRITION: &str = "nutrition";
    /// Sleep
    pub const SLEEP: &str = "sleep";
    /// Hydration
    pub const HYDRATION: &str = "hydration";
    /// Mental wellness
    pub const WELLNESS: &str = "wellness";

    /// All modules in section order
    pub const ALL: [&str; 6] = [SPORT, STRENGTH, NUTRITION, SLEEP, HYDRATION, WELLNESS];
}

/// Objective that branches into the target weight question
pub const WEIGHT_LOSS_OBJECTIVE: &str = "weight_loss";

/// First step of the module sections
const FIRST_SECTION_STEP: &str = "sport";
const TARGET_WEIGHT_STEP: &str = "target_weight";
const TERMS_STEP: &str = "terms_acceptance";

fn options(pairs: &[(&str, &str)]) -> Vec<ChoiceOption> {
    pairs
        .iter()
        .map(|(value, label)| ChoiceOption::new(*value, *label))
        .collect()
}

fn single(pairs: &[(&str, &str)]) -> InputType {
    InputType::SingleChoice {
        options: options(pairs),
    }
}

fn multi(pairs: &[(&str, &str)]) -> InputType {
    InputType::MultiChoice {
        options: options(pairs),
    }
}

/// Weight loss asks for a target weight first
fn after_main_objective(answer: &AnswerValue, _answers: &AnswerSet) -> String {
    if answer.as_text() == Some(WEIGHT_LOSS_OBJECTIVE) {
        TARGET_WEIGHT_STEP.to_owned()
    } else {
        FIRST_SECTION_STEP.to_owned()
    }
}

fn below_current_weight(value: &AnswerValue, answers: &AnswerSet) -> bool {
    match (value.as_number(), answers.number(answer_keys::WEIGHT_KG)) {
        (Some(target), Some(current)) => target < current,
        _ => true,
    }
}

fn accepted(value: &AnswerValue, _answers: &AnswerSet) -> bool {
    value.as_bool() == Some(true)
}

/// Jump over module sections the user did not pick
fn skip_unselected_modules(
    flow: &FlowDefinition,
    target: &str,
    answers: &AnswerSet,
) -> Option<String> {
    let step = flow.step(target)?;
    let module = step.module.as_deref()?;
    let selected = answers.list(answer_keys::MODULES).unwrap_or(&[]);
    if selected.iter().any(|m| m == module) {
        return None;
    }
    Some(step.resolve_next(&AnswerValue::Null, answers))
}

fn profile_steps() -> Vec<Step> {
    vec![
        Step::new(
            "welcome",
            "Welcome to MyFitHero! A few questions and your plan is ready.",
            InputType::Info,
        )
        .estimated_seconds(10)
        .then_to("first_name"),
        Step::new("first_name", "What should we call you?", InputType::Text)
            .rule(ValidationRule::required("Please tell us your first name"))
            .rule(ValidationRule::min(2.0, "First name must have at least 2 characters"))
            .rule(ValidationRule::max(50.0, "First name must have at most 50 characters"))
            .then_to("age"),
        Step::new("age", "How old are you?", InputType::number("years"))
            .rule(ValidationRule::required("Age is required"))
            .rule(ValidationRule::range(13.0, 120.0, "Age must be between 13 and 120"))
            .then_to("gender"),
        Step::new(
            "gender",
            "Which gender should we use for your calculations?",
            single(&[("male", "Male"), ("female", "Female"), ("other", "Other")]),
        )
        .describe("Used only to personalize calorie and hydration goals")
        .skippable(None)
        .then_to("height_cm"),
        Step::new("height_cm", "How tall are you?", InputType::number("cm"))
            .rule(ValidationRule::required("Height is required"))
            .rule(ValidationRule::range(100.0, 250.0, "Height must be between 100 and 250 cm"))
            .then_to("weight_kg"),
        Step::new("weight_kg", "What is your current weight?", InputType::number("kg"))
            .rule(ValidationRule::required("Weight is required"))
            .rule(ValidationRule::range(30.0, 300.0, "Weight must be between 30 and 300 kg"))
            .then_to("activity_level"),
        Step::new(
            "activity_level",
            "How active is a typical day for you?",
            single(&[
                ("sedentary", "Mostly sitting"),
                ("light", "Lightly active"),
                ("moderate", "Moderately active"),
                ("active", "Very active"),
                ("very_active", "Physical job or daily training"),
            ]),
        )
        .rule(ValidationRule::required("Please pick an activity level"))
        .then_to(PACK_SELECTION),
        Step::new(
            PACK_SELECTION,
            "Pick the program that fits you best",
            single(&[
                ("wellness", "Wellness"),
                ("athlete", "Athlete"),
                ("weight_loss", "Weight loss"),
                (CUSTOM_PACK, "Build my own"),
            ]),
        )
        .data_key(answer_keys::PACK)
        .rule(ValidationRule::required("Please pick a program"))
        .effect(StepEffect::SelectPack)
        .then_to(MODULE_SELECTION),
        Step::new(
            MODULE_SELECTION,
            "Which areas do you want MyFitHero to cover?",
            multi(&[
                (modules::SPORT, "Sport"),
                (modules::STRENGTH, "Strength"),
                (modules::NUTRITION, "Nutrition"),
                (modules::SLEEP, "Sleep"),
                (modules::HYDRATION, "Hydration"),
                (modules::WELLNESS, "Wellness"),
            ]),
        )
        .data_key(answer_keys::MODULES)
        .rule(ValidationRule::required("Please pick at least one area"))
        .rule(ValidationRule::min(1.0, "Please pick at least one area"))
        .effect(StepEffect::SelectModules)
        .then_to("main_objective"),
        Step::new(
            "main_objective",
            "What is your main objective?",
            single(&[
                (WEIGHT_LOSS_OBJECTIVE, "Lose weight"),
                ("muscle_gain", "Build muscle"),
                ("performance", "Improve performance"),
                ("wellbeing", "Feel better"),
                ("maintenance", "Stay in shape"),
            ]),
        )
        .rule(ValidationRule::required("Please pick an objective"))
        .then(NextStep::computed(
            [TARGET_WEIGHT_STEP, FIRST_SECTION_STEP],
            after_main_objective,
        )),
        Step::new(TARGET_WEIGHT_STEP, "What weight are you aiming for?", InputType::number("kg"))
            .data_key(answer_keys::TARGET_WEIGHT_KG)
            .rule(ValidationRule::required("Target weight is required"))
            .rule(ValidationRule::range(30.0, 300.0, "Target weight must be between 30 and 300 kg"))
            .rule(ValidationRule::custom(
                below_current_weight,
                "Target weight must be below your current weight",
            ))
            .then_to(FIRST_SECTION_STEP),
    ]
}

fn section_steps() -> Vec<Step> {
    vec![
        Step::new(
            FIRST_SECTION_STEP,
            "Which sport do you practice most?",
            single(&[
                ("running", "Running"),
                ("cycling", "Cycling"),
                ("swimming", "Swimming"),
                ("triathlon", "Triathlon"),
                ("football", "Football"),
                ("basketball", "Basketball"),
                ("tennis", "Tennis"),
                ("crossfit", "CrossFit"),
                ("yoga", "Yoga"),
                ("other", "Other"),
            ]),
        )
        .in_module(modules::SPORT)
        .rule(ValidationRule::required("Please pick a sport"))
        .then_to("training_frequency"),
        Step::new(
            "training_frequency",
            "How many sessions per week?",
            InputType::number("sessions/week"),
        )
        .in_module(modules::SPORT)
        .rule(ValidationRule::required("Training frequency is required"))
        .rule(ValidationRule::range(0.0, 14.0, "Training frequency must be between 0 and 14"))
        .then_to("strength_experience"),
        Step::new(
            "strength_experience",
            "How experienced are you with strength training?",
            single(&[
                ("beginner", "Beginner"),
                ("intermediate", "Intermediate"),
                ("advanced", "Advanced"),
            ]),
        )
        .in_module(modules::STRENGTH)
        .rule(ValidationRule::required("Please pick your experience level"))
        .then_to("dietary_preference"),
        Step::new(
            "dietary_preference",
            "Do you follow a particular diet?",
            single(&[
                ("omnivore", "No restriction"),
                ("vegetarian", "Vegetarian"),
                ("vegan", "Vegan"),
                ("pescatarian", "Pescatarian"),
                ("other", "Other"),
            ]),
        )
        .in_module(modules::NUTRITION)
        .skippable(Some(AnswerValue::text("omnivore")))
        .then_to("food_allergies"),
        Step::new(
            "food_allergies",
            "Any food allergies?",
            multi(&[
                ("gluten", "Gluten"),
                ("lactose", "Lactose"),
                ("nuts", "Nuts"),
                ("shellfish", "Shellfish"),
                ("eggs", "Eggs"),
            ]),
        )
        .in_module(modules::NUTRITION)
        .skippable(Some(AnswerValue::List(Vec::new())))
        .then_to("sleep_hours"),
        Step::new("sleep_hours", "How many hours do you sleep per night?", InputType::number("hours"))
            .in_module(modules::SLEEP)
            .rule(ValidationRule::required("Sleep duration is required"))
            .rule(ValidationRule::range(3.0, 14.0, "Sleep duration must be between 3 and 14 hours"))
            .then_to("sleep_quality"),
        Step::new(
            "sleep_quality",
            "How would you rate your sleep?",
            single(&[
                ("poor", "Poor"),
                ("fair", "Fair"),
                ("good", "Good"),
                ("excellent", "Excellent"),
            ]),
        )
        .in_module(modules::SLEEP)
        .skippable(None)
        .then_to("daily_water_intake"),
        Step::new(
            "daily_water_intake",
            "How much water do you drink per day?",
            InputType::number("liters"),
        )
        .in_module(modules::HYDRATION)
        .rule(ValidationRule::range(0.0, 10.0, "Water intake must be between 0 and 10 liters"))
        .skippable(None)
        .then_to("stress_level"),
        Step::new(
            "stress_level",
            "How stressed do you feel these days?",
            single(&[("low", "Low"), ("moderate", "Moderate"), ("high", "High")]),
        )
        .in_module(modules::WELLNESS)
        .skippable(None)
        .then_to(TERMS_STEP),
        Step::new(TERMS_STEP, "Do you accept the terms of use?", InputType::Boolean)
            .rule(ValidationRule::required("Please accept the terms to continue"))
            .rule(ValidationRule::custom(accepted, "Please accept the terms to continue"))
            .estimated_seconds(10),
    ]
}

fn packs() -> Vec<Pack> {
    vec![
        Pack::new(
            "wellness",
            "Wellness",
            "Sleep, stress and hydration habits",
            ["sleep_hours", "sleep_quality", "stress_level", "daily_water_intake", TERMS_STEP],
        ),
        Pack::new(
            "athlete",
            "Athlete",
            "Training load, strength, fuel and recovery",
            [
                FIRST_SECTION_STEP,
                "training_frequency",
                "strength_experience",
                "dietary_preference",
                "daily_water_intake",
                "sleep_hours",
                TERMS_STEP,
            ],
        ),
        Pack::new(
            "weight_loss",
            "Weight loss",
            "Target weight and nutrition habits",
            [
                TARGET_WEIGHT_STEP,
                "dietary_preference",
                "food_allergies",
                "daily_water_intake",
                TERMS_STEP,
            ],
        ),
        Pack::new(
            CUSTOM_PACK,
            "Custom",
            "Choose the areas you care about",
            std::iter::empty::<&str>(),
        ),
    ]
}

/// Build the default MyFitHero onboarding flow
///
/// # Errors
///
/// Returns an error if two steps share an id
pub fn myfithero_flow() -> Result<FlowDefinition, FlowDefinitionError> {
    let mut builder = FlowDefinition::builder("welcome");
    for step in profile_steps().into_iter().chain(section_steps()) {
        builder = builder.step(step);
    }
    for pack in packs() {
        builder = builder.pack(pack);
    }
    builder.conditional_override(skip_unselected_modules).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::onboarding::COMPLETION_STEP;

    #[test]
    fn test_default_flow_is_valid() {
        let flow = myfithero_flow().unwrap();
        let report = flow.validate().unwrap();
        assert_eq!(report.pack_count, 4);
        assert_eq!(report.terminal_steps, vec![TERMS_STEP]);
        assert!(report.longest_path >= 20);
    }

    #[test]
    fn test_main_objective_branch() {
        let flow = myfithero_flow().unwrap();
        let answers: AnswerSet = [(
            answer_keys::MODULES,
            AnswerValue::list([modules::SPORT]),
        )]
        .into_iter()
        .collect();

        assert_eq!(
            flow.resolve_next("main_objective", &AnswerValue::text("weight_loss"), &answers),
            TARGET_WEIGHT_STEP
        );
        assert_eq!(
            flow.resolve_next("main_objective", &AnswerValue::text("performance"), &answers),
            FIRST_SECTION_STEP
        );
    }

    #[test]
    fn test_override_skips_unselected_sections() {
        let flow = myfithero_flow().unwrap();
        let answers: AnswerSet = [(
            answer_keys::MODULES,
            AnswerValue::list([modules::SLEEP]),
        )]
        .into_iter()
        .collect();

        assert_eq!(
            flow.resolve_next("main_objective", &AnswerValue::text("wellbeing"), &answers),
            "sleep_hours"
        );
        assert_eq!(
            flow.resolve_next("sleep_quality", &AnswerValue::Null, &answers),
            TERMS_STEP
        );
        assert_eq!(
            flow.resolve_next(TERMS_STEP, &AnswerValue::Bool(true), &answers),
            COMPLETION_STEP
        );
    }

    #[test]
    fn test_every_linear_pack_ends_with_terms() {
        let flow = myfithero_flow().unwrap();
        for pack in flow.packs().filter(|pack| pack.is_linear()) {
            assert_eq!(pack.steps.last().map(String::as_str), Some(TERMS_STEP));
        }
    }
}
