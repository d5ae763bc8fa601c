// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero
// ABOUTME: Output formatting helpers for myfithero-onboarding
// ABOUTME: Provides consistent display functions for steps, outcomes, saved progress and goals

use myfithero::intelligence::PersonalizedGoals;
use myfithero::models::OnboardingRecord;
use myfithero::onboarding::{
    FlowDefinition, FlowReport, InputType, NavigationOutcome, OnboardingController, SaveStatus,
    Step,
};

/// Print the current question with its options and the session progress
pub fn display_step(controller: &OnboardingController, step: &Step) {
    println!();
    println!(
        "[{:>3}%  ~{} min left]",
        controller.progress_percentage(),
        controller.progress().estimated_minutes_left
    );
    println!("{}", step.prompt);
    if let Some(description) = &step.description {
        println!("  {description}");
    }

    match &step.input {
        InputType::Info => println!("  (press Enter to continue)"),
        InputType::Number { unit: Some(unit) } => println!("  Unit: {unit}"),
        InputType::SingleChoice { options } | InputType::MultiChoice { options } => {
            for (index, option) in options.iter().enumerate() {
                println!("  {}. {}", index + 1, option.label);
            }
            if matches!(step.input, InputType::MultiChoice { .. }) {
                println!("  (comma-separated, e.g. 1,3)");
            }
        }
        InputType::Boolean => println!("  (yes / no)"),
        InputType::Number { unit: None } | InputType::Text | InputType::Email => {}
    }

    if let Some(current) = step
        .data_key
        .as_deref()
        .and_then(|key| controller.answers().get(key))
    {
        println!("  Current answer: {current} (press enter to keep it)");
    }

    let mut hints = Vec::new();
    if controller.can_go_back() {
        hints.push(":back");
    }
    if controller.can_skip() {
        hints.push(":skip");
    }
    hints.push(":quit");
    println!("  {}", hints.join("  "));
}

/// Print what a navigation call did
pub fn display_outcome(outcome: &NavigationOutcome) {
    match outcome {
        NavigationOutcome::Rejected { errors, .. } => {
            for error in errors {
                println!("  ! {error}");
            }
        }
        NavigationOutcome::Advanced { saved, .. } => display_save_status(saved),
        NavigationOutcome::WentBack { .. } => {}
        NavigationOutcome::Ignored { reason } => println!("  (nothing to do: {reason:?})"),
    }
}

/// Print a save result when it is worth mentioning
pub fn display_save_status(status: &SaveStatus) {
    match status {
        SaveStatus::Saved => println!("  Progress saved."),
        SaveStatus::Failed { message, .. } => println!("  Progress could not be saved: {message}"),
        SaveStatus::NotRequested | SaveStatus::Skipped => {}
    }
}

/// Print a flow validation report
pub fn display_flow_report(flow: &FlowDefinition, report: &FlowReport) {
    println!("\nOnboarding Flow Valid");
    println!("{}", "=".repeat(50));
    println!("   Initial step: {}", flow.initial_step());
    println!("   Steps: {}", report.step_count);
    println!("   Longest path: {} steps", report.longest_path);
    println!("   Ends after: {}", report.terminal_steps.join(", "));
    println!("   Packs: {}", report.pack_count);
    for pack in flow.packs() {
        let route = if pack.is_linear() {
            pack.steps.join(" > ")
        } else {
            "follows the full flow".to_owned()
        };
        println!("     - {} ({}): {route}", pack.name, pack.id);
    }
}

/// Print a saved onboarding record
pub fn display_record(record: &OnboardingRecord, display_name: Option<&str>) {
    println!("\nOnboarding Progress");
    println!("{}", "=".repeat(50));
    println!("   User: {}", record.user_id);
    if let Some(name) = display_name {
        println!("   Name: {name}");
    }
    println!(
        "   Status: {}",
        if record.is_complete {
            "Complete"
        } else {
            "In progress"
        }
    );
    println!("   Current step: {}", record.current_step);
    if let Some(pack) = &record.active_pack {
        println!("   Pack: {pack}");
    }
    if !record.selected_modules.is_empty() {
        println!("   Modules: {}", record.selected_modules.join(", "));
    }
    println!(
        "   Steps completed: {} (skipped {}, went back {} times)",
        record.progress.completed_steps.len(),
        record.progress.skips,
        record.progress.back_navigations
    );
    println!(
        "   Started: {}",
        record.progress.started_at.format("%Y-%m-%d %H:%M UTC")
    );
    if let Some(completed_at) = record.progress.completed_at {
        println!("   Completed: {}", completed_at.format("%Y-%m-%d %H:%M UTC"));
    } else {
        println!(
            "   Estimated time left: {} min",
            record.progress.estimated_minutes_left
        );
    }
    println!(
        "   Last saved: {}",
        record.updated_at.format("%Y-%m-%d %H:%M UTC")
    );

    println!("\n   Answers:");
    for (key, value) in record.answers.iter() {
        println!("     {key}: {value}");
    }
}

/// Print personalized goals
pub fn display_goals(goals: &PersonalizedGoals) {
    println!("\nYour Daily Goals");
    println!("{}", "=".repeat(50));
    println!("   Calories: {:.0} kcal", goals.daily_calories_kcal);
    println!(
        "   Basal metabolism: {:.0} kcal (total expenditure {:.0} kcal)",
        goals.bmr_kcal, goals.tdee_kcal
    );
    println!("   Water: {:.2} L", goals.hydration_liters());
    println!("   BMI: {:.1} ({:?})", goals.bmi, goals.bmi_category);
    if let Some(target) = goals.target_weight_kg {
        println!("   Target weight: {target:.1} kg");
    }
    println!(
        "   Based on: {:?}, {:?} objective, {:?} activity",
        goals.gender, goals.objective, goals.activity_level
    );
}
