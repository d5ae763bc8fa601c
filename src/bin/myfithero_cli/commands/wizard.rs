// ABOUTME: Interactive onboarding wizard for myfithero-onboarding
// ABOUTME: Reads answers from stdin, drives the controller and prints goals once onboarding completes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero

use anyhow::Result;
use myfithero::config::{AppConfig, GoalsConfig};
use myfithero::database::InMemoryOnboardingStore;
use myfithero::intelligence::PersonalizedGoals;
use myfithero::models::AnswerSet;
use myfithero::onboarding::{myfithero_flow, FixedUser, OnboardingController, OnboardingStore};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use uuid::Uuid;

use crate::helpers::display::{display_goals, display_outcome, display_save_status, display_step};
use crate::helpers::input::{parse_line, WizardInput};
use crate::helpers::store::open_database;

/// Run the wizard until the user completes onboarding, quits or closes stdin
pub async fn run(config: &AppConfig, user: Option<Uuid>, memory: bool) -> Result<()> {
    let flow = Arc::new(myfithero_flow()?);
    let store: Arc<dyn OnboardingStore> = if memory {
        Arc::new(InMemoryOnboardingStore::new())
    } else {
        Arc::new(open_database(config).await?)
    };
    let user_id = user.unwrap_or_else(Uuid::new_v4);
    info!(user_id = %user_id, memory, "Starting onboarding wizard");

    let mut controller = OnboardingController::new(
        flow,
        store,
        Arc::new(FixedUser::new(user_id)),
        config.onboarding.clone(),
    );

    println!("Welcome to MyFitHero!");
    println!("Session: {user_id}");
    match controller.load_saved_progress().await {
        Ok(true) => println!("Resuming where you left off."),
        Ok(false) => {}
        Err(e) => {
            warn!(user_id = %user_id, error = %e, "Saved onboarding could not be restored");
            println!("Your saved progress could not be loaded, starting over.");
        }
    }

    if controller.is_complete() {
        println!("Onboarding is already complete.");
        print_goals(controller.answers());
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while !controller.is_at_completion() {
        let Some(step) = controller.current_step().cloned() else {
            break;
        };
        display_step(&controller, &step);
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            print_resume_hint(user_id, memory);
            return Ok(());
        };

        match parse_line(&step.input, &line) {
            Err(message) => println!("  ! {message}"),
            Ok(WizardInput::Quit) => {
                print_resume_hint(user_id, memory);
                return Ok(());
            }
            Ok(WizardInput::Back) => display_outcome(&controller.go_to_previous_step()),
            Ok(WizardInput::Skip) => display_outcome(&controller.skip_current_step().await),
            Ok(WizardInput::Answer(value)) => {
                // A blank line keeps the pending answer or confirms the stored one
                if !value.is_null() {
                    controller.set_current_response(value);
                } else if controller.pending_response().is_none() {
                    if let Some(stored) = step
                        .data_key
                        .as_deref()
                        .and_then(|key| controller.answers().get(key))
                        .cloned()
                    {
                        controller.set_current_response(stored);
                    }
                }
                display_outcome(&controller.go_to_next_step().await);
            }
        }
    }

    let report = controller.complete_onboarding().await;
    display_save_status(&report.saved);
    println!(
        "\nAll done! Onboarding finished in {} min.",
        report.progress.elapsed().num_minutes()
    );
    print_goals(&report.answers);
    Ok(())
}

fn print_goals(answers: &AnswerSet) {
    match PersonalizedGoals::from_answers(answers, GoalsConfig::global()) {
        Ok(goals) => display_goals(&goals),
        Err(e) => println!("Goals are not available yet: {}", e.message),
    }
}

fn print_resume_hint(user_id: Uuid, memory: bool) {
    if memory {
        println!("Session ended. In-memory progress is discarded.");
    } else {
        println!("Session paused. Resume with: myfithero-onboarding run --user {user_id}");
    }
}
