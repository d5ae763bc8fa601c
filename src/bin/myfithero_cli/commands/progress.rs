// ABOUTME: Saved progress commands for myfithero-onboarding
// ABOUTME: Prints a user's stored onboarding snapshot and the goals derived from it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero

use anyhow::{bail, Result};
use myfithero::config::{AppConfig, GoalsConfig};
use myfithero::database::Database;
use myfithero::intelligence::PersonalizedGoals;
use myfithero::models::OnboardingRecord;
use tracing::info;
use uuid::Uuid;

use crate::helpers::display::{display_goals, display_record};
use crate::helpers::store::open_database;

/// Print a user's saved onboarding progress
pub async fn show(config: &AppConfig, user_id: Uuid) -> Result<()> {
    let database = open_database(config).await?;
    let record = load_record(&database, user_id).await?;
    let display_name = database.get_display_name(user_id).await?;
    display_record(&record, display_name.as_deref());
    Ok(())
}

/// Compute and print goals from a user's saved answers
pub async fn goals(config: &AppConfig, user_id: Uuid, json: bool) -> Result<()> {
    let database = open_database(config).await?;
    let record = load_record(&database, user_id).await?;
    if !record.is_complete {
        println!("Note: onboarding is not finished yet, goals use the answers given so far.");
    }

    let goals = PersonalizedGoals::from_answers(&record.answers, GoalsConfig::global())?;
    info!(user_id = %user_id, calories = goals.daily_calories_kcal, "Goals computed");
    if json {
        println!("{}", serde_json::to_string_pretty(&goals)?);
    } else {
        display_goals(&goals);
    }
    Ok(())
}

async fn load_record(database: &Database, user_id: Uuid) -> Result<OnboardingRecord> {
    match database.get_onboarding_progress(user_id).await? {
        Some(record) => Ok(record),
        None => bail!("No saved onboarding for user {user_id}"),
    }
}
