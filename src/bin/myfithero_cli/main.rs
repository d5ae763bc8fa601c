// ABOUTME: MyFitHero onboarding CLI - terminal front end for the onboarding engine
// ABOUTME: Runs the conversational wizard, checks the flow graph and inspects saved sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero
//!
//! Usage:
//! ```bash
//! # Start (or resume) an onboarding session backed by SQLite
//! myfithero-onboarding run --user 6f1c9a52-3f0e-4c55-9d5e-0c1b7e1f3a11
//!
//! # Throwaway session kept in memory
//! myfithero-onboarding run --memory
//!
//! # Check the flow graph and print a summary
//! myfithero-onboarding validate-flow
//!
//! # Print a user's saved progress
//! myfithero-onboarding show --user 6f1c9a52-3f0e-4c55-9d5e-0c1b7e1f3a11
//!
//! # Compute daily goals from a user's saved answers
//! myfithero-onboarding goals --user 6f1c9a52-3f0e-4c55-9d5e-0c1b7e1f3a11
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use myfithero::config::{AppConfig, DatabaseUrl};
use myfithero::logging::LoggingConfig;
use tracing::info;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "myfithero-onboarding",
    about = "MyFitHero conversational onboarding",
    long_about = "Terminal front end for the MyFitHero onboarding flow: run the wizard, validate the flow graph and inspect saved progress."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Run the interactive onboarding wizard
    Run {
        /// User id to resume or create (a new id is generated if omitted)
        #[arg(long)]
        user: Option<Uuid>,

        /// Keep the session in memory instead of the database
        #[arg(long)]
        memory: bool,

        /// Surface autosave failures on screen
        #[arg(long)]
        debug: bool,
    },

    /// Validate the onboarding flow graph
    ValidateFlow {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a user's saved onboarding progress
    Show {
        /// User id
        #[arg(long)]
        user: Uuid,
    },

    /// Compute daily goals from a user's saved answers
    Goals {
        /// User id
        #[arg(long)]
        user: Uuid,

        /// Print the goals as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    let mut config = AppConfig::from_env()?;
    if let Some(url) = cli.database_url {
        config.database_url = DatabaseUrl::parse_url(&url);
    }
    info!("{}", config.summary());

    match cli.command {
        Command::Run {
            user,
            memory,
            debug,
        } => {
            if debug {
                config.onboarding.debug_mode = true;
            }
            commands::wizard::run(&config, user, memory).await?;
        }
        Command::ValidateFlow { json } => commands::flow::validate(json)?,
        Command::Show { user } => commands::progress::show(&config, user).await?,
        Command::Goals { user, json } => commands::progress::goals(&config, user, json).await?,
    }

    Ok(())
}
