// ABOUTME: Store selection for myfithero-onboarding
// ABOUTME: Opens the SQLite database named by the configuration, creating its directory first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero

use anyhow::{Context, Result};
use myfithero::config::{AppConfig, DatabaseUrl};
use myfithero::database::Database;
use tracing::info;

/// Open (and migrate) the configured database
pub async fn open_database(config: &AppConfig) -> Result<Database> {
    if let DatabaseUrl::SQLite { path } = &config.database_url {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create database directory {}", parent.display())
            })?;
        }
    }

    let url = config.database_url.to_connection_string();
    info!("Connecting to database: {}", url);
    let database = Database::new(&url).await?;
    Ok(database)
}
