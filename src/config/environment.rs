// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads log level, database URL and onboarding behavior flags from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero

//! Environment-based configuration

use crate::constants::{defaults, env_config, onboarding};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational
    #[default]
    Info,
    /// Debugging
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a development environment
    #[must_use]
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DatabaseUrl {
    /// SQLite database file
    SQLite {
        /// Database file path
        path: PathBuf,
    },
    /// In-memory SQLite (tests, throwaway sessions)
    Memory,
}

impl DatabaseUrl {
    /// Parse a `sqlite:` URL; bare strings are treated as file paths
    #[must_use]
    pub fn parse_url(s: &str) -> Self {
        let path_str = s.strip_prefix("sqlite:").unwrap_or(s);
        if path_str == ":memory:" {
            Self::Memory
        } else {
            Self::SQLite {
                path: PathBuf::from(path_str),
            }
        }
    }

    /// Convert to an sqlx connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::parse_url(defaults::DATABASE_URL)
    }
}

impl std::fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Onboarding controller behavior
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OnboardingConfig {
    /// Surface persistence failures through the notifier
    pub debug_mode: bool,
    /// Save progress after important steps
    pub autosave: bool,
    /// Steps whose completion triggers an autosave
    pub important_steps: Vec<String>,
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            debug_mode: false,
            autosave: true,
            important_steps: onboarding::DEFAULT_IMPORTANT_STEPS
                .iter()
                .map(|step| (*step).to_owned())
                .collect(),
        }
    }
}

impl OnboardingConfig {
    /// Whether completing `step_id` should trigger an autosave
    #[must_use]
    pub fn should_autosave(&self, step_id: &str) -> bool {
        self.autosave && self.important_steps.iter().any(|step| step == step_id)
    }

    /// Load from environment variables, falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a boolean flag is not `true` or `false`
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let important_steps = env::var(env_config::IMPORTANT_STEPS)
            .ok()
            .map(|raw| parse_list(&raw))
            .filter(|steps| !steps.is_empty())
            .unwrap_or(defaults.important_steps);

        Ok(Self {
            debug_mode: env_var_or(env_config::ONBOARDING_DEBUG, "false")
                .parse()
                .context("Invalid MYFITHERO_ONBOARDING_DEBUG value")?,
            autosave: env_var_or(env_config::ONBOARDING_AUTOSAVE, "true")
                .parse()
                .context("Invalid MYFITHERO_ONBOARDING_AUTOSAVE value")?,
            important_steps,
        })
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Database location
    pub database_url: DatabaseUrl,
    /// Onboarding behavior
    pub onboarding: OnboardingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but malformed
    pub fn from_env() -> Result<Self> {
        let environment = Environment::from_str_or_default(&env_var_or(
            env_config::ENVIRONMENT,
            "development",
        ));
        let config = Self {
            environment,
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "info")),
            database_url: DatabaseUrl::parse_url(&env_var_or(
                env_config::DATABASE_URL,
                defaults::DATABASE_URL,
            )),
            onboarding: OnboardingConfig::from_env()?,
        };
        info!(
            environment = %config.environment,
            database = %config.database_url,
            autosave = config.onboarding.autosave,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// One-line summary for logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "environment={} log_level={} database={} autosave={} debug={} important_steps={}",
            self.environment,
            self.log_level,
            self.database_url,
            self.onboarding.autosave,
            self.onboarding.debug_mode,
            self.onboarding.important_steps.join(",")
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse a comma-separated list
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        assert_eq!(parse_list(" age, ,pack_selection "), vec!["age", "pack_selection"]);
        assert!(parse_list("").is_empty());
    }

    #[test]
    fn test_database_url_parsing() {
        assert!(DatabaseUrl::parse_url("sqlite::memory:").is_memory());
        assert_eq!(
            DatabaseUrl::parse_url("sqlite:./data/test.db").to_connection_string(),
            "sqlite:./data/test.db"
        );
        assert_eq!(
            DatabaseUrl::parse_url("plain.db"),
            DatabaseUrl::SQLite {
                path: PathBuf::from("plain.db")
            }
        );
    }

    #[test]
    fn test_autosave_allow_list() {
        let mut config = OnboardingConfig::default();
        assert!(config.should_autosave("age"));
        assert!(!config.should_autosave("gender"));
        config.autosave = false;
        assert!(!config.should_autosave("age"));
    }
}
