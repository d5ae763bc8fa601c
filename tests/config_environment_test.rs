// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates env-driven onboarding settings, database URLs and typed parsing fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use myfithero::config::environment::{
    AppConfig, DatabaseUrl, Environment, LogLevel, OnboardingConfig,
};
use myfithero::constants::env_config;
use serial_test::serial;
use std::env;

const ONBOARDING_VARS: [&str; 5] = [
    env_config::ENVIRONMENT,
    env_config::DATABASE_URL,
    env_config::ONBOARDING_DEBUG,
    env_config::ONBOARDING_AUTOSAVE,
    env_config::IMPORTANT_STEPS,
];

fn clear_onboarding_env() {
    for key in ONBOARDING_VARS {
        env::remove_var(key);
    }
}

// Tests for public configuration types

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Info); // Default fallback
    assert_eq!(LogLevel::Trace.to_tracing_level(), tracing::Level::TRACE);
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("staging"),
        Environment::Development
    ); // Default fallback
    assert!(Environment::Production.is_production());
}

#[test]
fn test_database_url_display_and_default() {
    assert_eq!(DatabaseUrl::Memory.to_string(), "sqlite::memory:");
    assert_eq!(
        DatabaseUrl::default().to_connection_string(),
        "sqlite:./data/myfithero.db"
    );
    assert!(!DatabaseUrl::default().is_memory());
}

#[test]
#[serial]
fn test_onboarding_config_defaults_without_env() {
    clear_onboarding_env();

    let config = OnboardingConfig::from_env().unwrap();
    assert_eq!(config, OnboardingConfig::default());
    assert!(config.autosave);
    assert!(!config.debug_mode);
    assert!(config.important_steps.iter().any(|step| step == "pack_selection"));
}

#[test]
#[serial]
fn test_onboarding_config_from_env() {
    clear_onboarding_env();
    env::set_var(env_config::ONBOARDING_DEBUG, "true");
    env::set_var(env_config::ONBOARDING_AUTOSAVE, "false");
    env::set_var(env_config::IMPORTANT_STEPS, " age, sleep_hours ,, ");

    let config = OnboardingConfig::from_env().unwrap();
    assert!(config.debug_mode);
    assert!(!config.autosave);
    assert_eq!(config.important_steps, ["age", "sleep_hours"]);

    // An empty list falls back to the defaults
    env::set_var(env_config::IMPORTANT_STEPS, " , ");
    let config = OnboardingConfig::from_env().unwrap();
    assert_eq!(
        config.important_steps,
        OnboardingConfig::default().important_steps
    );

    clear_onboarding_env();
}

#[test]
#[serial]
fn test_malformed_flag_is_an_error() {
    clear_onboarding_env();
    env::set_var(env_config::ONBOARDING_DEBUG, "sometimes");

    let error = OnboardingConfig::from_env().unwrap_err();
    assert!(error.to_string().contains("MYFITHERO_ONBOARDING_DEBUG"));

    clear_onboarding_env();
}

#[test]
#[serial]
fn test_app_config_from_env() {
    clear_onboarding_env();
    env::set_var(env_config::ENVIRONMENT, "production");
    env::set_var(env_config::DATABASE_URL, "sqlite::memory:");

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.database_url, DatabaseUrl::Memory);

    let summary = config.summary();
    assert!(summary.contains("environment=production"));
    assert!(summary.contains("database=sqlite::memory:"));
    assert!(summary.contains("autosave=true"));

    clear_onboarding_env();
}
