// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Onboarding sentinels, step identifiers, module names, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Onboarding flow sentinels and step identifiers
pub mod onboarding {
    /// Terminal pseudo-step reached when the flow is exhausted
    pub const COMPLETION_STEP: &str = "completion";

    /// Pack selection step id
    pub const PACK_SELECTION: &str = "pack_selection";

    /// Module selection step id
    pub const MODULE_SELECTION: &str = "module_selection";

    /// Pack id that follows the branching graph instead of a fixed list
    pub const CUSTOM_PACK: &str = "custom";

    /// Steps whose completion triggers an autosave by default
    pub const DEFAULT_IMPORTANT_STEPS: &[&str] = &[
        "first_name",
        "age",
        "weight_kg",
        "pack_selection",
        "module_selection",
        "main_objective",
        "terms_acceptance",
    ];

    /// Upper bound on conditional-override redirects for a single transition
    pub const MAX_OVERRIDE_HOPS: usize = 64;
}

/// Answer keys read by the goal calculator
pub mod answer_keys {
    /// Display name
    pub const FIRST_NAME: &str = "first_name";
    /// Age in years
    pub const AGE: &str = "age";
    /// `male` / `female` / `other`
    pub const GENDER: &str = "gender";
    /// Height in centimeters
    pub const HEIGHT_CM: &str = "height_cm";
    /// Body weight in kilograms
    pub const WEIGHT_KG: &str = "weight_kg";
    /// Main objective
    pub const MAIN_OBJECTIVE: &str = "main_objective";
    /// Target weight for weight-loss objective
    pub const TARGET_WEIGHT_KG: &str = "target_weight_kg";
    /// Selected sport
    pub const SPORT: &str = "sport";
    /// Training sessions per week
    pub const TRAINING_FREQUENCY: &str = "training_frequency";
    /// Daily activity level
    pub const ACTIVITY_LEVEL: &str = "activity_level";
    /// Selected pack
    pub const PACK: &str = "pack";
    /// Selected modules
    pub const MODULES: &str = "modules";
}

/// Environment variable names
pub mod env_config {
    /// Deployment environment (`development`, `production`, `testing`)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Database connection string
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Enables debug notifications for persistence failures
    pub const ONBOARDING_DEBUG: &str = "MYFITHERO_ONBOARDING_DEBUG";
    /// Enables autosave after important steps
    pub const ONBOARDING_AUTOSAVE: &str = "MYFITHERO_ONBOARDING_AUTOSAVE";
    /// Comma-separated override of the important-steps allow-list
    pub const IMPORTANT_STEPS: &str = "MYFITHERO_IMPORTANT_STEPS";
}

/// Default values
pub mod defaults {
    /// Default `SQLite` database location
    pub const DATABASE_URL: &str = "sqlite:./data/myfithero.db";
}

/// Service identification for structured logging
pub mod service_names {
    /// Onboarding engine service name
    pub const MYFITHERO_ONBOARDING: &str = "myfithero-onboarding";
}
