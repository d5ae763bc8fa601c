// ABOUTME: Conversational onboarding engine: flow graph, validation, controller and persistence seams
// ABOUTME: Re-exports the types UI layers and stores need to drive a session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero

//! # Onboarding
//!
//! - [`flow`] - static step graph, packs and graph validation
//! - [`validation`] - rule evaluator
//! - [`controller`] - per-session state machine
//! - [`persistence`] - store, user and notifier traits
//! - [`catalog`] - the default MyFitHero flow

/// Default MyFitHero flow
pub mod catalog;
/// Per-session state machine
pub mod controller;
/// Static step graph
pub mod flow;
/// Persistence adapter traits
pub mod persistence;
/// Answer validation rules
pub mod validation;

pub use catalog::myfithero_flow;
pub use controller::{
    CompletionReport, IgnoredReason, NavigationOutcome, OnboardingController, SaveStatus,
};
pub use flow::{
    ChoiceOption, FlowDefinition, FlowReport, InputType, NextStep, Pack, Step, StepEffect,
};
pub use persistence::{
    CurrentUserProvider, FixedUser, OnboardingStore, ProgressNotifier, TracingNotifier,
};
pub use validation::{evaluate, ValidationRule};
