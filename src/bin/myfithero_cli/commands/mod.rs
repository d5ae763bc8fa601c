// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero
// ABOUTME: Re-exports command modules for myfithero-onboarding
// ABOUTME: Provides access to the wizard, flow validation and saved progress commands

pub mod flow;
pub mod progress;
pub mod wizard;
