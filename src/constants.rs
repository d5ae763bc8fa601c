// ABOUTME: Constant re-exports from the foundation crate
// ABOUTME: Onboarding sentinels, answer keys, environment variable names and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero

pub use myfithero_core::constants::*;
