// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero
// ABOUTME: Re-exports helper modules for myfithero-onboarding
// ABOUTME: Provides answer parsing, store opening and display formatting utilities

pub mod display;
pub mod input;
pub mod store;
