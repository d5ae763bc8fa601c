// ABOUTME: Core types and constants for the MyFitHero onboarding engine
// ABOUTME: Foundation crate with error handling, onboarding constants, and answer/progress models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero

#![deny(unsafe_code)]

//! # `MyFitHero` Core
//!
//! Foundation crate providing shared types and constants for the `MyFitHero`
//! onboarding engine. This crate is designed to change infrequently, so the
//! flow controller, stores and binaries can all depend on it without pulling
//! in the database or runtime stack.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and flow definition errors
//! - **constants**: Onboarding sentinels, step identifiers, and environment variable names
//! - **models**: Answer values, answer sets, progress bookkeeping and persisted records

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Onboarding data models (answers, progress, persisted records)
pub mod models;
