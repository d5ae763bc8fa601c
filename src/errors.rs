// ABOUTME: Error handling re-exports from the foundation crate
// ABOUTME: Keeps crate::errors paths stable for stores, controller and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero

//! # Unified Error Handling
//!
//! Error types live in `myfithero-core` so they can be shared by every
//! workspace crate. Validation failures are not errors: the controller
//! reports them as message lists.

pub use myfithero_core::errors::*;
