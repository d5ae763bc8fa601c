// ABOUTME: Structural errors detected while validating an onboarding flow graph
// ABOUTME: Converted into AppError with the FLOW_INVALID code at API boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero

use thiserror::Error;

/// Problems found by the flow graph validator.
///
/// These are programming errors in a flow definition, caught before a
/// controller is ever handed the flow.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowDefinitionError {
    /// The declared entry step is not part of the graph
    #[error("initial step `{step_id}` is not defined")]
    UnknownInitialStep {
        /// Declared entry step id
        step_id: String,
    },

    /// A step was registered twice
    #[error("step `{step_id}` is defined more than once")]
    DuplicateStep {
        /// Offending step id
        step_id: String,
    },

    /// A `next_step` edge points at an id that does not exist
    #[error("step `{from}` can transition to unknown step `{to}`")]
    UnknownTarget {
        /// Source step id
        from: String,
        /// Missing target id
        to: String,
    },

    /// A pack lists a step that does not exist
    #[error("pack `{pack}` references unknown step `{step_id}`")]
    UnknownPackStep {
        /// Pack id
        pack: String,
        /// Missing step id
        step_id: String,
    },

    /// A pack lists the same step twice
    #[error("pack `{pack}` lists step `{step_id}` more than once")]
    DuplicatePackStep {
        /// Pack id
        pack: String,
        /// Repeated step id
        step_id: String,
    },

    /// A step can never be reached from the entry step or any pack
    #[error("step `{step_id}` is unreachable")]
    UnreachableStep {
        /// Unreachable step id
        step_id: String,
    },

    /// Following declared edges can loop forever
    #[error("flow contains a cycle: {}", path.join(" -> "))]
    Cycle {
        /// Step ids forming the cycle, first id repeated at the end
        path: Vec<String>,
    },
}
