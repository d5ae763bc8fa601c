// ABOUTME: Validation rule evaluator for onboarding answers
// ABOUTME: Evaluates every declared rule and collects all failure messages in declaration order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero

//! Validation rules attached to onboarding steps.
//!
//! Rules never short-circuit: a single answer can surface several messages
//! at once. Rules other than `Required` pass on blank answers, so optional
//! fields only need `Required` when they must be filled in.

use crate::models::{AnswerSet, AnswerValue};
use regex::Regex;
use std::sync::OnceLock;

/// Cross-field predicate: receives the candidate answer and every answer so far
pub type CustomPredicate = fn(&AnswerValue, &AnswerSet) -> bool;

/// A single validation rule with its failure message
#[derive(Debug, Clone)]
pub enum ValidationRule {
    /// Fails on null, empty list, or whitespace-only text
    Required {
        /// Failure message
        message: String,
    },
    /// Lower bound on text length, numeric value, or list length
    Min {
        /// Inclusive lower bound
        limit: f64,
        /// Failure message
        message: String,
    },
    /// Upper bound on text length, numeric value, or list length
    Max {
        /// Inclusive upper bound
        limit: f64,
        /// Failure message
        message: String,
    },
    /// Simple email pattern
    Email {
        /// Failure message
        message: String,
    },
    /// Inclusive numeric bounds
    Range {
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
        /// Failure message
        message: String,
    },
    /// Arbitrary predicate over the answer and the full answer set
    Custom {
        /// Returns `true` when the answer is acceptable
        predicate: CustomPredicate,
        /// Failure message
        message: String,
    },
}

impl ValidationRule {
    /// `required` rule
    pub fn required(message: impl Into<String>) -> Self {
        Self::Required {
            message: message.into(),
        }
    }

    /// `min` rule
    pub fn min(limit: f64, message: impl Into<String>) -> Self {
        Self::Min {
            limit,
            message: message.into(),
        }
    }

    /// `max` rule
    pub fn max(limit: f64, message: impl Into<String>) -> Self {
        Self::Max {
            limit,
            message: message.into(),
        }
    }

    /// `email` rule
    pub fn email(message: impl Into<String>) -> Self {
        Self::Email {
            message: message.into(),
        }
    }

    /// `range` rule
    pub fn range(min: f64, max: f64, message: impl Into<String>) -> Self {
        Self::Range {
            min,
            max,
            message: message.into(),
        }
    }

    /// `custom` rule
    pub fn custom(predicate: CustomPredicate, message: impl Into<String>) -> Self {
        Self::Custom {
            predicate,
            message: message.into(),
        }
    }

    /// Failure message of this rule
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Required { message }
            | Self::Min { message, .. }
            | Self::Max { message, .. }
            | Self::Email { message }
            | Self::Range { message, .. }
            | Self::Custom { message, .. } => message,
        }
    }

    /// Short rule name for logs
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Required { .. } => "required",
            Self::Min { .. } => "min",
            Self::Max { .. } => "max",
            Self::Email { .. } => "email",
            Self::Range { .. } => "range",
            Self::Custom { .. } => "custom",
        }
    }

    /// Whether `value` satisfies this rule
    #[must_use]
    pub fn is_satisfied_by(&self, value: &AnswerValue, answers: &AnswerSet) -> bool {
        match self {
            Self::Required { .. } => !value.is_blank(),
            Self::Min { limit, .. } => !matches!(measure(value), Some(size) if size < *limit),
            Self::Max { limit, .. } => !matches!(measure(value), Some(size) if size > *limit),
            Self::Email { .. } => match value {
                AnswerValue::Text(text) if !text.trim().is_empty() => is_email(text.trim()),
                _ => true,
            },
            Self::Range { min, max, .. } => {
                if value.is_blank() {
                    return true;
                }
                value
                    .as_number()
                    .is_some_and(|number| number >= *min && number <= *max)
            }
            Self::Custom { predicate, .. } => predicate(value, answers),
        }
    }
}

/// Evaluate every rule against `value` and return the failure messages.
///
/// The result is empty when the answer is valid. Evaluation is pure, so the
/// same inputs always yield the same list.
#[must_use]
pub fn evaluate(rules: &[ValidationRule], value: &AnswerValue, answers: &AnswerSet) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| !rule.is_satisfied_by(value, answers))
        .map(|rule| rule.message().to_owned())
        .collect()
}

/// Size used by `min`/`max`: char count, numeric value, or list length
fn measure(value: &AnswerValue) -> Option<f64> {
    match value {
        AnswerValue::Text(text) => Some(text.chars().count() as f64),
        AnswerValue::Number(number) => Some(*number),
        AnswerValue::List(items) => Some(items.len() as f64),
        AnswerValue::Null | AnswerValue::Bool(_) => None,
    }
}

/// Get compiled email regex (cached)
///
/// Returns None if regex compilation fails (should never happen with hardcoded pattern)
fn email_regex() -> Option<&'static Regex> {
    static EMAIL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL_REGEX
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
}

fn is_email(text: &str) -> bool {
    email_regex().map_or_else(
        || text.contains('@') && text.contains('.'),
        |re| re.is_match(text),
    )
}
