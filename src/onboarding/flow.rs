// ABOUTME: Static onboarding flow graph with fixed and computed transitions
// ABOUTME: Declares steps, packs and the conditional override, and validates graph structure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero

//! # Flow Definition
//!
//! A flow is pure data plus pure branching functions:
//!
//! - [`Step`] nodes keyed by id (O(1) lookup)
//! - [`NextStep`] edges, either a literal id or a pure resolver that
//!   declares every id it may return
//! - [`Pack`] linear step lists that replace graph navigation once selected
//! - an optional [`ConditionalOverride`] that redirects a resolved target
//!
//! Because computed edges declare their targets, [`FlowDefinition::validate`]
//! can check reachability and cycles without running any resolver.

use super::validation::ValidationRule;
use crate::constants::onboarding::{COMPLETION_STEP, MAX_OVERRIDE_HOPS};
use crate::errors::FlowDefinitionError;
use crate::models::{AnswerSet, AnswerValue};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Pure resolver for a computed transition
pub type StepResolver = fn(&AnswerValue, &AnswerSet) -> String;

/// Redirects a resolved target; `None` keeps it.
///
/// Redirects are runtime decisions over the answers, so
/// [`FlowDefinition::validate`] cannot see them. An override must only move
/// forward along declared edges of the target it receives; a redirect to an
/// earlier step makes a cycle the graph check never reports.
pub type ConditionalOverride = fn(&FlowDefinition, &str, &AnswerSet) -> Option<String>;

/// Outgoing edge of a step
#[derive(Debug, Clone)]
pub enum NextStep {
    /// Always go to this id
    Fixed(String),
    /// Decide from the answer; must return one of `targets`
    Computed {
        /// Every id `resolve` may return
        targets: Vec<String>,
        /// Pure branching function
        resolve: StepResolver,
    },
}

impl NextStep {
    /// Fixed edge
    pub fn fixed(target: impl Into<String>) -> Self {
        Self::Fixed(target.into())
    }

    /// Computed edge with its declared targets
    pub fn computed<I, S>(targets: I, resolve: StepResolver) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Computed {
            targets: targets.into_iter().map(Into::into).collect(),
            resolve,
        }
    }

    /// Terminal edge
    #[must_use]
    pub fn completion() -> Self {
        Self::Fixed(COMPLETION_STEP.to_owned())
    }

    /// Ids this edge can lead to
    #[must_use]
    pub fn targets(&self) -> Vec<&str> {
        match self {
            Self::Fixed(target) => vec![target.as_str()],
            Self::Computed { targets, .. } => targets.iter().map(String::as_str).collect(),
        }
    }
}

/// One selectable option of a choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    /// Stored value
    pub value: String,
    /// Display label
    pub label: String,
}

impl ChoiceOption {
    /// Create an option
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// How a step collects its answer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputType {
    /// Informational screen, stores nothing
    Info,
    /// Free text
    Text,
    /// Email address
    Email,
    /// Number with an optional unit label
    Number {
        /// Unit label (`kg`, `cm`, ...)
        unit: Option<String>,
    },
    /// Exactly one option
    SingleChoice {
        /// Available options
        options: Vec<ChoiceOption>,
    },
    /// Any number of options
    MultiChoice {
        /// Available options
        options: Vec<ChoiceOption>,
    },
    /// Yes / no
    Boolean,
}

impl InputType {
    /// Number input with a unit
    pub fn number(unit: impl Into<String>) -> Self {
        Self::Number {
            unit: Some(unit.into()),
        }
    }

    /// Options of a choice input
    #[must_use]
    pub fn options(&self) -> &[ChoiceOption] {
        match self {
            Self::SingleChoice { options } | Self::MultiChoice { options } => options,
            _ => &[],
        }
    }
}

/// Side effect applied by the controller after a step is answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepEffect {
    /// Nothing beyond storing the answer
    #[default]
    None,
    /// Answer names the pack that drives navigation from here on
    SelectPack,
    /// Answer lists the modules to include
    SelectModules,
}

/// A node of the flow graph
#[derive(Debug, Clone)]
pub struct Step {
    /// Unique id
    pub id: String,
    /// Question or message shown to the user
    pub prompt: String,
    /// Optional helper text
    pub description: Option<String>,
    /// Input descriptor
    pub input: InputType,
    /// Key the answer is stored under; `None` for info screens
    pub data_key: Option<String>,
    /// Rules applied in declaration order
    pub rules: Vec<ValidationRule>,
    /// Value used when the step is skipped
    pub default_value: Option<AnswerValue>,
    /// Whether the user may skip this step
    pub skippable: bool,
    /// Outgoing edge
    pub next: NextStep,
    /// Module this step belongs to, if any
    pub module: Option<String>,
    /// Controller side effect
    pub effect: StepEffect,
    /// Rough time to answer, used for estimates
    pub estimated_seconds: u32,
}

impl Step {
    /// Default time estimate for a single question
    pub const DEFAULT_ESTIMATED_SECONDS: u32 = 20;

    /// Create a step that stores its answer under its own id and ends the flow
    pub fn new(id: impl Into<String>, prompt: impl Into<String>, input: InputType) -> Self {
        let id = id.into();
        let data_key = (input != InputType::Info).then(|| id.clone());
        Self {
            id,
            prompt: prompt.into(),
            description: None,
            input,
            data_key,
            rules: Vec::new(),
            default_value: None,
            skippable: false,
            next: NextStep::completion(),
            module: None,
            effect: StepEffect::None,
            estimated_seconds: Self::DEFAULT_ESTIMATED_SECONDS,
        }
    }

    /// Set helper text
    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Store the answer under a different key
    #[must_use]
    pub fn data_key(mut self, key: impl Into<String>) -> Self {
        self.data_key = Some(key.into());
        self
    }

    /// Append a validation rule
    #[must_use]
    pub fn rule(mut self, rule: ValidationRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Allow skipping, seeding the answer with `default_value`
    #[must_use]
    pub fn skippable(mut self, default_value: Option<AnswerValue>) -> Self {
        self.skippable = true;
        self.default_value = default_value;
        self
    }

    /// Set the outgoing edge
    #[must_use]
    pub fn then(mut self, next: NextStep) -> Self {
        self.next = next;
        self
    }

    /// Shorthand for a fixed outgoing edge
    #[must_use]
    pub fn then_to(self, target: impl Into<String>) -> Self {
        self.then(NextStep::fixed(target))
    }

    /// Tag the step with a module
    #[must_use]
    pub fn in_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    /// Set the controller side effect
    #[must_use]
    pub fn effect(mut self, effect: StepEffect) -> Self {
        self.effect = effect;
        self
    }

    /// Override the time estimate
    #[must_use]
    pub fn estimated_seconds(mut self, seconds: u32) -> Self {
        self.estimated_seconds = seconds;
        self
    }

    /// Whether answering this step stores data
    #[must_use]
    pub fn stores_answer(&self) -> bool {
        self.data_key.is_some()
    }

    /// Resolve this step's own edge for an answer
    #[must_use]
    pub fn resolve_next(&self, answer: &AnswerValue, answers: &AnswerSet) -> String {
        match &self.next {
            NextStep::Fixed(target) => target.clone(),
            NextStep::Computed { resolve, .. } => resolve(answer, answers),
        }
    }
}

/// A precomputed linear path through the flow
#[derive(Debug, Clone, Serialize)]
pub struct Pack {
    /// Pack id (the answer value that selects it)
    pub id: String,
    /// Display name
    pub name: String,
    /// Short pitch
    pub description: String,
    /// Steps in order; empty means "follow the graph"
    pub steps: Vec<String>,
}

impl Pack {
    /// Create a pack
    pub fn new<I, S>(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        steps: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            steps: steps.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether this pack drives navigation with a fixed list
    #[must_use]
    pub fn is_linear(&self) -> bool {
        !self.steps.is_empty()
    }
}

/// Summary returned by a successful [`FlowDefinition::validate`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowReport {
    /// Number of steps
    pub step_count: usize,
    /// Number of packs
    pub pack_count: usize,
    /// Most forward steps any graph path needs to reach completion
    pub longest_path: usize,
    /// Steps with an edge into completion
    pub terminal_steps: Vec<String>,
}

/// Immutable onboarding flow
#[derive(Debug, Clone)]
pub struct FlowDefinition {
    initial_step: String,
    steps: HashMap<String, Step>,
    order: Vec<String>,
    packs: HashMap<String, Pack>,
    pack_order: Vec<String>,
    conditional_override: Option<ConditionalOverride>,
}

/// Builder for [`FlowDefinition`]
#[derive(Debug)]
pub struct FlowDefinitionBuilder {
    initial_step: String,
    steps: Vec<Step>,
    packs: Vec<Pack>,
    conditional_override: Option<ConditionalOverride>,
}

impl FlowDefinitionBuilder {
    /// Add a step
    #[must_use]
    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Add a pack
    #[must_use]
    pub fn pack(mut self, pack: Pack) -> Self {
        self.packs.push(pack);
        self
    }

    /// Install the conditional override
    #[must_use]
    pub fn conditional_override(mut self, redirect: ConditionalOverride) -> Self {
        self.conditional_override = Some(redirect);
        self
    }

    /// Assemble the flow
    ///
    /// # Errors
    ///
    /// Returns an error if a step id is registered twice. Full structural
    /// checks live in [`FlowDefinition::validate`].
    pub fn build(self) -> Result<FlowDefinition, FlowDefinitionError> {
        let mut steps = HashMap::with_capacity(self.steps.len());
        let mut order = Vec::with_capacity(self.steps.len());
        for step in self.steps {
            if steps.contains_key(&step.id) {
                return Err(FlowDefinitionError::DuplicateStep { step_id: step.id });
            }
            order.push(step.id.clone());
            steps.insert(step.id.clone(), step);
        }

        let pack_order = self.packs.iter().map(|pack| pack.id.clone()).collect();
        let packs = self
            .packs
            .into_iter()
            .map(|pack| (pack.id.clone(), pack))
            .collect();

        Ok(FlowDefinition {
            initial_step: self.initial_step,
            steps,
            order,
            packs,
            pack_order,
            conditional_override: self.conditional_override,
        })
    }
}

impl FlowDefinition {
    /// Start building a flow that enters at `initial_step`
    pub fn builder(initial_step: impl Into<String>) -> FlowDefinitionBuilder {
        FlowDefinitionBuilder {
            initial_step: initial_step.into(),
            steps: Vec::new(),
            packs: Vec::new(),
            conditional_override: None,
        }
    }

    /// Entry step id
    #[must_use]
    pub fn initial_step(&self) -> &str {
        &self.initial_step
    }

    /// Look up a step
    #[must_use]
    pub fn step(&self, step_id: &str) -> Option<&Step> {
        self.steps.get(step_id)
    }

    /// Steps in declaration order
    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.order.iter().filter_map(|id| self.steps.get(id))
    }

    /// Number of steps
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the flow has no steps
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Look up a pack
    #[must_use]
    pub fn pack(&self, pack_id: &str) -> Option<&Pack> {
        self.packs.get(pack_id)
    }

    /// Packs in declaration order
    pub fn packs(&self) -> impl Iterator<Item = &Pack> {
        self.pack_order.iter().filter_map(|id| self.packs.get(id))
    }

    /// Whether `step_id` is the terminal sentinel
    #[must_use]
    pub fn is_terminal(step_id: &str) -> bool {
        step_id == COMPLETION_STEP
    }

    /// Graph edge of `step_id` for `answer`, before any override.
    ///
    /// Unknown steps resolve to the completion sentinel.
    #[must_use]
    pub fn resolve_graph_next(
        &self,
        step_id: &str,
        answer: &AnswerValue,
        answers: &AnswerSet,
    ) -> String {
        self.step(step_id).map_or_else(
            || COMPLETION_STEP.to_owned(),
            |step| step.resolve_next(answer, answers),
        )
    }

    /// Apply the conditional override until it settles
    #[must_use]
    pub fn apply_override(&self, target: String, answers: &AnswerSet) -> String {
        let Some(redirect) = self.conditional_override else {
            return target;
        };

        let mut current = target;
        for _ in 0..MAX_OVERRIDE_HOPS {
            if Self::is_terminal(&current) {
                return current;
            }
            match redirect(self, &current, answers) {
                Some(next) if next != current => current = next,
                _ => return current,
            }
        }

        warn!(target_step = %current, "Conditional override did not settle, ending flow");
        COMPLETION_STEP.to_owned()
    }

    /// Next step id for the graph path: edge resolution then override.
    ///
    /// Unknown ids fall back to the completion sentinel.
    #[must_use]
    pub fn resolve_next(&self, step_id: &str, answer: &AnswerValue, answers: &AnswerSet) -> String {
        let resolved = self.resolve_graph_next(step_id, answer, answers);
        let target = self.apply_override(resolved, answers);
        if Self::is_terminal(&target) || self.steps.contains_key(&target) {
            target
        } else {
            warn!(from = %step_id, to = %target, "Resolved unknown step, ending flow");
            COMPLETION_STEP.to_owned()
        }
    }

    /// Next step id inside a linear pack.
    ///
    /// When `current` is part of the pack the following entry is returned;
    /// otherwise the first entry not yet completed. Exhausted packs end in
    /// the completion sentinel.
    #[must_use]
    pub fn next_in_pack(&self, pack: &Pack, current: &str, completed: &[String]) -> String {
        let next = match pack.steps.iter().position(|id| id == current) {
            Some(position) => pack.steps.get(position + 1),
            None => pack
                .steps
                .iter()
                .find(|id| !completed.iter().any(|done| done == *id)),
        };
        next.filter(|id| self.steps.contains_key(id.as_str()))
            .cloned()
            .unwrap_or_else(|| COMPLETION_STEP.to_owned())
    }

    /// Validate the graph structure.
    ///
    /// Checks the entry step, every declared edge target, pack contents,
    /// reachability of every step (from the entry step or any pack) and the
    /// absence of cycles among declared edges.
    /// Targets produced by the conditional override are not covered.
    ///
    /// # Errors
    ///
    /// Returns the first structural problem found.
    pub fn validate(&self) -> Result<FlowReport, FlowDefinitionError> {
        if !self.steps.contains_key(&self.initial_step) {
            return Err(FlowDefinitionError::UnknownInitialStep {
                step_id: self.initial_step.clone(),
            });
        }

        for step in self.steps() {
            for target in step.next.targets() {
                if !Self::is_terminal(target) && !self.steps.contains_key(target) {
                    return Err(FlowDefinitionError::UnknownTarget {
                        from: step.id.clone(),
                        to: target.to_owned(),
                    });
                }
            }
        }

        for pack in self.packs() {
            let mut seen = HashSet::new();
            for step_id in &pack.steps {
                if !self.steps.contains_key(step_id) {
                    return Err(FlowDefinitionError::UnknownPackStep {
                        pack: pack.id.clone(),
                        step_id: step_id.clone(),
                    });
                }
                if !seen.insert(step_id.as_str()) {
                    return Err(FlowDefinitionError::DuplicatePackStep {
                        pack: pack.id.clone(),
                        step_id: step_id.clone(),
                    });
                }
            }
        }

        self.check_reachability()?;
        let longest_path = self.check_acyclic()?;

        let terminal_steps = self
            .steps()
            .filter(|step| step.next.targets().iter().any(|t| Self::is_terminal(t)))
            .map(|step| step.id.clone())
            .collect();

        Ok(FlowReport {
            step_count: self.steps.len(),
            pack_count: self.packs.len(),
            longest_path,
            terminal_steps,
        })
    }

    fn check_reachability(&self) -> Result<(), FlowDefinitionError> {
        let mut reached: HashSet<&str> = HashSet::new();
        let mut stack: Vec<&str> = vec![self.initial_step.as_str()];
        stack.extend(
            self.packs
                .values()
                .flat_map(|pack| pack.steps.iter().map(String::as_str)),
        );

        while let Some(id) = stack.pop() {
            if Self::is_terminal(id) || !reached.insert(id) {
                continue;
            }
            if let Some(step) = self.steps.get(id) {
                stack.extend(step.next.targets());
            }
        }

        match self.steps().find(|step| !reached.contains(step.id.as_str())) {
            Some(step) => Err(FlowDefinitionError::UnreachableStep {
                step_id: step.id.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Depth-first cycle check; returns the longest edge count to completion
    fn check_acyclic(&self) -> Result<usize, FlowDefinitionError> {
        #[derive(Clone, Copy, PartialEq, Eq)]
        enum Mark {
            InProgress,
            Done(usize),
        }

        fn visit<'a>(
            flow: &'a FlowDefinition,
            id: &'a str,
            marks: &mut HashMap<&'a str, Mark>,
            path: &mut Vec<&'a str>,
        ) -> Result<usize, FlowDefinitionError> {
            if FlowDefinition::is_terminal(id) {
                return Ok(0);
            }
            match marks.get(id) {
                Some(Mark::Done(depth)) => return Ok(*depth),
                Some(Mark::InProgress) => {
                    let start = path.iter().position(|p| *p == id).unwrap_or(0);
                    let mut cycle: Vec<String> =
                        path[start..].iter().map(|p| (*p).to_owned()).collect();
                    cycle.push(id.to_owned());
                    return Err(FlowDefinitionError::Cycle { path: cycle });
                }
                None => {}
            }

            let Some(step) = flow.steps.get(id) else {
                return Ok(0);
            };
            marks.insert(id, Mark::InProgress);
            path.push(id);
            let mut deepest = 0;
            for target in step.next.targets() {
                deepest = deepest.max(visit(flow, target, marks, path)? + 1);
            }
            path.pop();
            marks.insert(id, Mark::Done(deepest));
            Ok(deepest)
        }

        let mut marks = HashMap::new();
        let mut path = Vec::new();
        let mut longest = 0;
        for id in &self.order {
            longest = longest.max(visit(self, id, &mut marks, &mut path)?);
        }
        Ok(longest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_flow() -> FlowDefinition {
        FlowDefinition::builder("a")
            .step(Step::new("a", "A?", InputType::Text).then_to("b"))
            .step(Step::new("b", "B?", InputType::Text).then_to("c"))
            .step(Step::new("c", "C?", InputType::Text))
            .build()
            .unwrap()
    }

    #[test]
    fn test_duplicate_step_rejected_at_build() {
        let result = FlowDefinition::builder("a")
            .step(Step::new("a", "A?", InputType::Text))
            .step(Step::new("a", "Again?", InputType::Text))
            .build();
        assert!(matches!(
            result,
            Err(FlowDefinitionError::DuplicateStep { step_id }) if step_id == "a"
        ));
    }

    #[test]
    fn test_info_steps_store_nothing() {
        let step = Step::new("welcome", "Hi", InputType::Info);
        assert!(!step.stores_answer());
        let step = Step::new("age", "Age?", InputType::number("years"));
        assert_eq!(step.data_key.as_deref(), Some("age"));
    }

    #[test]
    fn test_validate_reports_longest_path() {
        let report = linear_flow().validate().unwrap();
        assert_eq!(report.step_count, 3);
        assert_eq!(report.longest_path, 3);
        assert_eq!(report.terminal_steps, vec!["c"]);
    }

    #[test]
    fn test_validate_detects_unknown_target() {
        let flow = FlowDefinition::builder("a")
            .step(Step::new("a", "A?", InputType::Text).then_to("missing"))
            .build()
            .unwrap();
        assert!(matches!(
            flow.validate(),
            Err(FlowDefinitionError::UnknownTarget { to, .. }) if to == "missing"
        ));
    }

    #[test]
    fn test_validate_detects_cycle_without_running_resolvers() {
        fn never_called(_: &AnswerValue, _: &AnswerSet) -> String {
            unreachable!("validation must not execute resolvers")
        }
        let flow = FlowDefinition::builder("a")
            .step(Step::new("a", "A?", InputType::Text).then_to("b"))
            .step(Step::new("b", "B?", InputType::Text).then(NextStep::computed(
                ["a", COMPLETION_STEP],
                never_called,
            )))
            .build()
            .unwrap();

        match flow.validate() {
            Err(FlowDefinitionError::Cycle { path }) => {
                assert_eq!(path, vec!["a", "b", "a"]);
            }
            other => panic!("expected cycle, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_detects_unreachable_step() {
        let flow = FlowDefinition::builder("a")
            .step(Step::new("a", "A?", InputType::Text))
            .step(Step::new("orphan", "?", InputType::Text))
            .build()
            .unwrap();
        assert!(matches!(
            flow.validate(),
            Err(FlowDefinitionError::UnreachableStep { step_id }) if step_id == "orphan"
        ));
    }

    #[test]
    fn test_pack_steps_count_as_reachable_and_must_be_unique() {
        let flow = FlowDefinition::builder("a")
            .step(Step::new("a", "A?", InputType::Text))
            .step(Step::new("x", "X?", InputType::Text))
            .pack(Pack::new("p", "P", "", ["x"]))
            .build()
            .unwrap();
        assert!(flow.validate().is_ok());

        let flow = FlowDefinition::builder("a")
            .step(Step::new("a", "A?", InputType::Text))
            .pack(Pack::new("p", "P", "", ["a", "a"]))
            .build()
            .unwrap();
        assert!(matches!(
            flow.validate(),
            Err(FlowDefinitionError::DuplicatePackStep { .. })
        ));
    }

    #[test]
    fn test_unknown_ids_fall_back_to_completion() {
        let flow = linear_flow();
        let answers = AnswerSet::new();
        assert_eq!(
            flow.resolve_next("nope", &AnswerValue::Null, &answers),
            COMPLETION_STEP
        );
    }

    #[test]
    fn test_computed_edge_is_deterministic() {
        fn by_answer(answer: &AnswerValue, _: &AnswerSet) -> String {
            if answer.as_text() == Some("yes") {
                "b".into()
            } else {
                "c".into()
            }
        }
        let flow = FlowDefinition::builder("a")
            .step(Step::new("a", "A?", InputType::Text).then(NextStep::computed(["b", "c"], by_answer)))
            .step(Step::new("b", "B?", InputType::Text).then_to("c"))
            .step(Step::new("c", "C?", InputType::Text))
            .build()
            .unwrap();
        let answers = AnswerSet::new();
        let yes = AnswerValue::text("yes");
        assert_eq!(flow.resolve_next("a", &yes, &answers), "b");
        assert_eq!(flow.resolve_next("a", &yes, &answers), "b");
        assert_eq!(flow.resolve_next("a", &AnswerValue::text("no"), &answers), "c");
    }

    #[test]
    fn test_override_redirects_until_settled() {
        fn skip_b_and_c(_: &FlowDefinition, target: &str, _: &AnswerSet) -> Option<String> {
            match target {
                "b" => Some("c".into()),
                "c" => Some(COMPLETION_STEP.into()),
                _ => None,
            }
        }
        let flow = FlowDefinition::builder("a")
            .step(Step::new("a", "A?", InputType::Text).then_to("b"))
            .step(Step::new("b", "B?", InputType::Text).then_to("c"))
            .step(Step::new("c", "C?", InputType::Text))
            .conditional_override(skip_b_and_c)
            .build()
            .unwrap();
        assert_eq!(
            flow.resolve_next("a", &AnswerValue::Null, &AnswerSet::new()),
            COMPLETION_STEP
        );
    }

    #[test]
    fn test_next_in_pack() {
        let flow = FlowDefinition::builder("a")
            .step(Step::new("a", "A?", InputType::Text))
            .step(Step::new("x", "X?", InputType::Text))
            .step(Step::new("y", "Y?", InputType::Text))
            .pack(Pack::new("p", "P", "", ["x", "y"]))
            .build()
            .unwrap();
        let pack = flow.pack("p").unwrap();

        assert_eq!(flow.next_in_pack(pack, "a", &[]), "x");
        assert_eq!(flow.next_in_pack(pack, "x", &[]), "y");
        assert_eq!(flow.next_in_pack(pack, "y", &[]), COMPLETION_STEP);
        assert_eq!(flow.next_in_pack(pack, "a", &["x".into()]), "y");
    }
}
