// ABOUTME: Integration tests for the default onboarding flow graph
// ABOUTME: Checks graph validity, branch resolution, module skipping and override safety
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use myfithero::constants::onboarding::COMPLETION_STEP;
use myfithero::errors::{AppError, ErrorCode, FlowDefinitionError};
use myfithero::models::{AnswerSet, AnswerValue};
use myfithero::onboarding::catalog::modules;
use myfithero::onboarding::{
    myfithero_flow, FlowDefinition, InputType, NextStep, Pack, Step, StepEffect,
};

fn answers_with_modules(selected: &[&str]) -> AnswerSet {
    [("modules", AnswerValue::list(selected.iter().copied()))]
        .into_iter()
        .collect()
}

#[test]
fn test_default_flow_report() {
    let flow = myfithero_flow().unwrap();
    let report = flow.validate().unwrap();

    assert_eq!(flow.initial_step(), "welcome");
    assert_eq!(report.step_count, 21);
    assert_eq!(report.pack_count, 4);
    // Weight loss objective with every module selected visits every step
    assert_eq!(report.longest_path, 21);
    assert_eq!(report.terminal_steps, ["terms_acceptance"]);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["step_count"], 21);
}

#[test]
fn test_default_flow_steps_are_well_formed() {
    let flow = myfithero_flow().unwrap();

    for step in flow.steps() {
        assert!(!step.prompt.trim().is_empty(), "step {}", step.id);
        assert!(step.estimated_seconds > 0, "step {}", step.id);
        match step.input {
            InputType::Info => assert!(step.data_key.is_none()),
            InputType::SingleChoice { .. } | InputType::MultiChoice { .. } => {
                assert!(!step.input.options().is_empty(), "step {}", step.id);
                assert!(step.data_key.is_some());
            }
            _ => assert!(step.data_key.is_some(), "step {}", step.id),
        }
        if step.default_value.is_some() {
            assert!(step.skippable, "step {} has a default but is required", step.id);
        }
    }

    let effects: Vec<_> = flow
        .steps()
        .filter(|step| step.effect != StepEffect::None)
        .map(|step| (step.id.as_str(), step.effect))
        .collect();
    assert_eq!(
        effects,
        [
            ("pack_selection", StepEffect::SelectPack),
            ("module_selection", StepEffect::SelectModules),
        ]
    );
}

#[test]
fn test_every_module_has_a_section() {
    let flow = myfithero_flow().unwrap();
    for module in modules::ALL {
        assert!(
            flow.steps()
                .any(|step| step.module.as_deref() == Some(module)),
            "module {module} has no steps"
        );
    }
}

#[test]
fn test_linear_packs_end_with_terms() {
    let flow = myfithero_flow().unwrap();
    for pack in flow.packs().filter(|pack| pack.is_linear()) {
        assert_eq!(
            pack.steps.last().map(String::as_str),
            Some("terms_acceptance"),
            "pack {}",
            pack.id
        );
        assert_eq!(
            flow.next_in_pack(pack, "terms_acceptance", &[]),
            COMPLETION_STEP
        );
    }
    assert!(!flow.pack("custom").unwrap().is_linear());
}

#[test]
fn test_override_skips_to_first_selected_section() {
    let flow = myfithero_flow().unwrap();
    let performance = AnswerValue::text("performance");

    let cases: [(&[&str], &str); 4] = [
        (&["sport"], "sport"),
        (&["nutrition"], "dietary_preference"),
        (&["hydration", "wellness"], "daily_water_intake"),
        (&["wellness"], "stress_level"),
    ];
    for (selected, expected) in cases {
        let answers = answers_with_modules(selected);
        assert_eq!(
            flow.resolve_next("main_objective", &performance, &answers),
            expected,
            "modules {selected:?}"
        );
    }

    // Sections end at the terms step whatever is left unselected
    let answers = answers_with_modules(&["sport"]);
    assert_eq!(
        flow.resolve_next("training_frequency", &AnswerValue::Number(3.0), &answers),
        "terms_acceptance"
    );
}

#[test]
fn test_resolution_is_deterministic() {
    let flow = myfithero_flow().unwrap();
    let answers = answers_with_modules(&["sleep"]);
    let answer = AnswerValue::text("weight_loss");

    let first = flow.resolve_next("main_objective", &answer, &answers);
    for _ in 0..10 {
        assert_eq!(flow.resolve_next("main_objective", &answer, &answers), first);
    }
    assert_eq!(first, "target_weight");
}

#[test]
fn test_unknown_step_resolves_to_completion() {
    let flow = myfithero_flow().unwrap();
    assert_eq!(
        flow.resolve_next("no_such_step", &AnswerValue::Null, &AnswerSet::new()),
        COMPLETION_STEP
    );
    assert!(flow.step("no_such_step").is_none());
}

fn ping_pong(_flow: &FlowDefinition, target: &str, _answers: &AnswerSet) -> Option<String> {
    Some(if target == "a" { "b" } else { "a" }.to_owned())
}

#[test]
fn test_unsettled_override_ends_the_flow() {
    let flow = FlowDefinition::builder("start")
        .step(Step::new("start", "Start?", InputType::Text).then_to("a"))
        .step(Step::new("a", "A?", InputType::Text))
        .step(Step::new("b", "B?", InputType::Text))
        .pack(Pack::new("b_only", "B", "", ["b"]))
        .conditional_override(ping_pong)
        .build()
        .unwrap();

    assert_eq!(
        flow.resolve_next("start", &AnswerValue::Null, &AnswerSet::new()),
        COMPLETION_STEP
    );
}

fn always_self(_answer: &AnswerValue, _answers: &AnswerSet) -> String {
    "loop".to_owned()
}

#[test]
fn test_computed_self_loop_is_a_cycle() {
    let flow = FlowDefinition::builder("loop")
        .step(
            Step::new("loop", "Again?", InputType::Boolean)
                .then(NextStep::computed(["loop", COMPLETION_STEP], always_self)),
        )
        .build()
        .unwrap();

    let error = flow.validate().unwrap_err();
    assert_eq!(
        error,
        FlowDefinitionError::Cycle {
            path: vec!["loop".to_owned(), "loop".to_owned()]
        }
    );

    let app_error = AppError::from(error);
    assert_eq!(app_error.code, ErrorCode::FlowInvalid);
    assert!(app_error.message.contains("loop -> loop"));
}

#[test]
fn test_missing_initial_step_is_reported() {
    let flow = FlowDefinition::builder("missing")
        .step(Step::new("present", "Here?", InputType::Text))
        .build()
        .unwrap();

    assert_eq!(
        flow.validate().unwrap_err(),
        FlowDefinitionError::UnknownInitialStep {
            step_id: "missing".to_owned()
        }
    );
}

fn back_to_start(_flow: &FlowDefinition, target: &str, _answers: &AnswerSet) -> Option<String> {
    (target == "end").then(|| "start".to_owned())
}

#[test]
fn test_override_redirects_are_outside_graph_validation() {
    let flow = FlowDefinition::builder("start")
        .step(Step::new("start", "Start?", InputType::Text).then_to("end"))
        .step(Step::new("end", "End?", InputType::Text))
        .conditional_override(back_to_start)
        .build()
        .unwrap();

    // Declared edges are acyclic, so the graph check passes
    assert!(flow.validate().is_ok());
    // while the override sends the user back to the start at runtime
    assert_eq!(
        flow.resolve_next("start", &AnswerValue::Null, &AnswerSet::new()),
        "start"
    );
}
