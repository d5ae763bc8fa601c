// ABOUTME: Flow graph validation command for myfithero-onboarding
// ABOUTME: Builds the default flow, checks every edge and pack, and prints the report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero

use anyhow::Result;
use myfithero::onboarding::myfithero_flow;
use tracing::info;

use crate::helpers::display::display_flow_report;

/// Validate the default flow and print a summary
pub fn validate(json: bool) -> Result<()> {
    let flow = myfithero_flow()?;
    let report = flow.validate()?;
    info!(
        steps = report.step_count,
        packs = report.pack_count,
        longest_path = report.longest_path,
        "Onboarding flow validated"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_flow_report(&flow, &report);
    }
    Ok(())
}
