// ABOUTME: Terminal input parsing for myfithero-onboarding
// ABOUTME: Turns a typed line into a navigation command or an answer value for the current step
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFitHero

use myfithero::models::AnswerValue;
use myfithero::onboarding::{ChoiceOption, InputType};

/// What the user asked for on one line
#[derive(Debug, Clone, PartialEq)]
pub enum WizardInput {
    /// Submit this answer and move forward
    Answer(AnswerValue),
    /// Go back one step
    Back,
    /// Skip the current step
    Skip,
    /// Leave the wizard
    Quit,
}

/// Parse a line typed at the prompt for a step with the given input type
///
/// # Errors
///
/// Returns a message to show the user when the line cannot be understood
pub fn parse_line(input: &InputType, line: &str) -> Result<WizardInput, String> {
    let trimmed = line.trim();
    match trimmed {
        ":back" | ":b" => return Ok(WizardInput::Back),
        ":skip" | ":s" => return Ok(WizardInput::Skip),
        ":quit" | ":q" => return Ok(WizardInput::Quit),
        _ => {}
    }

    if trimmed.is_empty() {
        return Ok(WizardInput::Answer(AnswerValue::Null));
    }

    let value = match input {
        InputType::Info => AnswerValue::Null,
        InputType::Text | InputType::Email => AnswerValue::text(trimmed),
        InputType::Number { .. } => trimmed
            .replace(',', ".")
            .parse::<f64>()
            .map(AnswerValue::Number)
            .map_err(|_| format!("'{trimmed}' is not a number"))?,
        InputType::SingleChoice { options } => {
            AnswerValue::text(pick_option(options, trimmed)?)
        }
        InputType::MultiChoice { options } => {
            let picked = trimmed
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(|part| pick_option(options, part))
                .collect::<Result<Vec<_>, _>>()?;
            AnswerValue::list(picked)
        }
        InputType::Boolean => match trimmed.to_lowercase().as_str() {
            "y" | "yes" | "true" | "1" => AnswerValue::Bool(true),
            "n" | "no" | "false" | "0" => AnswerValue::Bool(false),
            _ => return Err("Please answer yes or no".to_owned()),
        },
    };
    Ok(WizardInput::Answer(value))
}

/// Match an option by its 1-based position, value or label
fn pick_option(options: &[ChoiceOption], raw: &str) -> Result<String, String> {
    if let Ok(index) = raw.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|i| options.get(i))
            .map(|option| option.value.clone())
            .ok_or_else(|| format!("Choose a number between 1 and {}", options.len()));
    }
    options
        .iter()
        .find(|option| {
            option.value.eq_ignore_ascii_case(raw) || option.label.eq_ignore_ascii_case(raw)
        })
        .map(|option| option.value.clone())
        .ok_or_else(|| format!("'{raw}' is not one of the options"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices() -> InputType {
        InputType::SingleChoice {
            options: vec![
                ChoiceOption::new("male", "Male"),
                ChoiceOption::new("female", "Female"),
            ],
        }
    }

    #[test]
    fn test_navigation_commands() {
        assert_eq!(parse_line(&InputType::Text, ":back"), Ok(WizardInput::Back));
        assert_eq!(parse_line(&InputType::Text, " :skip "), Ok(WizardInput::Skip));
        assert_eq!(parse_line(&InputType::Text, ":q"), Ok(WizardInput::Quit));
    }

    #[test]
    fn test_choice_by_index_or_label() {
        assert_eq!(
            parse_line(&choices(), "2"),
            Ok(WizardInput::Answer(AnswerValue::text("female")))
        );
        assert_eq!(
            parse_line(&choices(), "Male"),
            Ok(WizardInput::Answer(AnswerValue::text("male")))
        );
        assert!(parse_line(&choices(), "3").is_err());
    }

    #[test]
    fn test_numbers_accept_decimal_comma() {
        assert_eq!(
            parse_line(&InputType::number("kg"), "72,5"),
            Ok(WizardInput::Answer(AnswerValue::Number(72.5)))
        );
        assert!(parse_line(&InputType::number("kg"), "heavy").is_err());
    }

    #[test]
    fn test_blank_line_is_null() {
        assert_eq!(
            parse_line(&InputType::Boolean, "   "),
            Ok(WizardInput::Answer(AnswerValue::Null))
        );
    }
}
