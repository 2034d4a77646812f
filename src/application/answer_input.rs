//! Turns a line of typed input into an answer for the current question.

use crate::domain::foundation::ValidationError;
use crate::domain::interview::{AnswerValue, InputType, QuestionDefinition};

/// Parses `input` according to the question's input type.
///
/// Choice questions accept an option value or its 1-based position; multi
/// choice takes a comma-separated list. Whether the values are actually
/// admitted is left to the session.
pub fn parse_answer(question: &QuestionDefinition, input: &str) -> Result<AnswerValue, ValidationError> {
    let input = input.trim_end_matches(['\r', '\n']);
    match question.input {
        InputType::Single => Ok(AnswerValue::single(resolve_option(question, input.trim()))),
        InputType::Multi => Ok(AnswerValue::multi(
            input
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(|part| resolve_option(question, part)),
        )),
        InputType::FreeText => Ok(AnswerValue::text(input)),
        InputType::Scale => {
            let raw = input.trim();
            if raw.is_empty() {
                return Err(ValidationError::empty_field(question.id.as_str()));
            }
            raw.parse::<i32>().map(AnswerValue::scale).map_err(|_| {
                ValidationError::invalid_format(question.id.as_str(), format!("'{}' is not a whole number", raw))
            })
        }
    }
}

fn resolve_option(question: &QuestionDefinition, raw: &str) -> String {
    raw.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| question.options.get(idx))
        .map(|option| option.value.clone())
        .unwrap_or_else(|| raw.to_string())
}
