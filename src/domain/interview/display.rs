//! Display labels for answers in the progress history.

use super::{AnswerValue, QuestionDefinition};

/// Renders an answer the way the history panel shows it.
///
/// Option values are shown by their label when the question defines one.
pub fn display_label(question: &QuestionDefinition, answer: Option<&AnswerValue>) -> String {
    let Some(answer) = answer else {
        return "Awaiting input.".to_string();
    };

    match answer {
        AnswerValue::SingleChoice(value) => option_label(question, value),
        AnswerValue::MultiChoice(values) if values.is_empty() => "No selections.".to_string(),
        AnswerValue::MultiChoice(values) => values
            .iter()
            .map(|value| option_label(question, value))
            .collect::<Vec<_>>()
            .join(", "),
        AnswerValue::FreeText(text) if text.trim().is_empty() => "Captured.".to_string(),
        AnswerValue::FreeText(text) => text.clone(),
        AnswerValue::Scale(value) => match &question.scale {
            Some(scale) => format!("{} / {}", value, scale.max),
            None => value.to_string(),
        },
    }
}

fn option_label(question: &QuestionDefinition, value: &str) -> String {
    question
        .option_label(value)
        .unwrap_or(value)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::interview::{InputType, QuestionOption, ScaleConfig};

    fn usage() -> QuestionDefinition {
        QuestionDefinition::new("usage", "Lifestyle", "?", InputType::Multi).with_options(vec![
            QuestionOption::new("wildlife", "Thrive with wildlife", ""),
            QuestionOption::new("creative", "Creative studio energy", ""),
        ])
    }

    #[test]
    fn unanswered_awaits_input() {
        assert_eq!(display_label(&usage(), None), "Awaiting input.");
    }

    #[test]
    fn multi_choice_joins_labels_in_selection_order() {
        let answer = AnswerValue::multi(["creative", "wildlife"]);
        assert_eq!(
            display_label(&usage(), Some(&answer)),
            "Creative studio energy, Thrive with wildlife"
        );
    }

    #[test]
    fn empty_multi_choice_reads_no_selections() {
        let answer = AnswerValue::multi(Vec::<String>::new());
        assert_eq!(display_label(&usage(), Some(&answer)), "No selections.");
    }

    #[test]
    fn unknown_values_fall_back_to_raw_value() {
        let answer = AnswerValue::single("mystery");
        assert_eq!(display_label(&usage(), Some(&answer)), "mystery");
    }

    #[test]
    fn free_text_is_shown_verbatim_or_captured() {
        let notes = QuestionDefinition::new("notes", "Notes", "?", InputType::FreeText);
        assert_eq!(
            display_label(&notes, Some(&AnswerValue::text("  lilacs\n by the gate "))),
            "  lilacs\n by the gate "
        );
        assert_eq!(display_label(&notes, Some(&AnswerValue::text("   "))), "Captured.");
    }

    #[test]
    fn scale_shows_value_over_max() {
        let scent = QuestionDefinition::new("scent", "Scent", "?", InputType::Scale).with_scale(
            ScaleConfig {
                min: 0,
                max: 10,
                step: 1,
                labels: vec![],
            },
        );
        assert_eq!(display_label(&scent, Some(&AnswerValue::scale(7))), "7 / 10");
    }
}
