//! InterviewCatalogs - the configuration tables an interview runs on.
//!
//! Catalogs are built once at startup (from the built-in garden tables or a
//! YAML file) and injected into each session. Nothing here is global.

use serde::{Deserialize, Serialize};

use super::foundation::{DomainError, ErrorCode, QuestionId};
use super::interview::{InputType, QuestionCatalog};
use super::styling::{AssemblyRules, CategoryCatalog, InsightGenerator};

/// Every table an interview session needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewCatalogs {
    pub questions: QuestionCatalog,
    pub styles: CategoryCatalog,
    #[serde(default)]
    pub assembly: AssemblyRules,
    #[serde(default)]
    pub insights: InsightGenerator,
}

impl InterviewCatalogs {
    /// Cross-table problems, empty when the catalogs are usable together.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = self.questions.problems();
        problems.extend(self.styles.problems());

        for style in self.styles.iter() {
            for trigger in &style.triggers {
                self.check_key(&mut problems, &trigger.answer_key, &format!("style '{}'", style.id));
            }
        }

        for key in self.assembly.referenced_keys() {
            self.check_key(&mut problems, key, "assembly rules");
        }

        if let Some(source) = &self.assembly.feature_label_source {
            if let Some(question) = self.questions.get(source.as_str()) {
                if question.input != InputType::Multi {
                    problems.push(format!(
                        "feature label source '{}' is a {} question, expected multi",
                        source, question.input
                    ));
                }
            }
        }

        for rule in self.insights.rules() {
            for key in rule.generator.referenced_keys() {
                self.check_key(&mut problems, key, &format!("note '{}'", rule.id));
            }
        }

        problems
    }

    /// Validates the catalogs, reporting every problem at once.
    pub fn validate(&self) -> Result<(), DomainError> {
        let problems = self.problems();
        if problems.is_empty() {
            return Ok(());
        }
        Err(DomainError::new(
            ErrorCode::CatalogInvalid,
            format!("catalog has {} problem(s)", problems.len()),
        )
        .with_detail("problems", problems.join("; ")))
    }

    fn check_key(&self, problems: &mut Vec<String>, key: &QuestionId, owner: &str) {
        if !self.questions.contains(key.as_str()) {
            problems.push(format!("{} refers to unknown question '{}'", owner, key));
        }
    }
}
