//! Garden Sherpa - line-based interview driver
//!
//! Prompts go to stderr; the finished report is printed to stdout as JSON.
//!
//! ## Usage
//!
//! ```bash
//! garden-sherpa                                    # built-in garden catalogs
//! GARDEN_SHERPA__CATALOG__PATH=garden.yaml garden-sherpa
//! ```

use std::io::{self, BufRead, Write};

use garden_sherpa::application::InterviewService;
use garden_sherpa::config::{init_tracing, AppConfig};
use garden_sherpa::domain::interview::{InputType, QuestionDefinition};
use tracing::{info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging);

    let service = InterviewService::load(config.catalog.source().as_ref())?;
    let mut session = service.start()?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut err = io::stderr().lock();

    while let Some(question) = session.current_question() {
        let progress = session.progress();
        writeln!(err, "\n[{}%] {}", progress.percent_complete(), question.title)?;
        write_prompt(&mut err, question)?;
        if session.is_final_step()? {
            writeln!(err, "(last question)")?;
        }
        write!(err, "> ")?;
        err.flush()?;

        let Some(line) = lines.next().transpose()? else {
            warn!(interview_id = %session.id(), "input ended before the interview finished");
            return Err("input ended before the interview finished".into());
        };

        if let Err(rejected) = service.answer_line(&mut session, &line) {
            writeln!(err, "  {}", rejected.message)?;
            continue;
        }
        for note in session.advisory_notes() {
            writeln!(err, "  * {}: {}", note.title, note.body)?;
        }
    }

    let report = service.report(&session)?;
    info!(interview_id = %report.interview_id, style = %report.style, "report written");
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn write_prompt(out: &mut impl Write, question: &QuestionDefinition) -> io::Result<()> {
    writeln!(out, "{}", question.prompt)?;
    if let Some(helper) = &question.helper {
        writeln!(out, "  {}", helper)?;
    }
    match question.input {
        InputType::Single | InputType::Multi => {
            for (idx, option) in question.options.iter().enumerate() {
                writeln!(out, "  {}. {} [{}]", idx + 1, option.label, option.value)?;
            }
            if question.input == InputType::Multi {
                writeln!(out, "  (comma-separated, blank for none)")?;
            }
        }
        InputType::Scale => {
            if let Some(scale) = &question.scale {
                writeln!(out, "  {} to {} in steps of {}", scale.min, scale.max, scale.step)?;
            }
        }
        InputType::FreeText => {
            if let Some(placeholder) = &question.placeholder {
                writeln!(out, "  e.g. {}", placeholder)?;
            }
        }
    }
    Ok(())
}
