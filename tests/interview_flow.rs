//! End-to-end interview runs over the reference garden catalogs.

use std::sync::Arc;

use garden_sherpa::domain::catalogs::InterviewCatalogs;
use garden_sherpa::domain::foundation::{InterviewStatus, QuestionId};
use garden_sherpa::domain::garden;
use garden_sherpa::domain::interview::{
    AnswerMap, AnswerValue, FlowController, FlowStep, InputType, InterviewError,
    InterviewSession, QuestionDefinition, SubmitOutcome,
};
use garden_sherpa::domain::styling::{BlueprintAssembler, ScoringEngine};
use proptest::prelude::*;

fn catalogs() -> Arc<InterviewCatalogs> {
    Arc::new(garden::reference_catalogs())
}

fn ids(values: &[&str]) -> Vec<QuestionId> {
    values.iter().map(|v| QuestionId::from(*v)).collect()
}

/// Walks the flow, marking each presented question as asked without
/// answering it, and returns the presentation order.
fn walk(catalogs: &InterviewCatalogs, answers: &AnswerMap, mut asked: Vec<QuestionId>) -> Vec<QuestionId> {
    let flow = FlowController::new(&catalogs.questions);
    while let FlowStep::Ask(next) = flow.next(answers, &asked).unwrap() {
        asked.push(next);
    }
    asked
}

#[test]
fn unanswered_usage_hides_dependent_questions() {
    let catalogs = catalogs();
    let mut answers = AnswerMap::new();
    answers.insert("gardenFeel".into(), AnswerValue::single("serene"));

    let flow = FlowController::new(&catalogs.questions);
    let step = flow.next(&answers, &ids(&["gardenFeel"])).unwrap();
    assert_eq!(step, FlowStep::Ask("usage".into()));

    let path = walk(&catalogs, &answers, ids(&["gardenFeel"]));
    for hidden in ["wildlifeSupport", "edibleFocus", "kidSafety"] {
        assert!(!path.iter().any(|id| id == hidden), "{} should be skipped", hidden);
    }
}

#[test]
fn usage_selection_controls_reachability() {
    let catalogs = catalogs();
    let mut answers = AnswerMap::new();
    answers.insert("gardenFeel".into(), AnswerValue::single("wild"));

    answers.insert("usage".into(), AnswerValue::multi(["wildlife"]));
    let path = walk(&catalogs, &answers, ids(&["gardenFeel", "usage"]));
    assert!(path.iter().any(|id| id == "wildlifeSupport"));

    answers.insert("usage".into(), AnswerValue::multi(["creative"]));
    let path = walk(&catalogs, &answers, ids(&["gardenFeel", "usage"]));
    for hidden in ["wildlifeSupport", "edibleFocus", "kidSafety"] {
        assert!(!path.iter().any(|id| id == hidden), "{} should be skipped", hidden);
    }
}

#[test]
fn serene_architectural_neutrals_selects_modern_zen() {
    let catalogs = catalogs();
    let mut answers = AnswerMap::new();
    answers.insert("gardenFeel".into(), AnswerValue::single("serene"));
    answers.insert("stylePreference".into(), AnswerValue::multi(["architectural"]));
    answers.insert("colorPalette".into(), AnswerValue::multi(["soft-neutrals"]));

    let result = ScoringEngine::classify(&catalogs.styles, &answers).unwrap();
    assert_eq!(result.winner, "modern-zen");
    assert_eq!(result.score_of("modern-zen"), Some(7));
    assert!(result
        .tally
        .iter()
        .filter(|entry| entry.style != "modern-zen")
        .all(|entry| entry.score < 7));
}

#[test]
fn full_interview_produces_blueprint() {
    let mut session = InterviewSession::new(catalogs()).unwrap();
    let script = vec![
        AnswerValue::single("serene"),
        AnswerValue::multi(["quiet-retreat", "wildlife"]),
        AnswerValue::multi(["architectural"]),
        AnswerValue::single("full-sun"),
        AnswerValue::single("low"),
        AnswerValue::multi(["soft-neutrals"]),
        AnswerValue::multi(["water", "path"]),
        AnswerValue::multi(["birds"]),
        AnswerValue::scale(8),
        AnswerValue::single("balanced"),
        AnswerValue::multi(["seating"]),
        AnswerValue::text("Japanese maple"),
    ];
    for answer in script {
        let outcome = session.submit_answer(answer).unwrap();
        assert!(matches!(outcome, SubmitOutcome::NextQuestion(_)));
    }

    assert_eq!(session.current_question().unwrap().id, "notes");
    assert!(session.is_final_step().unwrap());
    let outcome = session.submit_answer(AnswerValue::text("   ")).unwrap();
    assert_eq!(outcome, SubmitOutcome::Completed("modern-zen".into()));

    assert_eq!(session.status(), InterviewStatus::Complete);
    assert!(session.current_question().is_none());
    assert_eq!(session.progress().percent_complete(), 100);
    assert_eq!(
        session.asked(),
        ids(&[
            "gardenFeel",
            "usage",
            "stylePreference",
            "sunExposure",
            "maintenance",
            "colorPalette",
            "featureFocus",
            "wildlifeSupport",
            "scentPriority",
            "waterTone",
            "comfortLevel",
            "favoritePlants",
            "notes",
        ])
        .as_slice()
    );

    let blueprint = session.blueprint().unwrap();
    assert_eq!(blueprint.headline.id, "modern-zen");
    assert_eq!(blueprint.plant_palette.len(), 8);
    assert!(blueprint
        .plant_palette
        .contains(&"Lavandula angustifolia".to_string()));
    assert_eq!(
        &blueprint.hero_features[3..],
        &[
            "Water element".to_string(),
            "Immersive pathways".to_string(),
            "Native meadow corridor".to_string(),
        ]
    );
    assert_eq!(blueprint.care_rhythm.len(), 3);
    assert_eq!(
        blueprint.vignettes,
        vec!["Low lounge bench tucked beside a water element for morning rituals.".to_string()]
    );

    let notes: Vec<&str> = session
        .advisory_notes()
        .iter()
        .map(|note| note.id.as_str())
        .collect();
    assert_eq!(notes, vec!["sunlight", "maintenance", "scent"]);

    let history = session.asked_history();
    let scent = history.iter().find(|h| h.question_id == "scentPriority").unwrap();
    assert_eq!(scent.display, "8 / 10");
    assert_eq!(history.last().unwrap().display, "Captured.");

    assert_eq!(
        session.submit_answer(AnswerValue::text("more")).unwrap_err(),
        InterviewError::AlreadyComplete
    );
}

#[test]
fn restart_resets_to_first_question() {
    let mut session = InterviewSession::new(catalogs()).unwrap();
    let first_id = *session.id();
    session.submit_answer(AnswerValue::single("productive")).unwrap();
    session.submit_answer(AnswerValue::multi(["grow-food"])).unwrap();
    assert!(!session.asked().is_empty());

    session.restart().unwrap();

    assert_ne!(*session.id(), first_id);
    assert!(session.asked().is_empty());
    assert!(session.answers().is_empty());
    assert!(session.blueprint().is_none());
    assert!(session.advisory_notes().is_empty());
    assert_eq!(session.status(), InterviewStatus::InProgress);
    assert_eq!(session.current_question().unwrap().id, "gardenFeel");
}

#[test]
fn restart_after_completion_reopens_the_interview() {
    let (mut session, _) = run(&[3; 15]);
    assert_eq!(session.status(), InterviewStatus::Complete);
    assert!(session.blueprint().is_some());
    assert!(session.classification().is_some());
    assert!(session.duration().is_some());

    session.restart().unwrap();

    assert_eq!(session.status(), InterviewStatus::InProgress);
    assert!(session.blueprint().is_none());
    assert!(session.classification().is_none());
    assert!(session.duration().is_none());
    assert!(session.asked().is_empty());
    assert!(session.advisory_notes().is_empty());
    assert_eq!(session.progress().percent_complete(), 0);
    assert_eq!(session.current_question().unwrap().id, "gardenFeel");

    let outcome = session.submit_answer(AnswerValue::single("wild")).unwrap();
    assert_eq!(outcome, SubmitOutcome::NextQuestion("usage".into()));
    assert_eq!(session.answers().choice("gardenFeel"), Some("wild"));
}

#[test]
fn empty_answers_tie_to_first_declared_style() {
    let catalogs = catalogs();
    let result = ScoringEngine::classify(&catalogs.styles, &AnswerMap::new()).unwrap();
    assert_eq!(result.winner, "modern-zen");
}

fn answer_for(question: &QuestionDefinition, seed: u16) -> AnswerValue {
    match question.input {
        InputType::Single => {
            let idx = seed as usize % question.options.len();
            AnswerValue::single(question.options[idx].value.clone())
        }
        InputType::Multi => AnswerValue::multi(
            question
                .options
                .iter()
                .enumerate()
                .filter(|(idx, _)| seed & (1 << idx) != 0)
                .map(|(_, option)| option.value.clone()),
        ),
        InputType::Scale => {
            let scale = question.scale.as_ref().unwrap();
            let steps = (scale.max - scale.min) / scale.step + 1;
            AnswerValue::scale(scale.min + (seed as i32 % steps) * scale.step)
        }
        InputType::FreeText => AnswerValue::text(format!("note {}", seed)),
    }
}

/// Runs a whole interview, answering each question from its seed.
fn run(seeds: &[u16]) -> (InterviewSession, Vec<u8>) {
    let mut session = InterviewSession::new(catalogs()).unwrap();
    let mut percents = vec![session.progress().percent_complete()];
    while let Some(question) = session.current_question() {
        let position = session
            .catalogs()
            .questions
            .position(question.id.as_str())
            .unwrap();
        let answer = answer_for(question, seeds[position]);
        session.submit_answer(answer).unwrap();
        percents.push(session.progress().percent_complete());
    }
    (session, percents)
}

proptest! {
    #[test]
    fn every_run_completes_with_a_consistent_path(seeds in prop::collection::vec(any::<u16>(), 15)) {
        let (session, percents) = run(&seeds);
        let questions = &session.catalogs().questions;

        prop_assert_eq!(session.status(), InterviewStatus::Complete);
        prop_assert!(session.blueprint().is_some());

        let positions: Vec<usize> = session
            .asked()
            .iter()
            .map(|id| questions.position(id.as_str()).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

        // Predicates only look back, so the final answers decide applicability.
        for id in questions.order() {
            let question = questions.get(id.as_str()).unwrap();
            let was_asked = session.asked().contains(id);
            prop_assert_eq!(was_asked, question.is_applicable(session.answers()));
        }

        prop_assert!(percents.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn same_answers_give_same_outcome(seeds in prop::collection::vec(any::<u16>(), 15)) {
        let (first, _) = run(&seeds);
        let (second, _) = run(&seeds);

        prop_assert_eq!(first.asked(), second.asked());
        prop_assert_eq!(first.classification(), second.classification());
        prop_assert_eq!(first.blueprint(), second.blueprint());
        prop_assert_eq!(first.advisory_notes(), second.advisory_notes());
    }

    #[test]
    fn assembly_is_idempotent(seeds in prop::collection::vec(any::<u16>(), 15)) {
        let (session, _) = run(&seeds);
        let catalogs = session.catalogs();
        let winner = catalogs
            .styles
            .get(session.classification().unwrap().winner.as_str())
            .unwrap();
        let assembler = BlueprintAssembler::new(&catalogs.assembly, &catalogs.questions);

        let once = assembler.assemble(winner, session.answers());
        let twice = assembler.assemble(winner, session.answers());
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(Some(&once), session.blueprint());
    }

    #[test]
    fn extra_selections_never_lower_a_score(
        seeds in prop::collection::vec(any::<u16>(), 15),
        pick in any::<u16>(),
    ) {
        let (session, _) = run(&seeds);
        let catalogs = session.catalogs();
        let multi: Vec<&QuestionDefinition> = catalogs
            .questions
            .iter()
            .filter(|q| q.input == InputType::Multi)
            .collect();
        let question = multi[pick as usize % multi.len()];
        let extra = &question.options[(pick as usize / multi.len()) % question.options.len()].value;

        let mut widened = session.answers().clone();
        let mut selected: Vec<String> = widened
            .selections(question.id.as_str())
            .map(|s| s.to_vec())
            .unwrap_or_default();
        selected.push(extra.clone());
        widened.insert(question.id.clone(), AnswerValue::multi(selected));

        for style in catalogs.styles.iter() {
            let before = ScoringEngine::score(style, session.answers()).score;
            let after = ScoringEngine::score(style, &widened).score;
            prop_assert!(after >= before, "{} dropped from {} to {}", style.id, before, after);
        }
    }
}
