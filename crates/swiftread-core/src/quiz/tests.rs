use super::*;

fn question(text: &str, correct: usize) -> QuizQuestion {
    QuizQuestion {
        question: text.to_owned(),
        options: vec![
            "A".to_owned(),
            "B".to_owned(),
            "C".to_owned(),
            "D".to_owned(),
        ],
        correct_answer: correct,
    }
}

#[test]
fn empty_run_is_complete_and_scores_zero() {
    let run = QuizRun::new(Vec::new());
    assert!(run.is_complete());
    assert_eq!(run.score_percent(), 0);
    assert!(run.current_question().is_none());
}

#[test]
fn answers_are_scored_against_the_key() {
    let mut run = QuizRun::new(vec![question("q1", 0), question("q2", 2), question("q3", 3)]);
    assert_eq!(run.total(), 3);

    assert!(!run.answer(0));
    assert!(!run.answer(1));
    assert!(run.answer(3));

    assert_eq!(run.correct_count(), 2);
    assert_eq!(run.score_percent(), 67);
}

#[test]
fn current_question_tracks_progress() {
    let mut run = QuizRun::new(vec![question("q1", 0), question("q2", 1)]);
    assert_eq!(run.current_index(), 0);
    assert_eq!(run.current_question().unwrap().question, "q1");

    run.answer(0);
    assert_eq!(run.current_index(), 1);
    assert_eq!(run.current_question().unwrap().question, "q2");

    run.answer(1);
    assert!(run.current_question().is_none());
}

#[test]
fn answering_past_the_end_is_ignored() {
    let mut run = QuizRun::new(vec![question("q1", 1)]);
    run.answer(1);
    run.answer(3);
    assert_eq!(run.correct_count(), 1);
    assert_eq!(run.score_percent(), 100);
}

#[test]
fn question_wire_format_uses_camel_case_key() {
    let json = r#"{"question":"Why?","options":["a","b","c","d"],"correctAnswer":2}"#;
    let parsed: QuizQuestion = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.correct_answer, 2);
    assert_eq!(parsed.options.len(), 4);
}
