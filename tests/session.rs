use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use vocabquiz::error::QuizError;
use vocabquiz::model::{Grade, Score, VocabularyEntry};
use vocabquiz::persist::QuizRecord;
use vocabquiz::quiz::generate_quiz;
use vocabquiz::session::QuizSession;

fn travel() -> Vec<VocabularyEntry> {
    vec![
        VocabularyEntry::new("Airport", "Sân bay", Some("We arrived at the airport early.")),
        VocabularyEntry::new("Baggage", "Hành lý", Some("Please check your baggage at the counter.")),
        VocabularyEntry::new("Destination", "Điểm đến", Some("Our final destination is Paris.")),
        VocabularyEntry::new("Hotel", "Khách sạn", Some("We booked a room at a five-star hotel.")),
        VocabularyEntry::new("Passport", "Hộ chiếu", Some("Don't forget to bring your passport.")),
    ]
}

fn full_session(seed: u64) -> QuizSession {
    let mut rng = StdRng::seed_from_u64(seed);
    QuizSession::new(generate_quiz(&travel(), 100, &mut rng).unwrap())
}

#[test]
fn test_new_session_score() {
    let mut rng = StdRng::seed_from_u64(1);
    let session = QuizSession::start(&travel(), 10, &mut rng).unwrap();
    assert_eq!(session.score(), Score { correct: 0, total: 10 });
    assert_eq!(session.current_index(), 0);
    assert!(session.answers().is_empty());
    assert!(!session.is_empty());
    assert_eq!(session.progress_percent(), 0);
}

#[test]
fn test_lookup_by_id() {
    let session = full_session(9);
    let question = session.question("fb-0").unwrap();
    assert_eq!(question.correct_answer, "Airport");
    assert!(session.question("fb-9").is_none());
    assert!(QuizSession::new(Vec::new()).is_empty());
}

#[test]
fn test_answer_is_case_insensitive_but_keeps_diacritics() {
    let mut session = full_session(1);
    let outcome = session.submit_answer("mc-0", "sân bay").unwrap();
    assert!(outcome.is_correct);
    assert_eq!(session.score().correct, 1);

    let mut session = full_session(1);
    let outcome = session.submit_answer("mc-0", "san bay").unwrap();
    assert!(!outcome.is_correct);
    assert_eq!(session.score().correct, 0);
}

#[test]
fn test_resubmission_does_not_double_count() {
    let mut session = full_session(2);
    assert!(session.submit_answer("lc-1", "Baggage").unwrap().is_correct);
    assert!(session.submit_answer("lc-1", "baggage").unwrap().is_correct);
    assert_eq!(session.score().correct, 1);

    let outcome = session.submit_answer("lc-1", "Hotel").unwrap();
    assert!(!outcome.is_correct);
    assert_eq!(session.answer_for("lc-1"), Some("Hotel"));
    assert_eq!(session.score().correct, 1);
}

#[test]
fn test_only_first_answer_scores() {
    let mut session = full_session(3);
    session.submit_answer("fb-2", "Paris").unwrap();
    session.submit_answer("fb-2", "Destination").unwrap();
    assert_eq!(session.score().correct, 0);
    assert_eq!(session.answer_for("fb-2"), Some("Destination"));
}

#[test]
fn test_unknown_question_is_rejected() {
    let mut session = full_session(4);
    let err = session.submit_answer("mc-42", "Sân bay").unwrap_err();
    assert_eq!(err, QuizError::InvalidQuestion("mc-42".to_string()));
    assert!(session.answers().is_empty());
    assert_eq!(session.score().correct, 0);
}

#[test]
fn test_is_last_only_for_final_question() {
    let mut session = full_session(5);
    let first = session.questions()[0].id.clone();
    let last = session.questions().last().unwrap().id.clone();

    assert!(!session.submit_answer(&first, "x").unwrap().is_last);
    assert!(session.submit_answer(&last, "x").unwrap().is_last);
}

#[test]
fn test_walk_through_quiz() {
    let mut session = full_session(6);
    loop {
        let question = session.current_question().unwrap().clone();
        let outcome = session
            .submit_answer(&question.id, &question.correct_answer.to_uppercase())
            .unwrap();
        assert!(outcome.is_correct);
        if outcome.is_last {
            break;
        }
        assert!(!session.is_complete());
        assert!(session.advance());
    }
    assert!(session.is_complete());
    assert!(!session.advance());
    assert_eq!(session.score(), Score { correct: 15, total: 15 });
    assert_eq!(session.score().grade(), Grade::Excellent);
}

#[test]
fn test_restart_resets_and_keeps_question_set() {
    let session = {
        let mut s = full_session(7);
        s.submit_answer("mc-0", "Sân bay").unwrap();
        s.advance();
        s
    };
    let mut rng = StdRng::seed_from_u64(8);
    let restarted = session.restart(&mut rng);

    assert_eq!(restarted.score(), Score { correct: 0, total: 15 });
    assert!(restarted.answers().is_empty());
    assert_eq!(restarted.current_index(), 0);

    let before: HashSet<&str> = session.questions().iter().map(|q| q.id.as_str()).collect();
    let after: HashSet<&str> = restarted.questions().iter().map(|q| q.id.as_str()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_restart_reorders_questions() {
    let session = full_session(1);
    let before: Vec<&str> = session.questions().iter().map(|q| q.id.as_str()).collect();

    let mut rng = StdRng::seed_from_u64(1);
    let restarted = session.restart(&mut rng);
    let after: Vec<&str> = restarted.questions().iter().map(|q| q.id.as_str()).collect();

    assert_eq!(before.len(), after.len());
    assert_ne!(before, after);
}

#[test]
fn test_first_answer_decides_recorded_correctness() {
    let mut session = full_session(10);
    session.submit_answer("mc-0", "Sân bay").unwrap();
    session.submit_answer("mc-0", "Hành lý").unwrap();
    session.submit_answer("lc-2", "Hotel").unwrap();
    session.submit_answer("lc-2", "Destination").unwrap();

    assert_eq!(session.scored_correct("mc-0"), Some(true));
    assert_eq!(session.scored_correct("lc-2"), Some(false));
    assert_eq!(session.scored_correct("fb-1"), None);

    let record = QuizRecord::from_session("travel", "sha256:00", &session);
    assert_eq!(record.correct, 1);
    let recorded = record
        .answers
        .iter()
        .filter(|a| a.correct)
        .count();
    assert_eq!(recorded, record.correct);

    let mc = record.answers.iter().find(|a| a.question_id == "mc-0").unwrap();
    assert!(mc.correct);
    assert_eq!(mc.answer.as_deref(), Some("Hành lý"));
    assert_eq!(mc.kind, "multiple_choice_translation");
}

#[test]
fn test_grades() {
    assert_eq!(Score { correct: 8, total: 10 }.grade(), Grade::Excellent);
    assert_eq!(Score { correct: 5, total: 10 }.grade(), Grade::Good);
    assert_eq!(Score { correct: 4, total: 10 }.grade(), Grade::NeedsWork);
    assert_eq!(Score { correct: 0, total: 0 }.grade(), Grade::NeedsWork);
}
