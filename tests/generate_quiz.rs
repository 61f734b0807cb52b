use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use vocabquiz::error::QuizError;
use vocabquiz::model::{Question, QuestionKind, VocabularyEntry};
use vocabquiz::quiz::{generate_quiz, BLANK_MARKER, LISTEN_PROMPT};

fn travel() -> Vec<VocabularyEntry> {
    vec![
        VocabularyEntry::new("Airport", "Sân bay", Some("We arrived at the airport early.")),
        VocabularyEntry::new("Baggage", "Hành lý", Some("Please check your baggage at the counter.")),
        VocabularyEntry::new("Destination", "Điểm đến", Some("Our final destination is Paris.")),
        VocabularyEntry::new("Hotel", "Khách sạn", Some("We booked a room at a five-star hotel.")),
        VocabularyEntry::new("Passport", "Hộ chiếu", Some("Don't forget to bring your passport.")),
    ]
}

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn find<'a>(questions: &'a [Question], id: &str) -> &'a Question {
    questions
        .iter()
        .find(|q| q.id == id)
        .unwrap_or_else(|| panic!("missing question {}", id))
}

#[test]
fn test_truncates_to_max_questions() {
    let questions = generate_quiz(&travel(), 10, &mut rng(1)).unwrap();
    assert_eq!(questions.len(), 10);

    let ids: HashSet<&str> = questions.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids.len(), 10, "ids must be unique");
}

#[test]
fn test_all_candidates_when_limit_is_large() {
    let questions = generate_quiz(&travel(), 100, &mut rng(2)).unwrap();
    assert_eq!(questions.len(), 15);

    for tag in ["mc", "fb", "lc"] {
        let count = questions.iter().filter(|q| q.tag() == tag).count();
        assert_eq!(count, 5, "expected 5 {} questions", tag);
    }
}

#[test]
fn test_options_invariant() {
    for seed in 0..20 {
        let questions = generate_quiz(&travel(), 100, &mut rng(seed)).unwrap();
        for q in &questions {
            match &q.kind {
                QuestionKind::FillBlank => assert!(q.options().is_empty()),
                _ => {
                    let options = q.options();
                    assert_eq!(options.len(), 4, "{} has {:?}", q.id, options);
                    let correct = options.iter().filter(|o| **o == q.correct_answer).count();
                    assert_eq!(correct, 1);
                    let distinct: HashSet<&String> = options.iter().collect();
                    assert_eq!(distinct.len(), 4);
                }
            }
        }
    }
}

#[test]
fn test_same_seed_same_quiz() {
    let a = generate_quiz(&travel(), 10, &mut rng(7)).unwrap();
    let b = generate_quiz(&travel(), 10, &mut rng(7)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_content_stable_across_seeds() {
    let content = |seed: u64| {
        let mut pairs: Vec<(String, String, String)> = generate_quiz(&travel(), 100, &mut rng(seed))
            .unwrap()
            .into_iter()
            .map(|q| (q.id, q.prompt, q.correct_answer))
            .collect();
        pairs.sort();
        pairs
    };
    assert_eq!(content(1), content(99));
}

#[test]
fn test_question_templates() {
    let questions = generate_quiz(&travel(), 100, &mut rng(3)).unwrap();

    let mc = find(&questions, "mc-0");
    assert_eq!(mc.prompt, "\"Airport\" nghĩa là gì?");
    assert_eq!(mc.correct_answer, "Sân bay");
    assert!(matches!(mc.kind, QuestionKind::MultipleChoice(_)));

    let fb = find(&questions, "fb-3");
    assert_eq!(
        fb.prompt,
        format!(
            "Điền từ thích hợp vào chỗ trống: We booked a room at a five-star {}.",
            BLANK_MARKER
        )
    );
    assert_eq!(fb.correct_answer, "Hotel");

    let lc = find(&questions, "lc-4");
    assert_eq!(lc.prompt, LISTEN_PROMPT);
    assert_eq!(lc.correct_answer, "Passport");
    assert_eq!(lc.audio_text(), Some("Passport"));
}

#[test]
fn test_fill_blank_skip_rule() {
    let vocabulary = vec![
        VocabularyEntry::new("Ticket", "Vé", Some("I bought two tickets for the premiere.")),
        VocabularyEntry::new("Actor", "Diễn viên", Some("He is my favorite actor.")),
        VocabularyEntry::new("Dog", "Con chó", None),
        VocabularyEntry::new("Cinema", "Rạp chiếu phim", Some("")),
    ];
    let questions = generate_quiz(&vocabulary, 100, &mut rng(4)).unwrap();

    let blanks: Vec<&str> = questions
        .iter()
        .filter(|q| q.kind == QuestionKind::FillBlank)
        .map(|q| q.id.as_str())
        .collect();
    assert_eq!(blanks, vec!["fb-1"]);
    assert_eq!(questions.len(), 4 + 1 + 4);
}

#[test]
fn test_small_topic_has_fewer_options() {
    let vocabulary = travel()[..3].to_vec();
    let questions = generate_quiz(&vocabulary, 100, &mut rng(5)).unwrap();
    for q in questions.iter().filter(|q| q.kind != QuestionKind::FillBlank) {
        assert_eq!(q.options().len(), 3, "{}", q.id);
        assert!(q.options().contains(&q.correct_answer));
    }

    let single = travel()[..1].to_vec();
    let questions = generate_quiz(&single, 100, &mut rng(5)).unwrap();
    let mc = find(&questions, "mc-0");
    assert_eq!(mc.options(), &["Sân bay".to_string()]);
}

#[test]
fn test_duplicate_translations_are_not_repeated() {
    let vocabulary = vec![
        VocabularyEntry::new("Internet", "Internet", None),
        VocabularyEntry::new("Web", "Internet", None),
        VocabularyEntry::new("Computer", "Máy tính", None),
        VocabularyEntry::new("Software", "Phần mềm", None),
    ];
    let questions = generate_quiz(&vocabulary, 100, &mut rng(6)).unwrap();
    let mc = find(&questions, "mc-0");
    assert_eq!(mc.options().len(), 3);
    let distinct: HashSet<&String> = mc.options().iter().collect();
    assert_eq!(distinct.len(), 3);
}

#[test]
fn test_invalid_vocabulary() {
    let err = generate_quiz(&[], 10, &mut rng(0)).unwrap_err();
    assert!(matches!(err, QuizError::InvalidVocabulary(_)));

    let blank_word = vec![VocabularyEntry::new("  ", "Trống", None)];
    let err = generate_quiz(&blank_word, 10, &mut rng(0)).unwrap_err();
    assert!(matches!(err, QuizError::InvalidVocabulary(_)));

    let duplicated = vec![
        VocabularyEntry::new("Hotel", "Khách sạn", None),
        VocabularyEntry::new("hotel", "Khách sạn", None),
    ];
    let err = generate_quiz(&duplicated, 10, &mut rng(0)).unwrap_err();
    assert!(matches!(err, QuizError::InvalidVocabulary(_)));
}

#[test]
fn test_zero_limit_rejected() {
    let err = generate_quiz(&travel(), 0, &mut rng(0)).unwrap_err();
    assert_eq!(err, QuizError::InvalidQuestionLimit);
}
