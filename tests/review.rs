use rand::rngs::StdRng;
use rand::SeedableRng;

use vocabquiz::review::{Flashcards, ReviewError, ReviewStep};

#[test]
fn test_navigation_wraps() {
    let mut cards = Flashcards::new(3);
    cards.previous();
    assert_eq!(cards.current(), 2);
    cards.next();
    assert_eq!(cards.current(), 0);
    cards.next();
    cards.next();
    assert_eq!(cards.position(), (3, 3));
}

#[test]
fn test_moving_hides_answer() {
    let mut cards = Flashcards::new(3);
    cards.reveal();
    assert!(cards.is_revealed());
    cards.next();
    assert!(!cards.is_revealed());
    cards.reveal();
    cards.reset();
    assert_eq!(cards.current(), 0);
    assert!(!cards.is_revealed());
}

#[test]
fn test_review_needs_unmastered_words() {
    let mut cards = Flashcards::new(3);
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(cards.start_review(vec![], &mut rng), Err(ReviewError::AllMastered));
    assert_eq!(cards.start_review(vec![7, 9], &mut rng), Err(ReviewError::AllMastered));
    assert!(!cards.in_review());
}

#[test]
fn test_review_visits_each_word_once() {
    let mut cards = Flashcards::new(5);
    let mut rng = StdRng::seed_from_u64(2);
    assert_eq!(cards.start_review(vec![1, 3, 4], &mut rng), Ok(3));
    assert!(cards.in_review());
    assert_eq!(cards.position(), (1, 3));

    let mut seen = vec![cards.current()];
    loop {
        match cards.review_next() {
            ReviewStep::Moved(i) => {
                assert_eq!(cards.current(), i);
                seen.push(i);
            }
            ReviewStep::Finished => break,
        }
    }
    seen.sort();
    assert_eq!(seen, vec![1, 3, 4]);
    assert!(!cards.in_review());
    assert_eq!(cards.current(), 0);
}

#[test]
fn test_end_review_early() {
    let mut cards = Flashcards::new(4);
    let mut rng = StdRng::seed_from_u64(3);
    cards.start_review(vec![0, 1, 2, 3], &mut rng).unwrap();
    cards.end_review();
    assert!(!cards.in_review());
    assert_eq!(cards.position(), (1, 4));
}
