use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use regex::RegexBuilder;

use crate::error::QuizError;
use crate::model::{Question, QuestionKind, VocabularyEntry};

pub const DEFAULT_MAX_QUESTIONS: usize = 10;
pub const BLANK_MARKER: &str = "________";
pub const LISTEN_PROMPT: &str = "Nghe và chọn từ đúng:";
const MAX_DISTRACTORS: usize = 3;

/// Builds multiple-choice, fill-blank and listen-choose questions for every
/// entry, shuffles them together and keeps the first `max_questions`.
pub fn generate_quiz<R: Rng + ?Sized>(
    vocabulary: &[VocabularyEntry],
    max_questions: usize,
    rng: &mut R,
) -> Result<Vec<Question>, QuizError> {
    validate_vocabulary(vocabulary)?;
    if max_questions == 0 {
        return Err(QuizError::InvalidQuestionLimit);
    }

    let mut questions: Vec<Question> = Vec::with_capacity(vocabulary.len() * 3);

    for (idx, entry) in vocabulary.iter().enumerate() {
        let options = choice_options(vocabulary, idx, &entry.translation, |e| &e.translation, rng);
        questions.push(Question {
            id: format!("mc-{}", idx),
            prompt: format!("\"{}\" nghĩa là gì?", entry.word),
            correct_answer: entry.translation.clone(),
            kind: QuestionKind::MultipleChoice(options),
        });
    }

    for (idx, entry) in vocabulary.iter().enumerate() {
        let Some(example) = entry.example.as_deref().filter(|e| !e.trim().is_empty()) else {
            continue;
        };
        match blank_out(example, &entry.word) {
            Some(cloze) => questions.push(Question {
                id: format!("fb-{}", idx),
                prompt: format!("Điền từ thích hợp vào chỗ trống: {}", cloze),
                correct_answer: entry.word.clone(),
                kind: QuestionKind::FillBlank,
            }),
            None => log::debug!("no whole-word match for '{}' in its example", entry.word),
        }
    }

    for (idx, entry) in vocabulary.iter().enumerate() {
        let options = choice_options(vocabulary, idx, &entry.word, |e| &e.word, rng);
        questions.push(Question {
            id: format!("lc-{}", idx),
            prompt: LISTEN_PROMPT.to_string(),
            correct_answer: entry.word.clone(),
            kind: QuestionKind::ListenChoose {
                options,
                audio_text: entry.word.clone(),
            },
        });
    }

    let candidates = questions.len();
    questions.shuffle(rng);
    questions.truncate(max_questions);
    log::debug!(
        "generated {} of {} candidate questions",
        questions.len(),
        candidates
    );

    Ok(questions)
}

/// A usable vocabulary is non-empty, with non-blank words that are unique
/// ignoring case.
pub fn validate_vocabulary(vocabulary: &[VocabularyEntry]) -> Result<(), QuizError> {
    if vocabulary.is_empty() {
        return Err(QuizError::InvalidVocabulary(
            "vocabulary list is empty".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for (idx, entry) in vocabulary.iter().enumerate() {
        if entry.word.trim().is_empty() {
            return Err(QuizError::InvalidVocabulary(format!(
                "entry {} has an empty word",
                idx
            )));
        }
        if !seen.insert(entry.word.to_lowercase()) {
            return Err(QuizError::InvalidVocabulary(format!(
                "word '{}' appears more than once",
                entry.word
            )));
        }
    }
    Ok(())
}

/// The correct value plus up to three distinct distractors drawn from the
/// other entries, in random order.
fn choice_options<R, F>(
    vocabulary: &[VocabularyEntry],
    idx: usize,
    correct: &str,
    field: F,
    rng: &mut R,
) -> Vec<String>
where
    R: Rng + ?Sized,
    F: Fn(&VocabularyEntry) -> &String,
{
    let mut seen: HashSet<String> = HashSet::new();
    seen.insert(correct.to_lowercase());

    let mut pool: Vec<String> = vocabulary
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != idx)
        .map(|(_, e)| field(e).clone())
        .filter(|value| seen.insert(value.to_lowercase()))
        .collect();
    pool.shuffle(rng);
    pool.truncate(MAX_DISTRACTORS);

    pool.push(correct.to_string());
    pool.shuffle(rng);
    pool
}

/// Replaces the first whole-word, case-insensitive occurrence of `word` in
/// `sentence` with the blank marker. `None` when the word does not occur.
pub fn blank_out(sentence: &str, word: &str) -> Option<String> {
    let pattern = format!(r"\b{}\b", regex::escape(word));
    let re = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .ok()?;
    if !re.is_match(sentence) {
        return None;
    }
    Some(re.replace(sentence, BLANK_MARKER).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blanks_first_occurrence_only() {
        let cloze = blank_out("Hotel after hotel after HOTEL.", "hotel").unwrap();
        assert_eq!(cloze, "________ after hotel after HOTEL.");
    }

    #[test]
    fn partial_words_do_not_match() {
        assert_eq!(blank_out("I bought two tickets.", "Ticket"), None);
        assert_eq!(blank_out("Airports are busy.", "Airport"), None);
    }

    #[test]
    fn metacharacters_are_literal() {
        assert_eq!(blank_out("see e.g here", "e.g").unwrap(), "see ________ here");
        assert_eq!(blank_out("see eXg here", "e.g"), None);
    }
}
