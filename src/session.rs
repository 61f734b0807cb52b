use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::QuizError;
use crate::model::{Question, Score, VocabularyEntry};
use crate::quiz::generate_quiz;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub is_correct: bool,
    pub is_last: bool,
}

/// One attempt at a quiz. Owned by whoever drives the questions.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    answers: HashMap<String, String>,
    /// Correctness of the first answer per question, which is what scores.
    first_correct: HashMap<String, bool>,
    current_index: usize,
    score: Score,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        let score = Score::new(questions.len());
        Self {
            questions,
            answers: HashMap::new(),
            first_correct: HashMap::new(),
            current_index: 0,
            score,
        }
    }

    pub fn start<R: Rng + ?Sized>(
        vocabulary: &[VocabularyEntry],
        max_questions: usize,
        rng: &mut R,
    ) -> Result<Self, QuizError> {
        let questions = generate_quiz(vocabulary, max_questions, rng)?;
        Ok(Self::new(questions))
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &HashMap<String, String> {
        &self.answers
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    pub fn answer_for(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(|a| a.as_str())
    }

    /// Whether the first answer given to `question_id` was correct.
    pub fn scored_correct(&self, question_id: &str) -> Option<bool> {
        self.first_correct.get(question_id).copied()
    }

    /// Records `answer` for `question_id`. Only the first answer to a
    /// question can change the score; later ones just replace the stored text.
    pub fn submit_answer(
        &mut self,
        question_id: &str,
        answer: &str,
    ) -> Result<AnswerOutcome, QuizError> {
        let position = self
            .questions
            .iter()
            .position(|q| q.id == question_id)
            .ok_or_else(|| QuizError::InvalidQuestion(question_id.to_string()))?;

        let question = &self.questions[position];
        let is_correct = question.is_correct(answer);
        let is_last = position + 1 == self.questions.len();

        let first = self
            .answers
            .insert(question_id.to_string(), answer.to_string())
            .is_none();
        if first {
            self.first_correct.insert(question_id.to_string(), is_correct);
            if is_correct {
                self.score.correct += 1;
            }
        }

        log::debug!(
            "answer for {}: correct={} first={} score={}/{}",
            question_id,
            is_correct,
            first,
            self.score.correct,
            self.score.total
        );

        Ok(AnswerOutcome { is_correct, is_last })
    }

    /// Moves the cursor forward. Returns false when already on the last question.
    pub fn advance(&mut self) -> bool {
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            true
        } else {
            false
        }
    }

    /// True once the last question has an answer.
    pub fn is_complete(&self) -> bool {
        match self.questions.last() {
            Some(last) => {
                self.current_index + 1 == self.questions.len()
                    && self.answers.contains_key(&last.id)
            }
            None => false,
        }
    }

    pub fn progress_percent(&self) -> u16 {
        if self.questions.is_empty() {
            return 0;
        }
        ((self.current_index * 100) / self.questions.len()) as u16
    }

    /// Same questions in a new order, with answers and score cleared.
    pub fn restart<R: Rng + ?Sized>(&self, rng: &mut R) -> QuizSession {
        let mut questions = self.questions.clone();
        questions.shuffle(rng);
        QuizSession::new(questions)
    }
}
