use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReviewError {
    #[error("every word in this topic is already mastered")]
    AllMastered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStep {
    Moved(usize),
    Finished,
}

/// Cursor over the words of a topic, with an optional review order.
#[derive(Debug, Clone, Default)]
pub struct Flashcards {
    len: usize,
    current: usize,
    revealed: bool,
    review: Option<Vec<usize>>,
}

impl Flashcards {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            ..Self::default()
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    pub fn in_review(&self) -> bool {
        self.review.is_some()
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.current = (self.current + 1) % self.len;
        self.revealed = false;
    }

    pub fn previous(&mut self) {
        if self.len == 0 {
            return;
        }
        self.current = if self.current == 0 {
            self.len - 1
        } else {
            self.current - 1
        };
        self.revealed = false;
    }

    pub fn reset(&mut self) {
        self.current = 0;
        self.revealed = false;
    }

    /// Enters review mode over `unmastered` in random order and returns how
    /// many words are queued.
    pub fn start_review<R: Rng + ?Sized>(
        &mut self,
        unmastered: Vec<usize>,
        rng: &mut R,
    ) -> Result<usize, ReviewError> {
        let mut order: Vec<usize> = unmastered.into_iter().filter(|&i| i < self.len).collect();
        if order.is_empty() {
            return Err(ReviewError::AllMastered);
        }
        order.shuffle(rng);
        self.current = order[0];
        self.revealed = false;
        let queued = order.len();
        self.review = Some(order);
        Ok(queued)
    }

    pub fn review_next(&mut self) -> ReviewStep {
        let Some(order) = &self.review else {
            return ReviewStep::Finished;
        };
        let pos = order.iter().position(|&i| i == self.current).unwrap_or(0);
        match order.get(pos + 1).copied() {
            Some(next) => {
                self.current = next;
                self.revealed = false;
                ReviewStep::Moved(next)
            }
            None => {
                self.end_review();
                ReviewStep::Finished
            }
        }
    }

    pub fn end_review(&mut self) {
        self.review = None;
        self.reset();
    }

    /// 1-based position and length, counted within the review order when reviewing.
    pub fn position(&self) -> (usize, usize) {
        match &self.review {
            Some(order) => {
                let pos = order.iter().position(|&i| i == self.current).unwrap_or(0);
                (pos + 1, order.len())
            }
            None => (self.current + 1, self.len),
        }
    }
}
