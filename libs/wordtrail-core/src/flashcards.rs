//! Flashcard session driver.
//!
//! Review order is deliberately randomized: `advance` draws a uniform random
//! index different from the current one instead of walking sequentially.

use rand::Rng;

use crate::types::Vocabulary;

/// Which side of the card shows first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Word first, meaning on flip.
    #[default]
    Forward,
    /// Meaning first, word on flip.
    Reverse,
}

/// In-memory state for one flashcard review session.
#[derive(Debug, Clone)]
pub struct FlashcardSession {
    words: Vec<Vocabulary>,
    index: usize,
    revealed: bool,
    direction: Direction,
}

impl FlashcardSession {
    /// Start a session at index 0, front side up, forward direction.
    pub fn new(words: Vec<Vocabulary>) -> Self {
        Self {
            words,
            index: 0,
            revealed: false,
            direction: Direction::Forward,
        }
    }

    pub fn current(&self) -> Option<&Vocabulary> {
        self.words.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn remaining(&self) -> usize {
        self.words.len()
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// All words are mastered; the session offers quiz/game/review/menu next.
    pub fn is_complete(&self) -> bool {
        self.words.is_empty()
    }

    pub fn flip(&mut self) {
        self.revealed = !self.revealed;
    }

    /// Flip front/back ordering and turn the card face down.
    pub fn toggle_direction(&mut self) {
        self.direction = match self.direction {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        };
        self.revealed = false;
    }

    /// Jump to a uniformly random card other than the current one.
    ///
    /// Rejection sampling: redraw until the index differs. No-op with fewer
    /// than two cards.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.words.len() <= 1 {
            return;
        }
        let mut next = self.index;
        while next == self.index {
            next = rng.random_range(0..self.words.len());
        }
        self.index = next;
        self.revealed = false;
    }

    /// Step back deterministically, wrapping at the front.
    pub fn retreat(&mut self) {
        if self.words.is_empty() {
            return;
        }
        self.index = if self.index == 0 {
            self.words.len() - 1
        } else {
            self.index - 1
        };
        self.revealed = false;
    }

    /// Remove the current word from rotation and redraw a random index.
    ///
    /// Returns the removed word so the caller can notify the server. Local
    /// removal is intentionally independent of server confirmation.
    pub fn mark_mastered<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Vocabulary> {
        if self.words.is_empty() {
            return None;
        }
        let removed = self.words.remove(self.index);
        self.revealed = false;
        if !self.words.is_empty() {
            self.index = rng.random_range(0..self.words.len());
        } else {
            self.index = 0;
        }
        Some(removed)
    }
}
