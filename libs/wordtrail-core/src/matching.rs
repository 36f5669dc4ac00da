//! Matching game round engine.
//!
//! The full word list is partitioned into fixed-size rounds of six pairs
//! (twelve cards). Pair evaluation is two-phase: selecting the second card
//! judges the pair and locks input; `settle` applies the outcome after the
//! UI's display delay and unlocks input again.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Result, SessionError};
use crate::types::{CardSide, CardStatus, Vocabulary};

/// Pairs presented per round.
pub const PAIRS_PER_ROUND: usize = 6;

/// One face-down card on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeCard {
    pub id: String,
    pub content: String,
    pub side: CardSide,
    pub pair_id: i64,
    pub status: CardStatus,
}

/// Result of clicking a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Input locked, card already matched, or unknown id.
    Ignored,
    /// A selected card was clicked again and reverted to hidden.
    Deselected,
    /// First card of a pair selected.
    Selected,
    /// Second card selected; the pair has been judged and input is locked.
    Judged(PairJudgement),
}

/// Outcome of judging two selected cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairJudgement {
    Matched,
    Mismatch,
}

/// Result of advancing past a cleared round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStep {
    /// Next round built, 1-based round number.
    Round(usize),
    /// All rounds consumed; the game is over.
    Finished,
}

/// State for one matching game session over a day's word list.
#[derive(Debug, Clone)]
pub struct MatchingGame {
    words: Vec<Vocabulary>,
    round: usize,
    cards: Vec<PracticeCard>,
    selected: Vec<String>,
    pending: Option<PairJudgement>,
    wrong_moves: u32,
    finished: bool,
    celebrated: bool,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

impl MatchingGame {
    /// Build the first round from a non-empty word list.
    pub fn new<R: Rng + ?Sized>(words: Vec<Vocabulary>, rng: &mut R) -> Result<Self> {
        if words.is_empty() {
            return Err(SessionError::NoWords);
        }
        let mut game = Self {
            words,
            round: 1,
            cards: Vec::new(),
            selected: Vec::new(),
            pending: None,
            wrong_moves: 0,
            finished: false,
            celebrated: false,
            started_at: Utc::now(),
            finished_at: None,
        };
        game.build_round(rng);
        Ok(game)
    }

    pub fn cards(&self) -> &[PracticeCard] {
        &self.cards
    }

    pub fn words(&self) -> &[Vocabulary] {
        &self.words
    }

    pub fn current_round(&self) -> usize {
        self.round
    }

    pub fn total_rounds(&self) -> usize {
        self.words.len().div_ceil(PAIRS_PER_ROUND)
    }

    pub fn wrong_moves(&self) -> u32 {
        self.wrong_moves
    }

    /// Input is locked while a judged pair waits to be settled.
    pub fn is_processing(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Every card in the current round has been matched.
    pub fn round_cleared(&self) -> bool {
        self.cards.iter().all(|c| c.status == CardStatus::Matched)
    }

    /// Elapsed wall-clock time in whole seconds, frozen once finished.
    pub fn elapsed_secs(&self) -> i64 {
        let end = self.finished_at.unwrap_or_else(Utc::now);
        (end - self.started_at).num_seconds()
    }

    /// True exactly once, when the finished screen should fire its effect.
    pub fn take_celebration(&mut self) -> bool {
        if self.finished && !self.celebrated {
            self.celebrated = true;
            return true;
        }
        false
    }

    /// Handle a click on a card.
    pub fn select(&mut self, card_id: &str) -> Selection {
        if self.pending.is_some() || self.finished {
            return Selection::Ignored;
        }
        let Some(pos) = self.cards.iter().position(|c| c.id == card_id) else {
            return Selection::Ignored;
        };
        match self.cards[pos].status {
            CardStatus::Matched => Selection::Ignored,
            CardStatus::Selected => {
                // Deselect without counting as an attempt.
                self.cards[pos].status = CardStatus::Hidden;
                self.selected.retain(|id| id != card_id);
                Selection::Deselected
            }
            CardStatus::Hidden | CardStatus::Wrong => {
                self.cards[pos].status = CardStatus::Selected;
                self.selected.push(card_id.to_string());
                if self.selected.len() < 2 {
                    return Selection::Selected;
                }
                Selection::Judged(self.judge_pair())
            }
        }
    }

    /// Apply the judged outcome after the display delay; unlocks input.
    ///
    /// Returns what was settled, or `None` when nothing was pending. After a
    /// settled match the caller should check `round_cleared` and, after its
    /// pause, call `next_round`.
    pub fn settle(&mut self) -> Option<PairJudgement> {
        let judgement = self.pending.take()?;
        let target = match judgement {
            PairJudgement::Matched => CardStatus::Matched,
            PairJudgement::Mismatch => CardStatus::Hidden,
        };
        for card in &mut self.cards {
            if self.selected.contains(&card.id) {
                card.status = target;
            }
        }
        self.selected.clear();
        Some(judgement)
    }

    /// Build the next slice of pairs, or finish when none remain.
    pub fn next_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> RoundStep {
        if self.finished {
            return RoundStep::Finished;
        }
        self.round += 1;
        if self.build_round(rng) {
            RoundStep::Round(self.round)
        } else {
            self.finished = true;
            self.finished_at = Some(Utc::now());
            RoundStep::Finished
        }
    }

    fn judge_pair(&mut self) -> PairJudgement {
        let pair_ids: Vec<i64> = self
            .cards
            .iter()
            .filter(|c| self.selected.contains(&c.id))
            .map(|c| c.pair_id)
            .collect();
        let judgement = if pair_ids.len() == 2 && pair_ids[0] == pair_ids[1] {
            PairJudgement::Matched
        } else {
            // One wrong move per mismatched pair, not per card.
            self.wrong_moves += 1;
            for card in &mut self.cards {
                if self.selected.contains(&card.id) {
                    card.status = CardStatus::Wrong;
                }
            }
            PairJudgement::Mismatch
        };
        self.pending = Some(judgement);
        judgement
    }

    /// Returns false when the slice for the current round is empty.
    fn build_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let start = (self.round - 1) * PAIRS_PER_ROUND;
        let end = (start + PAIRS_PER_ROUND).min(self.words.len());
        if start >= self.words.len() {
            return false;
        }
        let mut cards = Vec::with_capacity((end - start) * 2);
        for w in &self.words[start..end] {
            cards.push(PracticeCard {
                id: format!("en-{}", w.id),
                content: w.word.clone(),
                side: CardSide::En,
                pair_id: w.id,
                status: CardStatus::Hidden,
            });
            cards.push(PracticeCard {
                id: format!("vn-{}", w.id),
                content: w.meaning.clone(),
                side: CardSide::Vn,
                pair_id: w.id,
                status: CardStatus::Hidden,
            });
        }
        cards.shuffle(rng);
        self.cards = cards;
        self.selected.clear();
        true
    }
}
