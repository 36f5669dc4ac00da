//! Multiple-choice quiz scorer.
//!
//! Each question walks `Selecting -> Confirming -> Revealed`; the two fixed
//! UI delays gate the transitions and input is rejected outside `Selecting`.
//! The score lives on the session so finalisation never reads a stale value.

use crate::error::{Result, SessionError};
use crate::types::QuizQuestion;

/// Fraction of questions that must be answered correctly to pass.
const PASS_RATIO: f64 = 0.8;

/// Answer lifecycle for the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerPhase {
    #[default]
    Selecting,
    Confirming,
    Revealed,
}

/// Result of advancing past a revealed question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    /// Moved to the question at this index.
    Next(usize),
    Finished(QuizReport),
}

/// Final quiz outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizReport {
    pub score: u32,
    pub total: u32,
    pub passed: bool,
}

/// State for one quiz run.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    index: usize,
    score: u32,
    chosen: Option<String>,
    phase: AnswerPhase,
    finished: bool,
}

impl QuizSession {
    /// Validate and start a quiz. Every question must list its correct
    /// answer among its options.
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self> {
        if questions.is_empty() {
            return Err(SessionError::NoQuestions);
        }
        for (index, q) in questions.iter().enumerate() {
            if !q.options.contains(&q.correct_answer) {
                return Err(SessionError::CorrectAnswerMissing { index });
            }
        }
        Ok(Self {
            questions,
            index: 0,
            score: 0,
            chosen: None,
            phase: AnswerPhase::Selecting,
            finished: false,
        })
    }

    /// Minimum correct answers to pass a quiz of `count` questions.
    pub fn pass_threshold(count: usize) -> u32 {
        (count as f64 * PASS_RATIO).ceil() as u32
    }

    pub fn current(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> AnswerPhase {
        self.phase
    }

    pub fn chosen(&self) -> Option<&str> {
        self.chosen.as_deref()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Lock in an option. Ignored outside the selecting phase.
    pub fn choose(&mut self, option: &str) -> bool {
        if self.phase != AnswerPhase::Selecting || self.finished {
            return false;
        }
        self.chosen = Some(option.to_string());
        self.phase = AnswerPhase::Confirming;
        true
    }

    /// Reveal the correct answer after the confirm delay.
    ///
    /// Returns whether the chosen option was correct; the score accumulates
    /// here and nowhere else.
    pub fn reveal(&mut self) -> Option<bool> {
        if self.phase != AnswerPhase::Confirming {
            return None;
        }
        self.phase = AnswerPhase::Revealed;
        let correct = self
            .chosen
            .as_deref()
            .is_some_and(|c| c == self.questions[self.index].correct_answer);
        if correct {
            self.score += 1;
        }
        Some(correct)
    }

    /// Advance to the next question after the reveal delay, or finalise.
    pub fn advance(&mut self) -> Option<QuizStep> {
        if self.phase != AnswerPhase::Revealed || self.finished {
            return None;
        }
        if self.index + 1 < self.questions.len() {
            self.index += 1;
            self.chosen = None;
            self.phase = AnswerPhase::Selecting;
            Some(QuizStep::Next(self.index))
        } else {
            self.finished = true;
            let total = self.questions.len();
            Some(QuizStep::Finished(QuizReport {
                score: self.score,
                total: total as u32,
                passed: self.score >= Self::pass_threshold(total),
            }))
        }
    }
}
