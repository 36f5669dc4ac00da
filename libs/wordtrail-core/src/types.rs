//! Core types for the vocabulary trainer.

use serde::{Deserialize, Serialize};

/// A vocabulary entry as served by the remote word store.
///
/// The collaborator speaks camelCase JSON, so wire names are renamed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vocabulary {
    pub id: i64,
    pub word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    pub meaning: String,
    pub pronunciation: String,
    pub example: String,
}

/// Per-day learning progress, derived server-side and consumed read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayProgress {
    pub day: u32,
    pub total_words: u32,
    pub mastered_words: u32,
    pub is_unlocked: bool,
}

impl DayProgress {
    /// A day is complete when every word has been mastered.
    pub fn is_complete(&self) -> bool {
        self.total_words > 0 && self.mastered_words == self.total_words
    }
}

/// One multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub word_id: i64,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

/// Which language a matching card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardSide {
    En,
    Vn,
}

/// Matching card state machine.
///
/// `Hidden -> Selected -> { Matched | Wrong }`; `Wrong` reverts to `Hidden`,
/// `Matched` is terminal for the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardStatus {
    Hidden,
    Selected,
    Matched,
    Wrong,
}
