//! Error types for wordtrail-core.

use thiserror::Error;

/// Result type alias using SessionError.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors that can occur when building or driving a practice session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no words available for this session")]
    NoWords,

    #[error("no questions available for this quiz")]
    NoQuestions,

    #[error("question {index} is missing its correct answer among the options")]
    CorrectAnswerMissing { index: usize },

    #[error("day {day} has {mastered} mastered of {total} total words")]
    InvalidProgress { day: u32, mastered: u32, total: u32 },

    #[error("day 1 must always be unlocked")]
    FirstDayLocked,
}
