//! Core vocabulary practice library shared by the client application.
//!
//! Provides:
//! - Day-unlock progress model
//! - Flashcard session driver (randomized review order)
//! - Matching game round engine
//! - Spelling drill with penalty requeue
//! - Multiple-choice quiz scorer
//! - Shared types (Vocabulary, DayProgress, QuizQuestion, etc.)

pub mod answer;
pub mod error;
pub mod flashcards;
pub mod matching;
pub mod progress;
pub mod quiz;
pub mod spelling;
pub mod types;

pub use answer::answers_match;
pub use error::{Result, SessionError};
pub use flashcards::{Direction, FlashcardSession};
pub use matching::{MatchingGame, PairJudgement, PracticeCard, RoundStep, Selection};
pub use progress::{compute_unlock, validate_days, ProgressSummary};
pub use quiz::{AnswerPhase, QuizReport, QuizSession, QuizStep};
pub use spelling::{SpellingSession, Verdict};
pub use types::{CardSide, CardStatus, DayProgress, QuizQuestion, Vocabulary};
