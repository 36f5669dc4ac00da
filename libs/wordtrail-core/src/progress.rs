//! Day-unlock progress model.
//!
//! The server derives unlock state; the client re-derives it for validation
//! and treats `is_unlocked == false` as a hard gate.

use crate::error::{Result, SessionError};
use crate::types::DayProgress;

/// Derive unlock eligibility over an ordered sequence of days.
///
/// Day 1 is always unlocked; day N > 1 unlocks iff day N-1 has every word
/// mastered.
pub fn compute_unlock(days: &[DayProgress]) -> Vec<DayProgress> {
    let mut result = Vec::with_capacity(days.len());
    let mut previous_complete = true;
    for (i, day) in days.iter().enumerate() {
        let unlocked = i == 0 || previous_complete;
        previous_complete = day.is_complete();
        result.push(DayProgress {
            is_unlocked: unlocked,
            ..*day
        });
    }
    result
}

/// Validate the invariants on a server-provided progress list.
pub fn validate_days(days: &[DayProgress]) -> Result<()> {
    for day in days {
        if day.mastered_words > day.total_words {
            return Err(SessionError::InvalidProgress {
                day: day.day,
                mastered: day.mastered_words,
                total: day.total_words,
            });
        }
    }
    if let Some(first) = days.first() {
        if !first.is_unlocked {
            return Err(SessionError::FirstDayLocked);
        }
    }
    Ok(())
}

/// Aggregate totals across all days, for the stats view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    pub total_words: u32,
    pub total_mastered: u32,
    /// Whole-percent completion, 0 when there are no words.
    pub percent_complete: u32,
}

impl ProgressSummary {
    pub fn from_days(days: &[DayProgress]) -> Self {
        let total_words: u32 = days.iter().map(|d| d.total_words).sum();
        let total_mastered: u32 = days.iter().map(|d| d.mastered_words).sum();
        let percent_complete = if total_words > 0 {
            ((total_mastered as f64 / total_words as f64) * 100.0).round() as u32
        } else {
            0
        };
        Self {
            total_words,
            total_mastered,
            percent_complete,
        }
    }
}
