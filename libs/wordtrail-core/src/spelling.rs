//! Spelling drill with a penalty requeue.
//!
//! The word list is traversed by a monotonically increasing index, never by
//! removal. A missed word is appended back onto the end of the queue, so the
//! queue grows and the completion check is "index beyond current length",
//! re-evaluated after every append.

use crate::answer::answers_match;
use crate::error::{Result, SessionError};
use crate::types::Vocabulary;

/// Points awarded for a clean first-try answer.
pub const POINTS_PER_WORD: u32 = 10;

/// Verdict on the current word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verdict {
    #[default]
    Idle,
    Correct,
    Wrong,
    Revealed,
}

/// State for one spelling session.
#[derive(Debug, Clone)]
pub struct SpellingSession {
    queue: Vec<Vocabulary>,
    index: usize,
    verdict: Verdict,
    penalized: bool,
    score: u32,
    wrong_count: u32,
    finished: bool,
    celebrated: bool,
}

impl SpellingSession {
    pub fn new(words: Vec<Vocabulary>) -> Result<Self> {
        if words.is_empty() {
            return Err(SessionError::NoWords);
        }
        Ok(Self {
            queue: words,
            index: 0,
            verdict: Verdict::Idle,
            penalized: false,
            score: 0,
            wrong_count: 0,
            finished: false,
            celebrated: false,
        })
    }

    pub fn current(&self) -> Option<&Vocabulary> {
        self.queue.get(self.index)
    }

    /// 1-based position and current queue length, for the progress header.
    /// The denominator grows as penalties are appended.
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.queue.len())
    }

    pub fn queue(&self) -> &[Vocabulary] {
        &self.queue
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn wrong_count(&self) -> u32 {
        self.wrong_count
    }

    /// The current word has already been penalized this visit.
    pub fn penalized(&self) -> bool {
        self.penalized
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// True exactly once, when the finished screen should fire its effect.
    pub fn take_celebration(&mut self) -> bool {
        if self.finished && !self.celebrated {
            self.celebrated = true;
            return true;
        }
        false
    }

    /// Check the typed input against the current word.
    ///
    /// Correct answers score only if this visit is still unpenalized; the
    /// caller speaks the word aloud on `Correct`. The first miss of a visit
    /// appends a duplicate of the word to the back of the queue; later misses
    /// on the same visit change nothing.
    pub fn check(&mut self, input: &str) -> Verdict {
        let Some(current) = self.queue.get(self.index).cloned() else {
            return self.verdict;
        };
        if matches!(self.verdict, Verdict::Correct | Verdict::Revealed) {
            return self.verdict;
        }
        if answers_match(input, &current.word) {
            self.verdict = Verdict::Correct;
            if !self.penalized {
                self.score += POINTS_PER_WORD;
            }
        } else {
            self.verdict = Verdict::Wrong;
            self.penalize(current);
        }
        self.verdict
    }

    /// Reveal the answer; counts as a penalty under the once-per-visit rule.
    ///
    /// Returns the correct word so the UI can fill the input with it.
    pub fn give_up(&mut self) -> Option<&Vocabulary> {
        let current = self.queue.get(self.index).cloned()?;
        self.penalize(current);
        self.verdict = Verdict::Revealed;
        self.current()
    }

    /// Editing the input after a miss returns the verdict to idle.
    pub fn clear_verdict(&mut self) {
        if self.verdict == Verdict::Wrong {
            self.verdict = Verdict::Idle;
        }
    }

    /// Move to the next queued word, or finish past the end.
    pub fn advance(&mut self) {
        if self.index + 1 < self.queue.len() {
            self.index += 1;
            self.verdict = Verdict::Idle;
            self.penalized = false;
        } else {
            self.finished = true;
        }
    }

    fn penalize(&mut self, word: Vocabulary) {
        if self.penalized {
            return;
        }
        self.penalized = true;
        self.wrong_count += 1;
        self.queue.push(word);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn word(id: i64, text: &str) -> Vocabulary {
        Vocabulary {
            id,
            word: text.to_string(),
            part_of_speech: None,
            meaning: format!("meaning of {text}"),
            pronunciation: String::new(),
            example: String::new(),
        }
    }

    fn session(words: &[&str]) -> SpellingSession {
        SpellingSession::new(
            words
                .iter()
                .enumerate()
                .map(|(i, w)| word(i as i64, w))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn empty_word_list_is_rejected() {
        assert!(matches!(
            SpellingSession::new(Vec::new()),
            Err(SessionError::NoWords)
        ));
    }

    #[test]
    fn clean_answer_scores_ten_points() {
        let mut s = session(&["apple"]);
        assert_eq!(s.check("Apple "), Verdict::Correct);
        assert_eq!(s.score(), 10);
        assert_eq!(s.wrong_count(), 0);
        assert_eq!(s.queue().len(), 1);
    }

    #[test]
    fn first_miss_appends_duplicate_and_counts_once() {
        let mut s = session(&["apple", "berry"]);
        assert_eq!(s.check("appel"), Verdict::Wrong);
        assert_eq!(s.wrong_count(), 1);
        assert_eq!(s.queue().len(), 3);
        assert_eq!(s.queue()[2].word, "apple");

        // Second miss on the same visit changes neither.
        s.clear_verdict();
        assert_eq!(s.check("aple"), Verdict::Wrong);
        assert_eq!(s.wrong_count(), 1);
        assert_eq!(s.queue().len(), 3);
    }

    #[test]
    fn correct_after_penalty_scores_nothing() {
        let mut s = session(&["apple"]);
        s.check("wrong");
        s.clear_verdict();
        assert_eq!(s.check("apple"), Verdict::Correct);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn give_up_is_penalized_once_and_reveals() {
        let mut s = session(&["apple"]);
        let revealed = s.give_up().unwrap().word.clone();
        assert_eq!(revealed, "apple");
        assert_eq!(s.verdict(), Verdict::Revealed);
        assert_eq!(s.wrong_count(), 1);
        assert_eq!(s.queue().len(), 2);

        // Already penalized: a later give up adds nothing.
        s.give_up();
        assert_eq!(s.wrong_count(), 1);
        assert_eq!(s.queue().len(), 2);
    }

    #[test]
    fn give_up_after_miss_does_not_double_penalize() {
        let mut s = session(&["apple"]);
        s.check("wrong");
        s.give_up();
        assert_eq!(s.wrong_count(), 1);
        assert_eq!(s.queue().len(), 2);
    }

    #[test]
    fn advance_resets_penalty_flag_and_verdict() {
        let mut s = session(&["apple", "berry"]);
        s.check("wrong");
        s.clear_verdict();
        s.check("apple");
        s.advance();
        assert!(!s.penalized());
        assert_eq!(s.verdict(), Verdict::Idle);
        assert_eq!(s.current().unwrap().word, "berry");
    }

    #[test]
    fn completion_accounts_for_appended_penalties() {
        let mut s = session(&["apple"]);
        s.check("wrong");
        s.clear_verdict();
        s.check("apple");
        s.advance();
        // The penalty copy is still in the queue.
        assert!(!s.is_finished());
        s.check("apple");
        assert_eq!(s.score(), 10);
        s.advance();
        assert!(s.is_finished());
    }

    #[test]
    fn two_word_penalty_scenario() {
        // Start [w1, w2]; miss w1 once, retry correctly.
        let mut s = session(&["w1", "w2"]);
        s.check("nope");
        assert_eq!(
            s.queue().iter().map(|w| w.word.as_str()).collect::<Vec<_>>(),
            vec!["w1", "w2", "w1"]
        );
        assert_eq!(s.wrong_count(), 1);
        let before = s.score();
        s.clear_verdict();
        s.check("w1");
        assert_eq!(s.score(), before);
        s.advance();
        s.check("w2");
        assert_eq!(s.score(), 10);
        s.advance();
        s.check("w1");
        assert_eq!(s.score(), 20);
        s.advance();
        assert!(s.is_finished());
        assert!(s.take_celebration());
        assert!(!s.take_celebration());
    }

    #[test]
    fn verdict_locks_out_rechecking_until_advance() {
        let mut s = session(&["apple", "berry"]);
        s.check("apple");
        // A second check while correct is a no-op, not a double score.
        assert_eq!(s.check("apple"), Verdict::Correct);
        assert_eq!(s.score(), 10);
    }
}
