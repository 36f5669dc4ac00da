//! Shared test support: an in-memory collaborator and data factories.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use wordtrail_client::error::{ClientError, Result};
use wordtrail_client::VocabApi;
use wordtrail_core::{DayProgress, QuizQuestion, Vocabulary};

/// Create a vocabulary entry.
pub fn word(id: i64, text: &str) -> Vocabulary {
    Vocabulary {
        id,
        word: text.to_string(),
        part_of_speech: Some("noun".to_string()),
        meaning: format!("meaning of {text}"),
        pronunciation: format!("/{text}/"),
        example: format!("An example with {text}."),
    }
}

/// Create a day progress record.
pub fn day(day: u32, total: u32, mastered: u32, unlocked: bool) -> DayProgress {
    DayProgress {
        day,
        total_words: total,
        mastered_words: mastered,
        is_unlocked: unlocked,
    }
}

/// Create a quiz question whose correct answer is `a{id}`.
pub fn question(id: i64) -> QuizQuestion {
    QuizQuestion {
        word_id: id,
        question: format!("word{id}"),
        options: vec![
            format!("a{id}"),
            "wrong1".to_string(),
            "wrong2".to_string(),
            "wrong3".to_string(),
        ],
        correct_answer: format!("a{id}"),
    }
}

/// In-memory collaborator that records every call it receives.
#[derive(Default)]
pub struct MockApi {
    pub words_by_day: HashMap<u32, Vec<Vocabulary>>,
    pub days: Mutex<Vec<DayProgress>>,
    pub quizzes: HashMap<u32, Vec<QuizQuestion>>,
    pub explanations: HashMap<String, String>,
    /// Every collaborator call, by name, in order.
    pub calls: Mutex<Vec<String>>,
    pub mastered: Mutex<Vec<i64>>,
    pub completed_days: Mutex<Vec<u32>>,
    pub reset_days: Mutex<Vec<u32>>,
    /// When set, `mark_mastered` rejects with a network error.
    pub fail_master: bool,
}

impl MockApi {
    pub fn call_count(&self, name: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| *c == name)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, name: &str) {
        self.calls.lock().unwrap().push(name.to_string());
    }
}

#[async_trait]
impl VocabApi for MockApi {
    async fn get_words(
        &self,
        day: u32,
        _random: bool,
        _include_all: bool,
    ) -> Result<Vec<Vocabulary>> {
        self.record("get_words");
        Ok(self.words_by_day.get(&day).cloned().unwrap_or_default())
    }

    async fn mark_mastered(&self, id: i64) -> Result<()> {
        self.record("mark_mastered");
        if self.fail_master {
            return Err(ClientError::Network("connection refused".to_string()));
        }
        self.mastered.lock().unwrap().push(id);
        Ok(())
    }

    async fn days_progress(&self) -> Result<Vec<DayProgress>> {
        self.record("days_progress");
        Ok(self.days.lock().unwrap().clone())
    }

    async fn reset_day(&self, day: u32) -> Result<()> {
        self.record("reset_day");
        self.reset_days.lock().unwrap().push(day);
        Ok(())
    }

    async fn quiz(&self, day: u32) -> Result<Vec<QuizQuestion>> {
        self.record("quiz");
        Ok(self.quizzes.get(&day).cloned().unwrap_or_default())
    }

    async fn complete_day(&self, day: u32) -> Result<()> {
        self.record("complete_day");
        self.completed_days.lock().unwrap().push(day);
        Ok(())
    }

    async fn explain(&self, word: &str) -> Result<String> {
        self.record("explain");
        self.explanations
            .get(word)
            .cloned()
            .ok_or_else(|| ClientError::EmptyData(format!("no explanation for {word}")))
    }
}
