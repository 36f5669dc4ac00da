//! Application controller: view selection and session orchestration.
//!
//! A single owned context threads all mutable UI state; view switches are an
//! explicit finite-state selector with enumerated transitions. Sessions are
//! created fresh per view entry and discarded when the view is left.

use rand::rngs::StdRng;
use rand::SeedableRng;

use wordtrail_core::{
    validate_days, DayProgress, FlashcardSession, MatchingGame, PairJudgement, ProgressSummary,
    QuizReport, QuizSession, QuizStep, RoundStep, Selection, SpellingSession, Verdict,
};

use crate::api::VocabApi;
use crate::error::{ClientError, Result};

/// Top-level view selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Menu,
    Learning,
    Quiz,
    Game,
    Stats,
    Spelling,
}

impl View {
    pub fn name(self) -> &'static str {
        match self {
            View::Menu => "menu",
            View::Learning => "learning",
            View::Quiz => "quiz",
            View::Game => "game",
            View::Stats => "stats",
            View::Spelling => "spelling",
        }
    }

    /// Enumerated allowed transitions between views.
    pub fn can_transition(self, to: View) -> bool {
        use View::*;
        matches!(
            (self, to),
            (Menu, Learning)
                | (Menu, Stats)
                | (Learning, Menu)
                | (Learning, Quiz)
                | (Learning, Game)
                | (Learning, Spelling)
                | (Quiz, Learning)
                | (Quiz, Menu)
                | (Game, Learning)
                | (Spelling, Learning)
                | (Stats, Menu)
        )
    }
}

/// Outcome of picking a day on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySelection {
    /// Hard gate: no state mutated, no network call made. The caller should
    /// play the haptic cue and show a blocking notice.
    Locked,
    /// Words fetched and a fresh learning session started.
    Started,
}

/// The application context. Generic over the API port so tests can run
/// against an in-memory collaborator.
pub struct App<A: VocabApi> {
    api: A,
    rng: StdRng,
    view: View,
    days: Vec<DayProgress>,
    current_day: u32,
    flashcards: Option<FlashcardSession>,
    quiz: Option<QuizSession>,
    game: Option<MatchingGame>,
    spelling: Option<SpellingSession>,
}

impl<A: VocabApi> App<A> {
    pub fn new(api: A) -> Self {
        Self::with_rng(api, StdRng::from_os_rng())
    }

    /// Seeded construction for deterministic tests.
    pub fn with_rng(api: A, rng: StdRng) -> Self {
        Self {
            api,
            rng,
            view: View::Menu,
            days: Vec::new(),
            current_day: 1,
            flashcards: None,
            quiz: None,
            game: None,
            spelling: None,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn days(&self) -> &[DayProgress] {
        &self.days
    }

    pub fn current_day(&self) -> u32 {
        self.current_day
    }

    pub fn flashcards(&self) -> Option<&FlashcardSession> {
        self.flashcards.as_ref()
    }

    pub fn quiz_session(&self) -> Option<&QuizSession> {
        self.quiz.as_ref()
    }

    pub fn game(&self) -> Option<&MatchingGame> {
        self.game.as_ref()
    }

    pub fn game_mut(&mut self) -> Option<&mut MatchingGame> {
        self.game.as_mut()
    }

    pub fn spelling(&self) -> Option<&SpellingSession> {
        self.spelling.as_ref()
    }

    pub fn spelling_mut(&mut self) -> Option<&mut SpellingSession> {
        self.spelling.as_mut()
    }

    // === Menu ===

    /// Refetch day progress; called on menu entry and after a passed quiz.
    pub async fn refresh_days(&mut self) -> Result<()> {
        let days = self.api.days_progress().await?;
        validate_days(&days)?;
        self.days = days;
        Ok(())
    }

    /// Return to the menu from any view that allows it.
    pub async fn enter_menu(&mut self) -> Result<()> {
        self.set_view(View::Menu)?;
        self.refresh_days().await
    }

    /// Pick a day from the menu. Selecting a locked day is a no-op gate.
    pub async fn select_day(&mut self, day: u32) -> Result<DaySelection> {
        let progress = self
            .days
            .iter()
            .find(|d| d.day == day)
            .copied()
            .ok_or_else(|| ClientError::EmptyData(format!("unknown day {day}")))?;
        if !progress.is_unlocked {
            tracing::info!(day, "locked day selected");
            return Ok(DaySelection::Locked);
        }
        let words = self.api.get_words(day, true, false).await?;
        tracing::info!(day, words = words.len(), "starting learning session");
        self.current_day = day;
        self.flashcards = Some(FlashcardSession::new(words));
        self.set_view(View::Learning)?;
        Ok(DaySelection::Started)
    }

    /// Fetch day progress and aggregate it for the stats view.
    pub async fn show_stats(&mut self) -> Result<ProgressSummary> {
        self.set_view(View::Stats)?;
        self.refresh_days().await?;
        Ok(ProgressSummary::from_days(&self.days))
    }

    // === Learning ===

    pub fn flip_card(&mut self) -> Result<()> {
        self.flashcards_mut()?.flip();
        Ok(())
    }

    pub fn next_card(&mut self) -> Result<()> {
        let rng = &mut self.rng;
        self.flashcards
            .as_mut()
            .ok_or(ClientError::NoActiveSession)?
            .advance(rng);
        Ok(())
    }

    pub fn prev_card(&mut self) -> Result<()> {
        self.flashcards_mut()?.retreat();
        Ok(())
    }

    pub fn toggle_direction(&mut self) -> Result<()> {
        self.flashcards_mut()?.toggle_direction();
        Ok(())
    }

    /// Mark the current card mastered: explicit two-phase update.
    ///
    /// The card is removed locally first, then the server is notified. On a
    /// rejected call the local removal stands and the caller gets a
    /// reconciliation error to surface.
    pub async fn master_current(&mut self) -> Result<()> {
        let rng = &mut self.rng;
        let word = self
            .flashcards
            .as_mut()
            .ok_or(ClientError::NoActiveSession)?
            .mark_mastered(rng)
            .ok_or(ClientError::NoActiveSession)?;
        if let Err(e) = self.api.mark_mastered(word.id).await {
            tracing::warn!(word = %word.word, error = %e, "master update rejected by server");
            return Err(ClientError::Unreconciled(e.to_string()));
        }
        Ok(())
    }

    /// Clear the day's progress and refetch its active words.
    pub async fn reset_current_day(&mut self) -> Result<()> {
        self.api.reset_day(self.current_day).await?;
        let words = self.api.get_words(self.current_day, true, false).await?;
        self.flashcards = Some(FlashcardSession::new(words));
        Ok(())
    }

    /// Review every word again, mastered ones included.
    pub async fn review_all(&mut self) -> Result<()> {
        let words = self.api.get_words(self.current_day, true, true).await?;
        self.flashcards = Some(FlashcardSession::new(words));
        Ok(())
    }

    /// Ask the AI collaborator to explain the current word.
    pub async fn explain_current(&mut self) -> Result<String> {
        let word = self
            .flashcards
            .as_ref()
            .and_then(|s| s.current())
            .ok_or(ClientError::NoActiveSession)?
            .word
            .clone();
        self.api.explain(&word).await
    }

    // === Quiz ===

    /// Fetch the day's quiz and enter the quiz view.
    ///
    /// An empty question list leaves the current view untouched.
    pub async fn start_quiz(&mut self) -> Result<()> {
        let questions = self.api.quiz(self.current_day).await?;
        if questions.is_empty() {
            return Err(ClientError::EmptyData(
                "not enough words to build a quiz for this day".to_string(),
            ));
        }
        let session = QuizSession::new(questions)?;
        self.set_view(View::Quiz)?;
        tracing::info!(day = self.current_day, questions = session.total(), "quiz started");
        self.quiz = Some(session);
        Ok(())
    }

    pub fn answer_quiz(&mut self, option: &str) -> Result<bool> {
        Ok(self.quiz_mut()?.choose(option))
    }

    pub fn reveal_quiz(&mut self) -> Result<Option<bool>> {
        Ok(self.quiz_mut()?.reveal())
    }

    /// Advance the quiz; on a passing final question, notify the server
    /// exactly once, refetch progress, and return to the menu.
    pub async fn advance_quiz(&mut self) -> Result<Option<QuizReport>> {
        let step = self
            .quiz
            .as_mut()
            .ok_or(ClientError::NoActiveSession)?
            .advance();
        match step {
            Some(QuizStep::Finished(report)) => {
                if report.passed {
                    self.api.complete_day(self.current_day).await?;
                    self.set_view(View::Menu)?;
                    self.refresh_days().await?;
                }
                Ok(Some(report))
            }
            Some(QuizStep::Next(_)) | None => Ok(None),
        }
    }

    // === Matching game ===

    /// Fetch all of the day's words (mastered included) and start the game.
    pub async fn start_game(&mut self) -> Result<()> {
        let words = self.api.get_words(self.current_day, true, true).await?;
        if words.is_empty() {
            return Err(ClientError::EmptyData(
                "this day has no words to play with".to_string(),
            ));
        }
        let game = MatchingGame::new(words, &mut self.rng)?;
        self.set_view(View::Game)?;
        tracing::info!(
            day = self.current_day,
            rounds = game.total_rounds(),
            "matching game started"
        );
        self.game = Some(game);
        Ok(())
    }

    pub fn select_card(&mut self, card_id: &str) -> Result<Selection> {
        Ok(self
            .game
            .as_mut()
            .ok_or(ClientError::NoActiveSession)?
            .select(card_id))
    }

    pub fn settle_pair(&mut self) -> Result<Option<PairJudgement>> {
        Ok(self
            .game
            .as_mut()
            .ok_or(ClientError::NoActiveSession)?
            .settle())
    }

    pub fn advance_round(&mut self) -> Result<RoundStep> {
        let rng = &mut self.rng;
        Ok(self
            .game
            .as_mut()
            .ok_or(ClientError::NoActiveSession)?
            .next_round(rng))
    }

    // === Spelling ===

    /// Fetch all of the day's words and start the spelling drill.
    pub async fn start_spelling(&mut self) -> Result<()> {
        let words = self.api.get_words(self.current_day, true, true).await?;
        if words.is_empty() {
            return Err(ClientError::EmptyData(
                "this day has no words to practice".to_string(),
            ));
        }
        let session = SpellingSession::new(words)?;
        self.set_view(View::Spelling)?;
        tracing::info!(
            day = self.current_day,
            words = session.queue().len(),
            "spelling drill started"
        );
        self.spelling = Some(session);
        Ok(())
    }

    pub fn check_spelling(&mut self, input: &str) -> Result<Verdict> {
        Ok(self
            .spelling
            .as_mut()
            .ok_or(ClientError::NoActiveSession)?
            .check(input))
    }

    /// Reveal the answer; returns the word so the UI can fill the input.
    pub fn give_up_spelling(&mut self) -> Result<String> {
        self.spelling
            .as_mut()
            .ok_or(ClientError::NoActiveSession)?
            .give_up()
            .map(|w| w.word.clone())
            .ok_or(ClientError::NoActiveSession)
    }

    pub fn advance_spelling(&mut self) -> Result<()> {
        self.spelling
            .as_mut()
            .ok_or(ClientError::NoActiveSession)?
            .advance();
        Ok(())
    }

    pub fn clear_spelling_verdict(&mut self) -> Result<()> {
        self.spelling
            .as_mut()
            .ok_or(ClientError::NoActiveSession)?
            .clear_verdict();
        Ok(())
    }

    // === View plumbing ===

    /// Leave the current practice view back to the learning screen.
    pub fn back_to_learning(&mut self) -> Result<()> {
        self.set_view(View::Learning)
    }

    fn set_view(&mut self, to: View) -> Result<()> {
        if self.view == to {
            return Ok(());
        }
        if !self.view.can_transition(to) {
            return Err(ClientError::InvalidTransition {
                from: self.view.name(),
                to: to.name(),
            });
        }
        // Sessions do not outlive their view.
        match self.view {
            View::Quiz => {
                self.quiz = None;
                // A passed quiz exits the whole learning session.
                if to == View::Menu {
                    self.flashcards = None;
                }
            }
            View::Game => self.game = None,
            View::Spelling => self.spelling = None,
            View::Learning if to == View::Menu => self.flashcards = None,
            _ => {}
        }
        self.view = to;
        Ok(())
    }

    fn flashcards_mut(&mut self) -> Result<&mut FlashcardSession> {
        self.flashcards.as_mut().ok_or(ClientError::NoActiveSession)
    }

    fn quiz_mut(&mut self) -> Result<&mut QuizSession> {
        self.quiz.as_mut().ok_or(ClientError::NoActiveSession)
    }
}
