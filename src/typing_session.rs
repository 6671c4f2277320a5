use tracing::{debug, info, warn};

use crate::clock::{Clock, MonotonicClock};
use crate::error::WordSourceError;
use crate::metrics::compute_results;
use crate::session::{SessionConfig, SessionPhase, SessionResults, SessionState};
use crate::words::{WordList, WordSource};

#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

/// Verdict on one submitted word
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub struct WordJudgement {
    pub index: usize,
    pub correct: bool,
}

impl WordJudgement {
    pub fn outcome(&self) -> Outcome {
        if self.correct {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        }
    }
}

/// What a word submission produced: always a judgement, and the final
/// results when it was the last word.
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct Submission {
    pub judgement: WordJudgement,
    pub results: Option<SessionResults>,
}

/// A typing test over a fixed word list
#[derive(Debug)]
pub struct TypingSession<S: WordSource, C: Clock = MonotonicClock> {
    source: S,
    clock: C,
    config: SessionConfig,
    words: WordList,
    state: SessionState,
}

impl<S: WordSource> TypingSession<S, MonotonicClock> {
    pub fn with_source(source: S, config: SessionConfig) -> Result<Self, WordSourceError> {
        Self::new(source, MonotonicClock::new(), config)
    }
}

impl<S: WordSource, C: Clock> TypingSession<S, C> {
    /// Draw the first word list and get ready for the first keystroke.
    pub fn new(source: S, clock: C, config: SessionConfig) -> Result<Self, WordSourceError> {
        let words = source.sample(config.number_of_words).inspect_err(|e| {
            warn!(error = %e, "could not draw words for a new session");
        })?;

        let mut session = Self {
            source,
            clock,
            config,
            words: WordList::default(),
            state: SessionState::default(),
        };
        session.start(words);
        Ok(session)
    }

    /// Begin a session over `words`; the list length becomes the session size.
    pub fn start(&mut self, words: WordList) {
        self.words = words;
        self.state = SessionState::default();
        info!(words = self.words.len(), "session started");

        if self.words.is_empty() {
            self.finish();
        }
    }

    /// Count one non-space keystroke, starting the timer on the first one.
    pub fn on_character_typed(&mut self) {
        if self.state.finished {
            return;
        }

        if !self.state.timer_started {
            self.state.start_time_nanos = Some(self.clock.now_nanos());
            self.state.timer_started = true;
            debug!("timer started");
        }

        self.state.total_characters_typed += 1;
    }

    /// Backspace only resets visual feedback; characters already counted stay counted.
    pub fn on_backspace(&mut self) {}

    /// Judge `typed` against the current word and advance.
    ///
    /// Returns `None` once the session is finished, since input is disabled.
    pub fn on_word_submit(&mut self, typed: &str) -> Option<Submission> {
        if self.state.finished {
            return None;
        }

        // only ASCII control characters and space count as padding
        let typed = typed.trim_matches(|c: char| c <= ' ');
        self.state.total_characters_typed += typed.chars().count();

        let index = self.state.current_index;
        let correct = typed == &self.words[index];
        if correct {
            self.state.correct_count += 1;
        }
        debug!(index, correct, typed, "word judged");

        self.state.current_index += 1;

        let results = if self.state.current_index == self.words.len() {
            Some(self.finish())
        } else {
            None
        };

        Some(Submission {
            judgement: WordJudgement { index, correct },
            results,
        })
    }

    fn finish(&mut self) -> SessionResults {
        self.state.end_time_nanos = Some(self.clock.now_nanos());
        self.state.finished = true;

        let results = compute_results(&self.state, self.words.len());
        self.state.results = Some(results);
        info!(
            accuracy = results.accuracy,
            wpm = results.wpm,
            correct = self.state.correct_count,
            words = self.words.len(),
            "session finished"
        );
        results
    }

    /// Throw away all progress and draw a fresh word list.
    ///
    /// On failure the current session is left as it was.
    pub fn reset(&mut self) -> Result<(), WordSourceError> {
        let words = self
            .source
            .sample(self.config.number_of_words)
            .inspect_err(|e| warn!(error = %e, "could not draw words for reset"))?;
        info!("session reset");
        self.start(words);
        Ok(())
    }

    /// Start over on the same words.
    pub fn retry(&mut self) {
        let words = std::mem::take(&mut self.words);
        self.start(words);
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn current_word(&self) -> Option<&str> {
        self.words.get(self.state.current_index)
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    pub fn has_finished(&self) -> bool {
        self.state.finished
    }

    pub fn results(&self) -> Option<&SessionResults> {
        self.state.results.as_ref()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}
