use crate::session::SessionResults;
use crate::typing_session::{Outcome, WordJudgement};
use crate::words::WordList;

/// Observer for everything a front end needs to redraw
pub trait Renderer {
    fn session_started(&mut self, words: &WordList);
    fn word_judged(&mut self, judgement: WordJudgement);
    /// Backspace pressed: drop any error feedback on the input.
    fn input_reset(&mut self);
    fn session_finished(&mut self, results: &SessionResults);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Pending,
    Correct,
    Incorrect,
}

impl From<Outcome> for Highlight {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Correct => Highlight::Correct,
            Outcome::Incorrect => Highlight::Incorrect,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderTone {
    Neutral,
    Mismatch,
}

/// Per-word colouring and input feedback, driven only by renderer callbacks
#[derive(Debug, Clone)]
pub struct WordBoard {
    highlights: Vec<Highlight>,
    border: BorderTone,
    results: Option<SessionResults>,
}

impl WordBoard {
    pub fn new(words: &WordList) -> Self {
        let mut board = Self {
            highlights: Vec::new(),
            border: BorderTone::Neutral,
            results: None,
        };
        board.session_started(words);
        board
    }

    pub fn highlight(&self, idx: usize) -> Highlight {
        self.highlights
            .get(idx)
            .copied()
            .unwrap_or(Highlight::Pending)
    }

    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    pub fn border(&self) -> BorderTone {
        self.border
    }

    pub fn results(&self) -> Option<&SessionResults> {
        self.results.as_ref()
    }

    /// Flag the input once it can no longer become `expected`.
    pub fn input_changed(&mut self, buffer: &str, expected: Option<&str>) {
        let on_track = expected.map_or(true, |word| word.starts_with(buffer));
        if !on_track {
            self.border = BorderTone::Mismatch;
        }
    }

    /// Result lines shown once the test is over.
    pub fn result_lines(&self) -> Option<[String; 3]> {
        self.results.map(|results| {
            [
                "Test completed!".to_string(),
                format!("Accuracy: {:.2}%", results.accuracy),
                format!("Words Per Minute (WPM): {:.2}", results.wpm),
            ]
        })
    }
}

impl Renderer for WordBoard {
    fn session_started(&mut self, words: &WordList) {
        self.highlights = vec![Highlight::Pending; words.len()];
        self.border = BorderTone::Neutral;
        self.results = None;
    }

    fn word_judged(&mut self, judgement: WordJudgement) {
        if let Some(slot) = self.highlights.get_mut(judgement.index) {
            *slot = judgement.outcome().into();
        }
        self.border = BorderTone::Neutral;
    }

    fn input_reset(&mut self) {
        self.border = BorderTone::Neutral;
    }

    fn session_finished(&mut self, results: &SessionResults) {
        self.results = Some(*results);
    }
}
