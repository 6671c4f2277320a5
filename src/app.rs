use crossterm::event::KeyEvent;
use tracing::debug;

use crate::clock::{Clock, MonotonicClock};
use crate::error::WordSourceError;
use crate::typing_policy::{InputField, KeyAction};
use crate::typing_session::TypingSession;
use crate::view::{Renderer, WordBoard};
use crate::words::WordSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Wires key presses to the session and keeps the board in sync
#[derive(Debug)]
pub struct App<S: WordSource, C: Clock = MonotonicClock> {
    pub session: TypingSession<S, C>,
    pub input: InputField,
    pub board: WordBoard,
}

impl<S: WordSource, C: Clock> App<S, C> {
    pub fn new(session: TypingSession<S, C>) -> Self {
        let board = WordBoard::new(session.words());
        let mut app = Self {
            session,
            input: InputField::new(),
            board,
        };
        app.sync_finished();
        app
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<Flow, WordSourceError> {
        self.apply(KeyAction::from(key))
    }

    pub fn apply(&mut self, action: KeyAction) -> Result<Flow, WordSourceError> {
        match action {
            KeyAction::Quit => return Ok(Flow::Quit),
            KeyAction::Reset => {
                self.session.reset()?;
                self.restart_view();
            }
            KeyAction::Retry => {
                self.session.retry();
                self.restart_view();
            }
            KeyAction::Type(c) => {
                if self.input.push(c) {
                    self.session.on_character_typed();
                    self.board
                        .input_changed(self.input.text(), self.session.current_word());
                }
            }
            KeyAction::Backspace => {
                if !self.input.is_disabled() {
                    self.input.pop();
                    self.session.on_backspace();
                    self.board.input_reset();
                }
            }
            KeyAction::Submit => {
                if !self.input.is_disabled() {
                    let typed = self.input.take();
                    if let Some(submission) = self.session.on_word_submit(&typed) {
                        self.board.word_judged(submission.judgement);
                    }
                    self.sync_finished();
                }
            }
            KeyAction::Ignore => {}
        }
        Ok(Flow::Continue)
    }

    fn restart_view(&mut self) {
        debug!("restarting view");
        self.input.clear();
        self.board.session_started(self.session.words());
        self.sync_finished();
    }

    fn sync_finished(&mut self) {
        if let Some(results) = self.session.results() {
            self.input.disable();
            self.board.session_finished(results);
        }
    }
}
