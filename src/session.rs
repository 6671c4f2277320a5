/// Number of words drawn per session unless configured otherwise
pub const DEFAULT_NUMBER_OF_WORDS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub number_of_words: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            number_of_words: DEFAULT_NUMBER_OF_WORDS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum SessionPhase {
    #[strum(to_string = "ready")]
    NotStarted,
    #[strum(to_string = "typing")]
    Running,
    #[strum(to_string = "finished")]
    Finished,
}

/// Final metrics for a completed session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionResults {
    /// Percentage of words typed exactly right
    pub accuracy: f64,
    pub wpm: f64,
    /// Minutes the wpm was computed over, after clamping
    pub elapsed_minutes: f64,
}

/// Progress of one session. Only `TypingSession` mutates it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub current_index: usize,
    pub correct_count: usize,
    pub total_characters_typed: usize,
    pub timer_started: bool,
    pub start_time_nanos: Option<u64>,
    pub end_time_nanos: Option<u64>,
    pub finished: bool,
    pub results: Option<SessionResults>,
}

impl SessionState {
    pub fn phase(&self) -> SessionPhase {
        if self.finished {
            SessionPhase::Finished
        } else if self.timer_started {
            SessionPhase::Running
        } else {
            SessionPhase::NotStarted
        }
    }

    /// Nanoseconds between the first keystroke and completion, zero if either is missing.
    pub fn elapsed_nanos(&self) -> u64 {
        match (self.start_time_nanos, self.end_time_nanos) {
            (Some(start), Some(end)) => end.saturating_sub(start),
            _ => 0,
        }
    }
}
