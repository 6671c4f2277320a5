use crate::session::{SessionResults, SessionState};

/// Characters per standard word
pub const CHARS_PER_WORD: f64 = 5.0;

const NANOS_PER_MINUTE: f64 = 60.0 * 1_000_000_000.0;

pub fn accuracy(correct: usize, word_count: usize) -> f64 {
    if word_count == 0 {
        0.0
    } else {
        (correct as f64 / word_count as f64) * 100.0
    }
}

/// Elapsed minutes, replaced by a whole minute when the span is empty or degenerate.
pub fn elapsed_minutes(elapsed_nanos: u64) -> f64 {
    let minutes = elapsed_nanos as f64 / NANOS_PER_MINUTE;
    if minutes <= 0.0 {
        1.0
    } else {
        minutes
    }
}

pub fn wpm(total_characters: usize, minutes: f64) -> f64 {
    (total_characters as f64 / CHARS_PER_WORD) / minutes
}

pub fn compute_results(state: &SessionState, word_count: usize) -> SessionResults {
    let minutes = elapsed_minutes(state.elapsed_nanos());

    SessionResults {
        accuracy: accuracy(state.correct_count, word_count),
        wpm: wpm(state.total_characters_typed, minutes),
        elapsed_minutes: minutes,
    }
}
