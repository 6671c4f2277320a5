use std::io::Write;
use std::time::Duration;

use approx::assert_relative_eq;
use assert_matches::assert_matches;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use typetest::clock::ManualClock;
use typetest::words::{FileWordSource, MemoryWordSource};
use typetest::{SessionConfig, SessionPhase, SessionState, TypingSession, WordSourceError};

fn corpus_file(words: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for w in words {
        writeln!(file, "{w}").unwrap();
    }
    file
}

#[test]
fn file_backed_session_scores_every_word() {
    let file = corpus_file(&["alpha", "beta", "gamma", "delta", "epsilon"]);
    let clock = ManualClock::new();
    let mut session = TypingSession::new(
        FileWordSource::new(file.path()),
        clock.clone(),
        SessionConfig { number_of_words: 5 },
    )
    .unwrap();

    let words: Vec<String> = session.words().iter().map(str::to_string).collect();
    for word in &words {
        for _ in word.chars() {
            session.on_character_typed();
            clock.advance(Duration::from_millis(200));
        }
        session.on_word_submit(word);
    }

    let results = session.results().copied().unwrap();
    assert_eq!(results.accuracy, 100.0);

    let typed: usize = words.iter().map(|w| w.chars().count()).sum();
    assert_eq!(session.state().total_characters_typed, typed * 2);
    // 200ms per keystroke, timer started on the first one
    let minutes = typed as f64 * 0.2 / 60.0;
    assert_relative_eq!(results.elapsed_minutes, minutes, epsilon = 1e-9);
    assert_relative_eq!(results.wpm, (typed as f64 * 2.0 / 5.0) / minutes, epsilon = 1e-6);
}

#[test]
fn default_size_needs_fifty_words() {
    let file = corpus_file(&["only", "three", "words"]);
    let err = TypingSession::new(
        FileWordSource::new(file.path()),
        ManualClock::new(),
        SessionConfig::default(),
    )
    .unwrap_err();

    assert_matches!(
        err,
        WordSourceError::InsufficientWords {
            requested: 50,
            available: 3
        }
    );
}

#[test]
fn reset_fails_when_corpus_disappears() {
    let file = corpus_file(&["one", "two"]);
    let path = file.path().to_path_buf();
    let mut session = TypingSession::new(
        FileWordSource::new(&path),
        ManualClock::new(),
        SessionConfig { number_of_words: 2 },
    )
    .unwrap();
    drop(file);

    assert_matches!(
        session.reset(),
        Err(WordSourceError::SourceUnavailable { .. })
    );
    assert_eq!(session.word_count(), 2);
}

#[test]
fn random_operation_sequences_keep_invariants() {
    let words = ["cat", "dog", "fish", "bird", "horse", "apple", "bread", "cheese"];
    let mut rng = StdRng::seed_from_u64(0x7e57);

    for _ in 0..50 {
        let mut session = TypingSession::new(
            MemoryWordSource::new(words),
            ManualClock::new(),
            SessionConfig {
                number_of_words: words.len(),
            },
        )
        .unwrap();

        let mut last_index = 0;
        for _ in 0..40 {
            match rng.gen_range(0..4) {
                0 => session.on_character_typed(),
                1 => session.on_backspace(),
                2 => {
                    let expected = session.current_word().map(str::to_string);
                    let correct_before = session.state().correct_count;
                    let typed = match (&expected, rng.gen_bool(0.5)) {
                        (Some(word), true) => word.clone(),
                        _ => "zzz".to_string(),
                    };
                    session.on_word_submit(&typed);
                    if expected.as_deref() == Some(typed.as_str()) {
                        assert_eq!(session.state().correct_count, correct_before + 1);
                    } else {
                        assert_eq!(session.state().correct_count, correct_before);
                    }
                }
                _ => {
                    if rng.gen_bool(0.1) {
                        session.reset().unwrap();
                        assert_eq!(session.state(), &SessionState::default());
                        last_index = 0;
                    }
                }
            }

            let state = session.state();
            assert!(state.current_index >= last_index);
            assert!(state.correct_count <= state.current_index);
            assert!(state.current_index <= words.len());
            assert_eq!(state.finished, state.current_index == words.len());
            assert_eq!(session.phase() == SessionPhase::Finished, state.finished);
            last_index = state.current_index;
        }
    }
}
