use std::io;
use std::path::PathBuf;

/// Failures while drawing a word list for a session
#[derive(Debug, thiserror::Error)]
pub enum WordSourceError {
    #[error("word corpus {} is unavailable: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word corpus has {available} words, {requested} requested")]
    InsufficientWords { requested: usize, available: usize },
}

impl WordSourceError {
    pub fn unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }
}
