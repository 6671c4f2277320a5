use include_dir::{include_dir, Dir};
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::fs;
use std::io;
use std::ops::Index;
use std::path::{Path, PathBuf};

use crate::error::WordSourceError;

static LANG_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/lang");

/// Name of the word list bundled into the binary
pub const BUNDLED_CORPUS: &str = "words.txt";

/// Words shown for one session, in display order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordList(Vec<String>);

impl WordList {
    pub fn new(words: Vec<String>) -> Self {
        Self(words)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&str> {
        self.0.get(idx).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Index<usize> for WordList {
    type Output = str;

    fn index(&self, idx: usize) -> &str {
        &self.0[idx]
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

/// Supplies a shuffled, fixed-size sample of words
pub trait WordSource {
    /// Draw `n` distinct corpus entries in random order.
    fn sample(&self, n: usize) -> Result<WordList, WordSourceError>;
}

/// Split a newline-delimited corpus into words, skipping blank lines.
pub fn parse_corpus(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Shuffle the whole corpus and keep the first `n` entries.
pub fn sample_from<R: Rng + ?Sized>(
    mut corpus: Vec<String>,
    n: usize,
    rng: &mut R,
) -> Result<WordList, WordSourceError> {
    if n > corpus.len() {
        return Err(WordSourceError::InsufficientWords {
            requested: n,
            available: corpus.len(),
        });
    }

    corpus.shuffle(rng);
    corpus.truncate(n);
    Ok(WordList(corpus))
}

/// Newline-delimited word file read from disk on every sample
#[derive(Debug, Clone)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileWordSource {
    fn sample(&self, n: usize) -> Result<WordList, WordSourceError> {
        let text = fs::read_to_string(&self.path)
            .map_err(|e| WordSourceError::unavailable(&self.path, e))?;
        sample_from(parse_corpus(&text), n, &mut rand::thread_rng())
    }
}

/// Word list compiled into the binary
#[derive(Debug, Clone)]
pub struct EmbeddedWordSource {
    name: String,
}

impl EmbeddedWordSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn contents(&self) -> Result<&'static str, WordSourceError> {
        let file = LANG_DIR.get_file(&self.name).ok_or_else(|| {
            WordSourceError::unavailable(
                &self.name,
                io::Error::new(io::ErrorKind::NotFound, "not bundled with this build"),
            )
        })?;

        file.contents_utf8().ok_or_else(|| {
            WordSourceError::unavailable(
                &self.name,
                io::Error::new(io::ErrorKind::InvalidData, "not valid utf-8"),
            )
        })
    }
}

impl Default for EmbeddedWordSource {
    fn default() -> Self {
        Self::new(BUNDLED_CORPUS)
    }
}

impl WordSource for EmbeddedWordSource {
    fn sample(&self, n: usize) -> Result<WordList, WordSourceError> {
        let text = self.contents()?;
        sample_from(parse_corpus(text), n, &mut rand::thread_rng())
    }
}

/// In-memory corpus, used for headless sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryWordSource {
    words: Vec<String>,
}

impl MemoryWordSource {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl WordSource for MemoryWordSource {
    fn sample(&self, n: usize) -> Result<WordList, WordSourceError> {
        sample_from(self.words.clone(), n, &mut rand::thread_rng())
    }
}

impl<W: WordSource + ?Sized> WordSource for Box<W> {
    fn sample(&self, n: usize) -> Result<WordList, WordSourceError> {
        (**self).sample(n)
    }
}
