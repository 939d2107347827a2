//! The in-memory word list
//!
//! An ordered, immutable sequence of words plus a hash index for membership.

use crate::core::{Word, WordError};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while building a word list
#[derive(Debug)]
pub enum WordListError {
    /// The source could not be opened or read
    Io {
        path: Option<PathBuf>,
        source: io::Error,
    },
    /// A line is not a valid word (strict loading only)
    Malformed {
        line: usize,
        content: String,
        reason: WordError,
    },
    /// No valid words were found
    Empty,
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io {
                path: Some(path),
                source,
            } => write!(f, "could not read word list {}: {source}", path.display()),
            Self::Io { path: None, source } => write!(f, "could not read word list: {source}"),
            Self::Malformed {
                line,
                content,
                reason,
            } => write!(f, "line {line}: {content:?} is not a valid word ({reason})"),
            Self::Empty => write!(f, "word list contains no valid words"),
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Malformed { reason, .. } => Some(reason),
            Self::Empty => None,
        }
    }
}

/// Immutable list of playable words
///
/// Never empty. Duplicate entries are kept, so selection stays uniform over
/// the entries as loaded.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl WordList {
    /// Build a list from already validated words
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }

        let index = words.iter().copied().collect();
        Ok(Self { words, index })
    }

    /// All words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Exact-match membership test
    ///
    /// # Examples
    /// ```
    /// use whydle::core::Word;
    /// use whydle::wordlists::WordList;
    ///
    /// let list = WordList::new(vec![Word::new("crane").unwrap()]).unwrap();
    /// assert!(list.contains(&Word::new("crane").unwrap()));
    /// assert!(!list.contains(&Word::new("slate").unwrap()));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Pick a word uniformly at random
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        self.words[rng.random_range(0..self.words.len())]
    }
}
