//! Word list loading utilities
//!
//! Loads word lists from files, readers, strings, or the embedded constant.
//! Lines are trimmed and lowercased; blank lines are skipped. Any other line
//! that is not exactly five ASCII letters is rejected: skipped and reported in
//! lenient mode, fatal in strict mode.

use super::list::{WordList, WordListError};
use crate::core::{Word, WordError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// How malformed lines are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Skip malformed lines and record them in the report
    #[default]
    Lenient,
    /// Fail on the first malformed line
    Strict,
}

/// A line that could not be turned into a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based line number
    pub line: usize,
    pub content: String,
    pub reason: WordError,
}

/// Summary of a load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub accepted: usize,
    pub blank: usize,
    pub rejected: Vec<RejectedLine>,
}

impl LoadReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Load words from any buffered reader
///
/// # Errors
///
/// Returns `WordListError::Io` if reading fails, `WordListError::Malformed` for
/// the first bad line in strict mode, and `WordListError::Empty` if nothing
/// valid was read.
///
/// # Examples
/// ```
/// use whydle::wordlists::loader::{LoadMode, load_from_reader};
///
/// let data = "crane\nslate\n\nabc\n";
/// let (list, report) = load_from_reader(data.as_bytes(), LoadMode::Lenient).unwrap();
/// assert_eq!(list.len(), 2);
/// assert_eq!(report.rejected.len(), 1);
/// ```
pub fn load_from_reader<R: BufRead>(
    reader: R,
    mode: LoadMode,
) -> Result<(WordList, LoadReport), WordListError> {
    let mut words = Vec::new();
    let mut report = LoadReport::default();

    for (i, line) in reader.split(b'\n').enumerate() {
        let line = line.map_err(|source| WordListError::Io { path: None, source })?;
        let text = String::from_utf8_lossy(&line);
        let trimmed = text.trim();

        if trimmed.is_empty() {
            report.blank += 1;
            continue;
        }

        // Replacement characters from undecodable bytes fail as non-ASCII
        match Word::new(trimmed) {
            Ok(word) => words.push(word),
            Err(reason) => {
                let rejected = RejectedLine {
                    line: i + 1,
                    content: trimmed.to_string(),
                    reason,
                };

                if mode == LoadMode::Strict {
                    return Err(WordListError::Malformed {
                        line: rejected.line,
                        content: rejected.content,
                        reason: rejected.reason,
                    });
                }

                log::warn!(
                    "skipping word list line {}: {:?} ({})",
                    rejected.line,
                    rejected.content,
                    rejected.reason
                );
                report.rejected.push(rejected);
            }
        }
    }

    report.accepted = words.len();
    let list = WordList::new(words)?;
    log::info!(
        "loaded {} words ({} rejected, {} blank)",
        report.accepted,
        report.rejected.len(),
        report.blank
    );

    Ok((list, report))
}

/// Load words from an in-memory string
///
/// # Errors
///
/// Same as [`load_from_reader`], minus I/O failures.
pub fn load_from_str(data: &str, mode: LoadMode) -> Result<(WordList, LoadReport), WordListError> {
    load_from_reader(data.as_bytes(), mode)
}

/// Load words from a file
///
/// # Errors
///
/// Returns `WordListError::Io` (carrying the path) if the file cannot be
/// opened or read, plus everything [`load_from_reader`] can return.
///
/// # Examples
/// ```no_run
/// use whydle::wordlists::loader::{LoadMode, load_from_file};
///
/// let (words, _) = load_from_file("data/answers.txt", LoadMode::Lenient).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    mode: LoadMode,
) -> Result<(WordList, LoadReport), WordListError> {
    let path = path.as_ref();
    let attach_path = |source: std::io::Error| WordListError::Io {
        path: Some(path.to_path_buf()),
        source,
    };

    let file = File::open(path).map_err(attach_path)?;
    log::debug!("reading word list from {}", path.display());

    load_from_reader(BufReader::new(file), mode).map_err(|err| match err {
        WordListError::Io { path: None, source } => attach_path(source),
        other => other,
    })
}

/// Build the word list compiled into the binary
///
/// # Errors
///
/// Only fails if the embedded list is empty, which the build script prevents
/// for the shipped data.
pub fn load_embedded() -> Result<WordList, WordListError> {
    WordList::new(words_from_slice(super::ANSWERS))
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use whydle::wordlists::loader::words_from_slice;
/// use whydle::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
