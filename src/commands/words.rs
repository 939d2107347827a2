//! Word list inspection command

use crate::wordlists::WordList;
use crate::wordlists::loader::{LoadReport, RejectedLine};
use rustc_hash::FxHashSet;

/// Summary of a loaded word list
pub struct WordListSummary {
    pub source: String,
    pub total: usize,
    pub unique: usize,
    pub blank_lines: usize,
    pub rejected: Vec<RejectedLine>,
}

#[must_use]
pub fn summarize_word_list(source: &str, words: &WordList, report: &LoadReport) -> WordListSummary {
    let unique = words.words().iter().collect::<FxHashSet<_>>().len();

    WordListSummary {
        source: source.to_string(),
        total: words.len(),
        unique,
        blank_lines: report.blank,
        rejected: report.rejected.clone(),
    }
}
