//! Command implementations

pub mod check;
pub mod words;

pub use check::{CheckResult, check_guess};
pub use words::{WordListSummary, summarize_word_list};
