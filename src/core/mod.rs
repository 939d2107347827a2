//! Core domain types for Whydle
//!
//! Words and the feedback computed when a guess is played against a target.
//! Everything here is pure and has no external dependencies.

mod feedback;
mod word;

pub use feedback::{Feedback, Mark};
pub use word::{WORD_LEN, Word, WordError};
