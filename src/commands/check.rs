//! Feedback check command
//!
//! Scores one guess against a chosen target without starting a game.

use crate::core::{Feedback, Word};
use crate::wordlists::WordList;

/// Result of checking a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns an error if:
/// - Either word is invalid (not 5 letters or contains non-letters)
/// - The guess is not in the word list
pub fn check_guess(guess: &str, target: &str, words: &WordList) -> Result<CheckResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let target = Word::new(target).map_err(|e| format!("Invalid target: {e}"))?;

    if !words.contains(&guess) {
        return Err(format!("Word '{guess}' not in word list"));
    }

    Ok(CheckResult {
        guess,
        target,
        feedback: Feedback::evaluate(&guess, &target),
    })
}
