//! Per-letter feedback for a guess
//!
//! Each position of a guess is marked as one of:
//! - `Absent` (letter not in the target, or all copies already matched)
//! - `WrongSpot` (letter in the target at another position)
//! - `Correct` (letter in the correct position)
//!
//! `Unknown` is the mark of a board cell that has not been evaluated yet.

use super::word::{WORD_LEN, Word};

/// Classification of a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Unknown,
    Absent,
    WrongSpot,
    Correct,
}

impl Mark {
    /// Single-character code: `G` correct, `Y` wrong spot, `-` absent, `.` unknown
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::WrongSpot => 'Y',
            Self::Absent => '-',
            Self::Unknown => '.',
        }
    }

    /// Emoji square for sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::WrongSpot => '🟨',
            Self::Absent | Self::Unknown => '⬜',
        }
    }
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    marks: [Mark; WORD_LEN],
}

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self {
        marks: [Mark::Correct; WORD_LEN],
    };

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// Implements Wordle's exact rules, including duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches (greens) and consume those target letters
    /// 2. Second pass: for every other position, take the leftmost unconsumed
    ///    equal target letter (yellow), otherwise the letter is absent
    ///
    /// # Examples
    /// ```
    /// use whydle::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &target);
    ///
    /// assert_eq!(feedback.to_code(), "--G-G");
    /// assert!(!feedback.is_exact());
    /// ```
    #[must_use]
    // Allow: positions index guess, target, marks and consumed together
    #[allow(clippy::needless_range_loop)]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut marks = [Mark::Unknown; WORD_LEN];
        let mut consumed = [false; WORD_LEN];

        // First pass: greens
        for i in 0..WORD_LEN {
            if guess.letter_at(i) == target.letter_at(i) {
                marks[i] = Mark::Correct;
                consumed[i] = true;
            }
        }

        // Second pass: yellows from whatever is left of the target
        for i in 0..WORD_LEN {
            if marks[i] == Mark::Correct {
                continue;
            }

            let letter = guess.letter_at(i);
            let available = (0..WORD_LEN).find(|&j| !consumed[j] && target.letter_at(j) == letter);

            marks[i] = match available {
                Some(j) => {
                    consumed[j] = true;
                    Mark::WrongSpot
                }
                None => Mark::Absent,
            };
        }

        Self { marks }
    }

    /// The five marks, left to right
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LEN] {
        &self.marks
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.marks.iter().all(|&m| m == Mark::Correct)
    }

    /// Count positions with the given mark
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.marks.iter().filter(|&&m| m == mark).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks.iter().map(|m| m.emoji()).collect()
    }

    /// Convert feedback to a compact code like "GY-GY"
    #[must_use]
    pub fn to_code(&self) -> String {
        self.marks.iter().map(|m| m.code()).collect()
    }
}
