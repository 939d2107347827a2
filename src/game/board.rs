//! The 6×5 letter grid

use crate::core::{Feedback, Mark, WORD_LEN, Word};

/// Number of guesses a player gets per game
pub const MAX_TRIES: usize = 6;

/// One square of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub letter: Option<u8>,
    pub mark: Mark,
}

impl Cell {
    pub const EMPTY: Self = Self {
        letter: None,
        mark: Mark::Unknown,
    };
}

/// Board contents indexed by (try, letter)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; WORD_LEN]; MAX_TRIES],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: [[Cell::EMPTY; WORD_LEN]; MAX_TRIES],
        }
    }
}

impl Board {
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell; WORD_LEN] {
        &self.cells[row]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell; WORD_LEN]> {
        self.cells.iter()
    }

    /// Write a letter and forget any previous mark of that cell
    pub(crate) fn put_letter(&mut self, row: usize, col: usize, letter: u8) {
        self.cells[row][col] = Cell {
            letter: Some(letter),
            mark: Mark::Unknown,
        };
    }

    pub(crate) fn apply_feedback(&mut self, row: usize, feedback: &Feedback) {
        for (cell, &mark) in self.cells[row].iter_mut().zip(feedback.marks()) {
            cell.mark = mark;
        }
    }

    /// The word spelled by a row, if all five cells hold letters
    #[must_use]
    pub fn row_word(&self, row: usize) -> Option<Word> {
        let mut letters = [0u8; WORD_LEN];
        for (slot, cell) in letters.iter_mut().zip(&self.cells[row]) {
            *slot = cell.letter?;
        }
        Word::from_letters(letters).ok()
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }

    /// True if no cell on the board carries a mark
    #[must_use]
    pub fn is_unmarked(&self) -> bool {
        self.cells.iter().flatten().all(|c| c.mark == Mark::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, row: usize, word: &str) {
        for (col, letter) in word.bytes().enumerate() {
            board.put_letter(row, col, letter);
        }
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::default();
        assert!(board.rows().flatten().all(|&c| c == Cell::EMPTY));
        assert!(board.is_unmarked());
    }

    #[test]
    fn row_word_needs_all_letters() {
        let mut board = Board::default();
        fill_row(&mut board, 0, "cran");
        assert_eq!(board.row_word(0), None);

        board.put_letter(0, 4, b'e');
        assert_eq!(board.row_word(0), Some(Word::new("crane").unwrap()));
    }

    #[test]
    fn apply_feedback_marks_row() {
        let mut board = Board::default();
        fill_row(&mut board, 2, "crane");
        board.apply_feedback(2, &Feedback::PERFECT);

        assert!(board.row(2).iter().all(|c| c.mark == Mark::Correct));
        assert!(board.row(1).iter().all(|c| c.mark == Mark::Unknown));
    }

    #[test]
    fn put_letter_resets_mark() {
        let mut board = Board::default();
        fill_row(&mut board, 0, "crane");
        board.apply_feedback(0, &Feedback::PERFECT);
        board.put_letter(0, 0, b's');

        assert_eq!(
            board.cell(0, 0),
            Cell {
                letter: Some(b's'),
                mark: Mark::Unknown
            }
        );
        assert_eq!(board.cell(0, 1).mark, Mark::Correct);
    }

    #[test]
    fn clear_resets_everything() {
        let mut board = Board::default();
        fill_row(&mut board, 0, "crane");
        board.apply_feedback(0, &Feedback::PERFECT);
        board.clear();
        assert_eq!(board, Board::default());
    }
}
