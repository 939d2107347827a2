//! Presentation contract
//!
//! The game never draws anything itself. Each frame [`present`] walks the
//! game state and issues calls on a [`Surface`]; the terminal UI implements
//! the trait with ratatui, tests implement it with a recorder.

use crate::core::Mark;
use crate::game::{Cell, Cursor, Event, Game, MAX_TRIES, Status};
use rand::Rng;

/// Whole-frame background
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Backdrop {
    Neutral,
    Won,
    Lost,
    /// Invalid-word flash, intensity in `0.0..=1.0`
    Flash(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

/// A rendering target for one frame
pub trait Surface {
    /// Start a frame
    fn clear(&mut self, backdrop: Backdrop);

    /// Draw the cell at (try, letter)
    fn draw_cell(&mut self, row: usize, col: usize, cell: Cell);

    fn draw_message(&mut self, text: &str, kind: MessageKind);

    /// Finish the frame
    fn present_frame(&mut self);
}

/// Render the full game state onto `surface`
pub fn present<R: Rng, S: Surface + ?Sized>(game: &Game<'_, R>, surface: &mut S) {
    surface.clear(backdrop(game));

    let cursor = game.cursor();
    for (row, cells) in game.board().rows().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            surface.draw_cell(row, col, visible_cell(cell, row, col, cursor));
        }
    }

    let (text, kind) = message(game);
    surface.draw_message(&text, kind);
    surface.present_frame();
}

fn backdrop<R: Rng>(game: &Game<'_, R>) -> Backdrop {
    match game.status() {
        Status::Won => Backdrop::Won,
        Status::Lost => Backdrop::Lost,
        Status::InProgress if game.flash().is_active() => {
            Backdrop::Flash(game.flash().intensity())
        }
        Status::InProgress => Backdrop::Neutral,
    }
}

/// Submitted rows show their marks, the active row shows letters up to the
/// cursor, everything else is blank.
fn visible_cell(cell: Cell, row: usize, col: usize, cursor: Cursor) -> Cell {
    if row < cursor.try_index {
        cell
    } else if row == cursor.try_index && col < cursor.letter_index {
        Cell {
            letter: cell.letter,
            mark: Mark::Unknown,
        }
    } else {
        Cell::EMPTY
    }
}

fn message<R: Rng>(game: &Game<'_, R>) -> (String, MessageKind) {
    match game.status() {
        Status::Won => (
            format!(
                "Solved in {}/{MAX_TRIES}! Press Enter for a new word",
                game.cursor().try_index
            ),
            MessageKind::Success,
        ),
        Status::Lost => (
            format!(
                "The word was {}. Press Enter for a new word",
                game.target().to_string().to_uppercase()
            ),
            MessageKind::Error,
        ),
        Status::InProgress if game.flash().is_active() => {
            let text = match game.last_event() {
                Event::NotInWordList(word) => {
                    format!("{} is not in the word list", word.to_string().to_uppercase())
                }
                _ => "Not in the word list".to_string(),
            };
            (text, MessageKind::Error)
        }
        Status::InProgress => (
            format!(
                "Try {}/{MAX_TRIES} | Enter: submit | Backspace: erase | Esc: quit",
                game.cursor().try_index + 1
            ),
            MessageKind::Info,
        ),
    }
}
