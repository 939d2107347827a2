//! Game state machine
//!
//! Owns the target word, board, cursors, status, flash signal and session
//! statistics. Input arrives as [`Key`] events; the presentation layer reads
//! the resulting state every frame.

mod board;
mod flash;
mod stats;

pub use board::{Board, Cell, MAX_TRIES};
pub use flash::{FLASH_DECAY_RATE, FLASH_DURATION, Flash};
pub use stats::Statistics;

use crate::core::{Feedback, WORD_LEN, Word};
use crate::wordlists::WordList;
use rand::Rng;
use std::time::Duration;

/// Discrete input understood by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A typed character; anything outside `a..=z` / `A..=Z` is ignored
    Letter(u8),
    Backspace,
    Submit,
    Quit,
}

impl Key {
    /// Map a typed character to a letter key
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then(|| Self::Letter(c.to_ascii_lowercase() as u8))
    }
}

/// What the caller should do after handling a key
/// Whether the caller should keep running after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Quit,
}

/// Where the current round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    /// True once the round is won or lost
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Outcome of the most recent key, used for the message line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Started,
    LetterEntered(u8),
    LetterRemoved,
    NotInWordList(Word),
    Guessed(Feedback),
    Won { tries: usize },
    Lost { target: Word },
    Restarted,
    Ignored,
}

/// Try and letter cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Active row, `MAX_TRIES` once every try is used
    pub try_index: usize,
    /// Next column to fill, `WORD_LEN` once the row is full
    pub letter_index: usize,
}

/// One session of rounds over a shared word list
///
/// Owns the board, cursor, flash and statistics, and draws each new target
/// from `words` with its own RNG.
pub struct Game<'a, R: Rng> {
    words: &'a WordList,
    rng: R,
    target: Word,
    board: Board,
    cursor: Cursor,
    status: Status,
    flash: Flash,
    stats: Statistics,
    last_event: Event,
}

impl<'a, R: Rng> Game<'a, R> {
    /// Start a game with a target drawn from `words`
    pub fn new(words: &'a WordList, mut rng: R) -> Self {
        let target = words.pick_random(&mut rng);
        log::debug!("new game started ({} words)", words.len());

        Self {
            words,
            rng,
            target,
            board: Board::default(),
            cursor: Cursor::default(),
            status: Status::InProgress,
            flash: Flash::default(),
            stats: Statistics::default(),
            last_event: Event::Started,
        }
    }

    /// Process one key press
    pub fn handle_key(&mut self, key: Key) -> Signal {
        self.last_event = match key {
            Key::Quit => return Signal::Quit,
            Key::Letter(letter) => self.enter_letter(letter),
            Key::Backspace => self.remove_letter(),
            Key::Submit if self.status.is_terminal() => self.restart(),
            Key::Submit => self.submit(),
        };
        Signal::Continue
    }

    /// Advance time-dependent state by the real time since the last frame
    pub fn tick(&mut self, elapsed: Duration) {
        self.flash.tick(elapsed);
    }

    fn enter_letter(&mut self, letter: u8) -> Event {
        let letter = letter.to_ascii_lowercase();
        if self.status.is_terminal()
            || !letter.is_ascii_lowercase()
            || self.cursor.letter_index >= WORD_LEN
        {
            return Event::Ignored;
        }

        self.board
            .put_letter(self.cursor.try_index, self.cursor.letter_index, letter);
        self.cursor.letter_index += 1;
        Event::LetterEntered(letter)
    }

    fn remove_letter(&mut self) -> Event {
        if self.status.is_terminal() || self.cursor.letter_index == 0 {
            return Event::Ignored;
        }

        // The letter stays in the cell until it is overwritten
        self.cursor.letter_index -= 1;
        Event::LetterRemoved
    }

    fn submit(&mut self) -> Event {
        if self.cursor.letter_index < WORD_LEN {
            return Event::Ignored;
        }

        let row = self.cursor.try_index;
        let Some(guess) = self.board.row_word(row) else {
            return Event::Ignored;
        };

        if !self.words.contains(&guess) {
            log::debug!("rejected guess {guess}: not in word list");
            self.flash.trigger();
            return Event::NotInWordList(guess);
        }

        let feedback = Feedback::evaluate(&guess, &self.target);
        self.board.apply_feedback(row, &feedback);
        self.cursor.try_index += 1;
        self.cursor.letter_index = 0;
        log::debug!("try {}: {guess} {}", self.cursor.try_index, feedback.to_code());

        if feedback.is_exact() {
            self.status = Status::Won;
            self.stats.record_win(self.cursor.try_index);
            log::info!("won in {} tries", self.cursor.try_index);
            Event::Won {
                tries: self.cursor.try_index,
            }
        } else if self.cursor.try_index >= MAX_TRIES {
            self.status = Status::Lost;
            self.stats.record_loss();
            log::info!("lost, target was {}", self.target);
            Event::Lost {
                target: self.target,
            }
        } else {
            Event::Guessed(feedback)
        }
    }

    /// Reset in place with a fresh target
    fn restart(&mut self) -> Event {
        self.target = self.words.pick_random(&mut self.rng);
        self.board.clear();
        self.cursor = Cursor::default();
        self.status = Status::InProgress;
        self.flash.clear();
        log::debug!("game restarted");
        Event::Restarted
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// The hidden word; the presentation layer only shows it once the game is over
    #[must_use]
    pub fn target(&self) -> Word {
        self.target
    }

    /// The target if the game has ended
    #[must_use]
    pub fn revealed_target(&self) -> Option<Word> {
        self.status.is_terminal().then_some(self.target)
    }

    #[must_use]
    pub fn flash(&self) -> &Flash {
        &self.flash
    }

    #[must_use]
    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub fn last_event(&self) -> Event {
        self.last_event
    }

    #[must_use]
    pub fn words(&self) -> &WordList {
        self.words
    }
}
