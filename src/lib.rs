//! Whydle
//!
//! A terminal Wordle clone: guess the hidden five-letter word in six tries.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use whydle::game::{Game, Key, Status};
//! use whydle::wordlists::loader::load_embedded;
//!
//! let words = load_embedded().unwrap();
//! let mut game = Game::new(&words, StdRng::seed_from_u64(7));
//!
//! for c in game.target().to_string().chars() {
//!     game.handle_key(Key::from_char(c).unwrap());
//! }
//! game.handle_key(Key::Submit);
//! assert_eq!(game.status(), Status::Won);
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
