//! Interactive terminal interface
//!
//! The presentation side of the game: a [`Surface`] contract, a ratatui
//! implementation of it, and the crossterm event loop.

pub mod app;
pub mod rendering;
pub mod surface;

pub use app::{App, map_key, run_tui};
pub use surface::{Backdrop, MessageKind, Surface, present};
