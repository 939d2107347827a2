//! Word lists for Whydle
//!
//! Provides the embedded answer list, loaders for custom lists, and the
//! [`WordList`] used for guess validation and target selection.

mod embedded;
mod list;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT};
pub use list::{WordList, WordListError};
