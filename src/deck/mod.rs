//! Перемешиваемая колода фиксированного размера со сдачей порциями.

pub mod errors;
pub mod shuffle_deck;

pub use errors::DeckError;
pub use shuffle_deck::{DeckIndex, ShuffleDeck};
