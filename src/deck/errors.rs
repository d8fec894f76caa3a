use thiserror::Error;

/// Ошибки колоды.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("Нельзя сдать {requested} карт: в колоде осталось {remaining}")]
    NotEnoughCards { requested: usize, remaining: usize },
}
