use thiserror::Error;

/// Ошибки множества со случайным извлечением.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SetError {
    #[error("Позиция вне диапазона: size={size}, passed={index}")]
    OutOfRange { index: usize, size: usize },

    #[error("Множество пусто")]
    Empty,
}
