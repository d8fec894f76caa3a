//! Контейнеры для моделирования случайных карточных механик.
//!
//! - `ShuffleDeck` – колода фиксированного размера, сдаётся порциями до
//!   следующего перемешивания;
//! - `RandomRemovalSet` – множество уникальных значений с O(1) удалением
//!   по значению, по позиции и случайного элемента.
//!
//! Оба контейнера владеют собственным RNG (см. `infra`), потокобезопасности
//! нет: один экземпляр – один владелец.

pub mod deck;
pub mod domain;
pub mod infra;
pub mod set;

pub use deck::{DeckError, DeckIndex, ShuffleDeck};
pub use set::{RandomRemovalSet, SetError};
