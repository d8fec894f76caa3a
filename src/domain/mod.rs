//! Доменная модель: конкретная карта, которой можно параметризовать колоду.

pub mod card;

pub use card::*;
