//! Множество с O(1) удалением случайного элемента (плотный массив + карта позиций).

pub mod errors;
pub mod random_removal_set;

pub use errors::SetError;
pub use random_removal_set::RandomRemovalSet;
