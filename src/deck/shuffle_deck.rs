use log::trace;

use crate::deck::DeckError;
use crate::infra::{DeterministicRng, RandomSource, SystemRng};

/// Каноническое отображение позиции в свежей колоде на карту.
///
/// Для индексных типов это просто `0..N`; богатые карты (см.
/// [`crate::domain::Card`]) задают своё отображение.
pub trait DeckIndex: Sized {
    fn from_index(index: usize) -> Self;
}

macro_rules! impl_deck_index {
    ($($t:ty),*) => {
        $(
            impl DeckIndex for $t {
                /// # Panics
                /// Если индекс не помещается в тип карты.
                fn from_index(index: usize) -> Self {
                    match <$t>::try_from(index) {
                        Ok(v) => v,
                        Err(_) => panic!(
                            "DeckIndex: индекс {index} не помещается в {}",
                            stringify!($t)
                        ),
                    }
                }
            }
        )*
    };
}

impl_deck_index!(u8, u16, u32, u64, usize);

/// Колода фиксированного размера `N` с курсором сдачи.
///
/// `cards[..cursor]` уже сданы и не сдаются повторно до следующего
/// `shuffle()`; `cards[cursor..]` доступны.
#[derive(Clone, Debug)]
pub struct ShuffleDeck<C, const N: usize, R = SystemRng> {
    cards: [C; N],
    cursor: usize,
    rng: R,
}

impl<C: DeckIndex, const N: usize> ShuffleDeck<C, N, SystemRng> {
    /// Колода с RNG, засеянным из энтропии ОС.
    pub fn new() -> Self {
        Self::with_rng(SystemRng::new())
    }
}

impl<C: DeckIndex, const N: usize> Default for ShuffleDeck<C, N, SystemRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: DeckIndex, const N: usize> ShuffleDeck<C, N, DeterministicRng> {
    /// Воспроизводимая колода (тесты, реплей).
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(DeterministicRng::seed_from_u64(seed))
    }
}

impl<C: DeckIndex, const N: usize, R: RandomSource> ShuffleDeck<C, N, R> {
    /// Заполняет колоду каноническими картами `0..N` и сразу перемешивает.
    pub fn with_rng(rng: R) -> Self {
        let mut deck = Self {
            cards: std::array::from_fn(C::from_index),
            cursor: 0,
            rng,
        };
        deck.shuffle();
        deck
    }
}

impl<C, const N: usize, R: RandomSource> ShuffleDeck<C, N, R> {
    /// Перемешать всю колоду (включая сданные карты) и сбросить курсор.
    ///
    /// Ранее сданные срезы после этого смысла не имеют: они указывают
    /// в ту же память.
    pub fn shuffle(&mut self) {
        self.rng.shuffle(&mut self.cards);
        trace!("ShuffleDeck<{}>: перемешана, было сдано {}", N, self.cursor);
        self.cursor = 0;
    }

    /// Можно ли сдать ещё `n` карт.
    pub fn is_dealable(&self, n: usize) -> bool {
        // без переполнения при огромном n
        n <= N - self.cursor
    }

    /// Сдать `K` подряд идущих карт и сдвинуть курсор.
    ///
    /// # Panics
    /// Если `!self.is_dealable(K)`: вызывающий код потерял учёт колоды.
    pub fn deal<const K: usize>(&mut self) -> &mut [C; K] {
        if !self.is_dealable(K) {
            panic!(
                "{}",
                DeckError::NotEnoughCards {
                    requested: K,
                    remaining: self.remaining(),
                }
            );
        }
        self.take::<K>()
    }

    /// Как [`deal`](Self::deal), но без паники. При ошибке колода не меняется.
    pub fn try_deal<const K: usize>(&mut self) -> Result<&mut [C; K], DeckError> {
        if !self.is_dealable(K) {
            return Err(DeckError::NotEnoughCards {
                requested: K,
                remaining: self.remaining(),
            });
        }
        Ok(self.take::<K>())
    }

    fn take<const K: usize>(&mut self) -> &mut [C; K] {
        let start = self.cursor;
        self.cursor += K;
        trace!("ShuffleDeck<{}>: сдано {} с позиции {start}", N, K);
        let (chunk, _) = self.cards[start..].split_at_mut(K);
        match <&mut [C; K]>::try_from(chunk) {
            Ok(chunk) => chunk,
            // split_at_mut уже вернул ровно K элементов
            Err(_) => unreachable!(),
        }
    }

    /// Вся колода, включая сданные позиции. Для интроспекции и тестов.
    pub fn deck(&self) -> &[C; N] {
        &self.cards
    }

    pub fn capacity(&self) -> usize {
        N
    }

    /// Индекс следующей несданной карты.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn remaining(&self) -> usize {
        N - self.cursor
    }

    pub fn dealt(&self) -> &[C] {
        &self.cards[..self.cursor]
    }

    pub fn undealt(&self) -> &[C] {
        &self.cards[self.cursor..]
    }
}
