use std::collections::HashMap;
use std::hash::Hash;

use log::trace;

use crate::infra::{DeterministicRng, RandomSource, SystemRng};
use crate::set::SetError;

/// Множество уникальных значений с O(1) вставкой, проверкой, удалением
/// по значению / позиции и удалением случайного элемента.
///
/// Хранение: плотный `Vec` + карта `значение -> позиция`. Порядок в `dense`
/// смысла не имеет и не сохраняется при удалениях (swap-remove).
///
/// Инвариант: для каждого `x` на позиции `i` в `dense` верно
/// `index_of[x] == i`, размеры совпадают, дубликатов нет.
#[derive(Clone, Debug)]
pub struct RandomRemovalSet<T, R = SystemRng> {
    dense: Vec<T>,
    index_of: HashMap<T, usize>,
    rng: R,
}

impl<T: Eq + Hash + Clone> RandomRemovalSet<T, SystemRng> {
    pub fn new() -> Self {
        Self::with_rng(SystemRng::new())
    }
}

impl<T: Eq + Hash + Clone, R: RandomSource + Default> Default for RandomRemovalSet<T, R> {
    fn default() -> Self {
        Self::with_rng(R::default())
    }
}

impl<T: Eq + Hash + Clone> RandomRemovalSet<T, DeterministicRng> {
    /// Воспроизводимое множество (тесты, реплей).
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(DeterministicRng::seed_from_u64(seed))
    }
}

impl<T: Eq + Hash + Clone, R: RandomSource> RandomRemovalSet<T, R> {
    pub fn with_rng(rng: R) -> Self {
        Self::with_capacity_and_rng(0, rng)
    }

    pub fn with_capacity_and_rng(capacity: usize, rng: R) -> Self {
        Self {
            dense: Vec::with_capacity(capacity),
            index_of: HashMap::with_capacity(capacity),
            rng,
        }
    }

    pub fn len(&self) -> usize {
        self.dense.len()
    }

    /// Синоним [`len`](Self::len).
    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    /// `false`, если значение уже было в множестве (ничего не меняется).
    pub fn insert(&mut self, x: T) -> bool {
        if self.index_of.contains_key(&x) {
            return false;
        }
        self.index_of.insert(x.clone(), self.dense.len());
        self.dense.push(x);
        true
    }

    /// 1, если значение есть, иначе 0.
    pub fn count(&self, x: &T) -> usize {
        usize::from(self.contains(x))
    }

    pub fn contains(&self, x: &T) -> bool {
        self.index_of.contains_key(x)
    }

    /// Текущая позиция значения в плотном хранилище.
    pub fn position(&self, x: &T) -> Option<usize> {
        self.index_of.get(x).copied()
    }

    pub fn get(&self, n: usize) -> Option<&T> {
        self.dense.get(n)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.dense
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.dense.iter()
    }

    pub fn clear(&mut self) {
        self.dense.clear();
        self.index_of.clear();
    }

    /// Удалить элемент на позиции `n` через swap-remove.
    ///
    /// Последний элемент переезжает на место удалённого. Допустимы только
    /// позиции `[0, size())`, в том числе `n == size()` — ошибка.
    pub fn erase_by_position(&mut self, n: usize) -> Result<T, SetError> {
        let size = self.dense.len();
        if n >= size {
            return Err(SetError::OutOfRange { index: n, size });
        }

        let removed = self.dense.swap_remove(n);
        self.index_of.remove(&removed);
        if let Some(moved) = self.dense.get(n) {
            if let Some(slot) = self.index_of.get_mut(moved) {
                *slot = n;
            }
        }
        Ok(removed)
    }

    /// 1, если значение было удалено, иначе 0.
    pub fn erase(&mut self, x: &T) -> usize {
        let Some(n) = self.position(x) else {
            return 0;
        };
        match self.erase_by_position(n) {
            Ok(_) => 1,
            Err(e) => {
                // позиция взята из index_of, значит карта рассинхронизирована
                debug_assert!(false, "RandomRemovalSet::erase: {e}");
                0
            }
        }
    }

    /// Удалить и вернуть равновероятно выбранный элемент.
    ///
    /// # Panics
    /// На пустом множестве: это ошибка вызывающего кода.
    pub fn pop_random(&mut self) -> T {
        match self.try_pop_random() {
            Ok(x) => x,
            Err(e) => panic!("RandomRemovalSet::pop_random: {e}"),
        }
    }

    pub fn try_pop_random(&mut self) -> Result<T, SetError> {
        if self.dense.is_empty() {
            return Err(SetError::Empty);
        }
        let n = self.rng.index(self.dense.len());
        trace!("RandomRemovalSet: pop_random позиция {n} из {}", self.dense.len());
        self.erase_by_position(n)
    }
}

impl<T: Eq + Hash + Clone, R: RandomSource> Extend<T> for RandomRemovalSet<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.insert(x);
        }
    }
}

impl<T: Eq + Hash + Clone, R: RandomSource + Default> FromIterator<T> for RandomRemovalSet<T, R> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<'a, T, R> IntoIterator for &'a RandomRemovalSet<T, R> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.dense.iter()
    }
}
