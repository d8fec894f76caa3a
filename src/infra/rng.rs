use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// RNG интерфейс для контейнеров.
///
/// Каждый экземпляр колоды / множества владеет своим генератором,
/// никакого глобального состояния.
pub trait RandomSource {
    /// Равномерная случайная перестановка среза.
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Равномерное целое из `[0, bound)`.
    ///
    /// `bound == 0` — ошибка вызывающего кода (panic).
    fn index(&mut self, bound: usize) -> usize;
}

/// Боевой RNG: засевается один раз из энтропии ОС при создании.
///
/// `clone()` засевает новый генератор, состояние не копируется.
#[derive(Debug)]
pub struct SystemRng {
    inner: StdRng,
}

impl SystemRng {
    pub fn new() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }
}

impl Clone for SystemRng {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl Default for SystemRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    fn index(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "RandomSource::index: пустой диапазон");
        self.inner.gen_range(0..bound)
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одни и те же раздачи при одинаковом seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            inner: StdRng::from_seed(seed),
        }
    }

    /// Удобный вариант для тестов.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    fn index(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "RandomSource::index: пустой диапазон");
        self.inner.gen_range(0..bound)
    }
}
