//! RngSeed — seed для RNG контейнеров.
//!
//! Позволяет:
//!   - хранить базовый seed (u64 или [u8;32])
//!   - делать детерминированное hash-reseeding:
//!         new = H(prefix || old || domain || index)
//!   - создавать DeterministicRng из seed
//!
//! Так из одного мастер-seed получаются независимые, но воспроизводимые
//! генераторы для каждой колоды / каждого раунда.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::infra::rng::DeterministicRng;

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    /// Создать seed из 32 байт.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Создать seed из u64 (little-endian в первые 8 байт).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Доменное хэш-расширение.
    ///
    /// Пример:
    ///     let deck_seed = master.derive("deck", round);
    pub fn derive(&self, domain: &str, index: u64) -> Self {
        let mut hasher = Sha256::new();

        hasher.update(b"CARD_CONTAINERS_RNG_V1");
        hasher.update(self.bytes);
        // длина метки, чтобы ("ab", ..) и ("a", ..) не склеивались
        hasher.update((domain.len() as u64).to_le_bytes());
        hasher.update(domain.as_bytes());
        hasher.update(index.to_le_bytes());

        let mut out = [0u8; 32];
        out.copy_from_slice(&hasher.finalize());

        Self { bytes: out }
    }

    /// Создать DeterministicRng из seed.
    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed(self.bytes)
    }
}
