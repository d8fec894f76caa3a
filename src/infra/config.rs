//! Конфигурация seed-политики.
//!
//! По умолчанию seed берётся из энтропии ОС; для реплея его можно
//! зафиксировать через `CARD_CONTAINERS_SEED` или JSON-конфиг.

use log::debug;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::infra::rng::DeterministicRng;
use crate::infra::rng_seed::RngSeed;

/// Имя переменной окружения с фиксированным seed.
pub const SEED_ENV_VAR: &str = "CARD_CONTAINERS_SEED";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Некорректный seed в CARD_CONTAINERS_SEED: {0:?}")]
    InvalidSeed(String),

    #[error("Некорректный JSON-конфиг: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RngConfig {
    /// `None` — засеять из энтропии.
    pub seed: Option<u64>,
}

impl RngConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Прочитать конфиг из окружения. Отсутствие переменной — не ошибка.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(SEED_ENV_VAR) {
            Ok(raw) => Self::parse_seed(&raw),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    fn parse_seed(raw: &str) -> Result<Self, ConfigError> {
        raw.trim()
            .parse::<u64>()
            .map(Self::with_seed)
            .map_err(|_| ConfigError::InvalidSeed(raw.to_string()))
    }

    /// Фактический seed: заданный или свежий из энтропии ОС.
    /// Пишем его в лог, чтобы любой запуск можно было повторить.
    pub fn resolve_seed(&self) -> u64 {
        let seed = match self.seed {
            Some(seed) => seed,
            None => rand::rngs::OsRng.next_u64(),
        };
        debug!("RngConfig: seed={seed} (fixed={})", self.seed.is_some());
        seed
    }

    /// Конфиг с зафиксированным seed. Звать один раз на запуск, дальше
    /// все генераторы выводить через [`build_for`](Self::build_for).
    pub fn resolved(&self) -> Self {
        Self::with_seed(self.resolve_seed())
    }

    /// Собрать генератор из seed как есть.
    pub fn build(&self) -> DeterministicRng {
        DeterministicRng::seed_from_u64(self.resolve_seed())
    }

    /// Независимый генератор для одного потребителя (`"deck"`, `"seats"`, ...).
    /// Разные `domain` на одном seed дают разные потоки.
    pub fn build_for(&self, domain: &str) -> DeterministicRng {
        RngSeed::from_u64(self.resolve_seed())
            .derive(domain, 0)
            .to_rng()
    }
}
