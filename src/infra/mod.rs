//! Инфраструктурный слой вокруг контейнеров:
//! - RNG-реализации (боевая и детерминированная);
//! - seed и hash-reseeding;
//! - конфиг seed-политики.

pub mod config;
pub mod rng;
pub mod rng_seed;

pub use config::{ConfigError, RngConfig, SEED_ENV_VAR};
pub use rng::*;
pub use rng_seed::RngSeed;
