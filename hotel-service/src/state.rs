//! Application state for hotel-service

use std::sync::{Arc, Mutex, PoisonError};

use hotel_gen::{RandomSource, SeededRandom, ThreadRandom};
use shared::AppError;

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Present when `HOTEL_RNG_SEED` is set
    seeded: Option<Arc<Mutex<SeededRandom>>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let seeded = config
            .rng_seed
            .map(|seed| Arc::new(Mutex::new(SeededRandom::from_seed_u64(seed))));
        Self {
            config: Arc::new(config),
            seeded,
        }
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded.is_some()
    }

    /// Run one generation call against the configured random source
    ///
    /// The seeded source stays locked for the whole call; `f` must not await.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut dyn RandomSource) -> T) -> T {
        match &self.seeded {
            Some(source) => {
                let mut guard = source.lock().unwrap_or_else(PoisonError::into_inner);
                f(&mut *guard)
            }
            None => f(&mut ThreadRandom),
        }
    }

    /// Requested count, or `default` capped at the configured maximum
    pub fn batch_size(&self, requested: Option<usize>, default: usize) -> Result<usize, AppError> {
        let max = self.config.max_batch_size;
        match requested {
            Some(count) if count > max => Err(AppError::batch_too_large(count, max)),
            Some(count) => Ok(count),
            None => Ok(default.min(max)),
        }
    }
}
