//! Best-score persistence
//!
//! One scalar under one key. `ScoreStore` is the seam between the driver and
//! the browser; tests and native runs use `MemoryStore`.

#[cfg(target_arch = "wasm32")]
mod local_storage;

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

use crate::highscores::BestScore;

pub trait ScoreStore {
    /// Missing or unreadable values load as zero
    fn load_best(&self) -> BestScore;
    fn save_best(&mut self, best: BestScore);
}

/// In-process store holding the raw stored string
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    raw: Option<String>,
    /// Number of writes, for tests
    pub writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded with a raw stored value
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            writes: 0,
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl ScoreStore for MemoryStore {
    fn load_best(&self) -> BestScore {
        BestScore::parse(self.raw.as_deref())
    }

    fn save_best(&mut self, best: BestScore) {
        self.raw = Some(best.to_storage());
        self.writes += 1;
    }
}
