//! Browser LocalStorage backend

use web_sys::Storage;

use super::ScoreStore;
use crate::highscores::{BestScore, STORAGE_KEY};

#[derive(Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Option<Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

impl ScoreStore for LocalStorageStore {
    fn load_best(&self) -> BestScore {
        let raw = Self::storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
        let best = BestScore::parse(raw.as_deref());
        log::info!("Loaded best score {}", best.value);
        best
    }

    fn save_best(&mut self, best: BestScore) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(STORAGE_KEY, &best.to_storage()).is_err() {
                    log::warn!("Could not save best score {}", best.value);
                }
            }
            None => log::warn!("LocalStorage unavailable, best score not saved"),
        }
    }
}
