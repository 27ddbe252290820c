//! All-time best score
//!
//! Stored as a bare decimal string so older saves written by hand (or by the
//! previous page script) still load.

use serde::{Deserialize, Serialize};

/// Stable storage key
pub const STORAGE_KEY: &str = "flappy_best";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BestScore {
    pub value: u32,
}

impl BestScore {
    pub fn new(value: u32) -> Self {
        Self { value }
    }

    /// Decode a stored value; absent or unreadable means zero
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim) else {
            return Self::default();
        };
        if let Ok(value) = raw.parse::<u32>() {
            return Self::new(value);
        }
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => Self::new(v.min(u32::MAX as f64) as u32),
            _ => {
                log::warn!("Ignoring unreadable best score {:?}", raw);
                Self::default()
            }
        }
    }

    pub fn to_storage(&self) -> String {
        self.value.to_string()
    }

    /// Raise to `score` if higher; returns true when it moved
    pub fn record(&mut self, score: u32) -> bool {
        if score > self.value {
            self.value = score;
            true
        } else {
            false
        }
    }
}
