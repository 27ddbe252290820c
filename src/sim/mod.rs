//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per display refresh
//! - Injected random source only
//! - Pipes kept in spawn order
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{PipeHit, Rect, Segment, bird_bounds, first_collision, pipe_segments};
pub use spawn::{FixedSource, SpawnSource, spawn_pipe};
pub use state::{Bird, GameEvent, GamePhase, GameState, Ground, Pipe, PipeField, Score};
pub use tick::{TickInput, activate, reset, tick};
