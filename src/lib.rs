//! Flappy Canvas - A side-scrolling flap-through-the-pipes arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, game state)
//! - `renderer`: Display-list compositor and the 2D canvas backend
//! - `input`: Maps raw key/pointer/button events to the single activate action
//! - `driver`: Per-frame loop driver owning the session
//! - `persistence`: Best-score storage
//! - `tuning`: Data-driven physical constants

pub mod driver;
pub mod highscores;
pub mod input;
pub mod persistence;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use driver::{Frame, FrameDriver};
pub use highscores::BestScore;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Logical canvas dimensions
    pub const CANVAS_WIDTH: f32 = 320.0;
    pub const CANVAS_HEIGHT: f32 = 480.0;

    /// Ground band height and scroll speed (pixels/tick)
    pub const GROUND_HEIGHT: f32 = 50.0;
    pub const GROUND_SPEED: f32 = 2.0;

    /// Bird defaults
    pub const BIRD_X: f32 = 50.0;
    pub const BIRD_RADIUS: f32 = 12.0;
    /// Velocity added every tick while running (pixels/tick²)
    pub const GRAVITY: f32 = 0.25;
    /// Upward speed set by a flap (pixels/tick)
    pub const JUMP_IMPULSE: f32 = 4.6;

    /// Rotation while climbing (radians, nose up)
    pub const NOSE_UP_ANGLE: f32 = -25.0 * DEGREE;
    /// Nose-down rotation added per tick while falling
    pub const ROTATION_STEP: f32 = DEGREE;
    /// Steepest nose-down rotation
    pub const MAX_ROTATION: f32 = 90.0 * DEGREE;

    /// Idle bob while waiting for the first flap
    pub const HOVER_BASE_Y: f32 = 150.0;
    pub const HOVER_AMPLITUDE: f32 = 10.0;
    pub const HOVER_FREQUENCY: f32 = 0.1;

    /// Pipe geometry (shared by every pair)
    pub const PIPE_WIDTH: f32 = 52.0;
    pub const PIPE_HEIGHT: f32 = 400.0;
    pub const PIPE_GAP: f32 = 100.0;
    pub const PIPE_SPEED: f32 = 2.0;
    /// Ticks between pipe spawns
    pub const PIPE_SPAWN_PERIOD: u64 = 150;
    /// Top pipe anchor is `-SPAWN_SCALE * (u + 1)` for u in [0, 1)
    pub const PIPE_SPAWN_SCALE: f32 = 150.0;

    /// Pipe cap decoration
    pub const PIPE_CAP_HEIGHT: f32 = 24.0;
    pub const PIPE_CAP_OVERHANG: f32 = 2.0;

    const DEGREE: f32 = std::f32::consts::PI / 180.0;
}
