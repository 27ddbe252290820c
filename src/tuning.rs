//! Data-driven game balance
//!
//! Every physical constant the simulation reads lives here so a level designer
//! can override them from JSON without touching code. Missing fields fall back
//! to the defaults in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub width: f32,
    pub height: f32,

    pub ground_height: f32,
    pub ground_speed: f32,

    pub bird_x: f32,
    pub bird_radius: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub nose_up_angle: f32,
    pub rotation_step: f32,
    pub max_rotation: f32,

    pub hover_base_y: f32,
    pub hover_amplitude: f32,
    pub hover_frequency: f32,

    pub pipe_width: f32,
    pub pipe_height: f32,
    pub pipe_gap: f32,
    pub pipe_speed: f32,
    pub spawn_period: u64,
    pub spawn_scale: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,

            ground_height: GROUND_HEIGHT,
            ground_speed: GROUND_SPEED,

            bird_x: BIRD_X,
            bird_radius: BIRD_RADIUS,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            nose_up_angle: NOSE_UP_ANGLE,
            rotation_step: ROTATION_STEP,
            max_rotation: MAX_ROTATION,

            hover_base_y: HOVER_BASE_Y,
            hover_amplitude: HOVER_AMPLITUDE,
            hover_frequency: HOVER_FREQUENCY,

            pipe_width: PIPE_WIDTH,
            pipe_height: PIPE_HEIGHT,
            pipe_gap: PIPE_GAP,
            pipe_speed: PIPE_SPEED,
            spawn_period: PIPE_SPAWN_PERIOD,
            spawn_scale: PIPE_SPAWN_SCALE,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut tuning: Tuning = serde_json::from_str(json)?;
        // A zero period would divide by zero in the spawn check
        tuning.spawn_period = tuning.spawn_period.max(1);
        Ok(tuning)
    }

    /// Y coordinate of the top of the ground band
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.height - self.ground_height
    }

    /// Vertical speed below which the bird is drawn nose-up
    #[inline]
    pub fn climb_threshold(&self) -> f32 {
        self.jump_impulse / 2.0
    }
}
