//! Game state and core simulation types
//!
//! One `GameState` is the whole session: bird, pipe field, ground, score and
//! phase. Nothing in here is global; the driver owns the value and lends it to
//! `tick`, `activate` and the compositor.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Bird hovers, waiting for the first activate
    #[default]
    Ready,
    /// Active gameplay
    Running,
    /// Run ended; everything frozen until the next activate
    Over,
}

/// Something the host may want to react to (HUD, storage, logging)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ready -> Running
    Started,
    /// Flap while running
    Flapped,
    /// A pipe pair left the screen
    Scored { score: u32, best: u32 },
    /// Floor contact in no-fail mode
    Bounced,
    /// Running -> Over
    GameOver { score: u32, best: u32 },
    /// Over -> Ready
    Reset,
}

/// The controlled body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    /// Centre; x never changes
    pub pos: Vec2,
    /// Vertical speed (positive is down)
    pub speed: f32,
    /// Radians, positive is nose-down
    pub rotation: f32,
    pub radius: f32,
}

impl Bird {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.bird_x, tuning.hover_base_y),
            speed: 0.0,
            rotation: 0.0,
            radius: tuning.bird_radius,
        }
    }

    /// Instant upward flap; replaces the current speed
    pub fn flap(&mut self, tuning: &Tuning) {
        self.speed = -tuning.jump_impulse;
    }

    /// Idle bob as a pure function of the frame counter
    pub fn hover(&mut self, frames: u64, tuning: &Tuning) {
        let phase = frames as f32 * tuning.hover_frequency;
        self.pos.y = tuning.hover_base_y - tuning.hover_amplitude * phase.cos();
        self.rotation = 0.0;
    }

    /// Gravity integration: velocity first, then position
    pub fn fall(&mut self, tuning: &Tuning) {
        self.speed += tuning.gravity;
        self.pos.y += self.speed;

        if self.speed < tuning.climb_threshold() {
            self.rotation = tuning.nose_up_angle;
        } else {
            self.rotation = (self.rotation + tuning.rotation_step).min(tuning.max_rotation);
        }
    }

    #[inline]
    pub fn touches_floor(&self, floor_y: f32) -> bool {
        self.pos.y + self.radius >= floor_y
    }

    #[inline]
    pub fn touches_ceiling(&self) -> bool {
        self.pos.y - self.radius <= 0.0
    }
}

/// One top/bottom obstacle unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge
    pub x: f32,
    /// Top edge of the top segment (always negative, so it starts off-screen)
    pub y: f32,
}

/// Pipe pairs in spawn order, which is also left-to-right screen order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipeField {
    pairs: VecDeque<Pipe>,
}

impl PipeField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pair at the right end
    pub fn push(&mut self, pipe: Pipe) {
        debug_assert!(self.pairs.back().is_none_or(|last| last.x <= pipe.x));
        self.pairs.push_back(pipe);
    }

    /// Move every pair left
    pub fn scroll(&mut self, dx: f32) {
        for pipe in &mut self.pairs {
            pipe.x -= dx;
        }
    }

    /// Remove the front pair if its trailing edge is past the left boundary
    pub fn pop_passed(&mut self, pipe_width: f32) -> Option<Pipe> {
        match self.pairs.front() {
            Some(front) if front.x + pipe_width <= 0.0 => self.pairs.pop_front(),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pipe> {
        self.pairs.iter()
    }

    pub fn front(&self) -> Option<&Pipe> {
        self.pairs.front()
    }

    pub fn back(&self) -> Option<&Pipe> {
        self.pairs.back()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Tiling foreground band
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Ground {
    /// Horizontal offset in (-width, 0]
    pub offset: f32,
}

impl Ground {
    pub fn scroll(&mut self, dx: f32, width: f32) {
        self.offset -= dx;
        if self.offset <= -width {
            self.offset = 0.0;
        }
    }
}

/// Session score plus the persisted all-time best
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub value: u32,
    pub best: u32,
}

impl Score {
    pub fn with_best(best: u32) -> Self {
        Self { value: 0, best }
    }

    /// Count one passed pipe; returns true if the best moved
    pub fn increment(&mut self) -> bool {
        self.value += 1;
        if self.value > self.best {
            self.best = self.value;
            true
        } else {
            false
        }
    }
}

/// Complete game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Ticks since the last reset
    pub frames: u64,
    pub bird: Bird,
    pub pipes: PipeField,
    pub ground: Ground,
    pub score: Score,
    /// Events raised since the host last drained them
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh session; `best` is whatever the store remembered
    pub fn new(tuning: Tuning, best: u32) -> Self {
        Self {
            bird: Bird::new(&tuning),
            tuning,
            phase: GamePhase::Ready,
            frames: 0,
            pipes: PipeField::new(),
            ground: Ground::default(),
            score: Score::with_best(best),
            events: Vec::new(),
        }
    }

    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_ready() {
        let state = GameState::new(Tuning::default(), 4);
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.frames, 0);
        assert!(state.pipes.is_empty());
        assert_eq!(state.score, Score { value: 0, best: 4 });
    }

    #[test]
    fn test_fall_integrates_velocity_before_position() {
        let t = Tuning::default();
        let mut bird = Bird::new(&t);
        bird.speed = 1.0;
        let y0 = bird.pos.y;
        bird.fall(&t);
        assert_eq!(bird.speed, 1.25);
        assert_eq!(bird.pos.y, y0 + 1.25);
    }

    #[test]
    fn test_rotation_pinned_while_climbing() {
        let t = Tuning::default();
        let mut bird = Bird::new(&t);
        bird.rotation = 0.5;
        bird.flap(&t);
        bird.fall(&t);
        assert_eq!(bird.rotation, t.nose_up_angle);
    }

    #[test]
    fn test_rotation_capped_nose_down() {
        let t = Tuning::default();
        let mut bird = Bird::new(&t);
        bird.speed = 3.0;
        bird.rotation = t.max_rotation - t.rotation_step / 2.0;
        bird.fall(&t);
        assert_eq!(bird.rotation, t.max_rotation);
        bird.fall(&t);
        assert_eq!(bird.rotation, t.max_rotation);
    }

    #[test]
    fn test_hover_is_cosine_of_frames() {
        let t = Tuning::default();
        let mut bird = Bird::new(&t);
        bird.rotation = 1.0;
        bird.hover(0, &t);
        assert_eq!(bird.pos.y, 140.0);
        assert_eq!(bird.rotation, 0.0);
        bird.hover(10, &t);
        assert!((bird.pos.y - (150.0 - 10.0 * 1.0f32.cos())).abs() < 1e-4);
    }

    #[test]
    fn test_pipe_field_pops_only_passed_front() {
        let mut field = PipeField::new();
        field.push(Pipe { x: -52.0, y: -200.0 });
        field.push(Pipe { x: 100.0, y: -200.0 });
        assert_eq!(field.pop_passed(52.0), Some(Pipe { x: -52.0, y: -200.0 }));
        assert_eq!(field.pop_passed(52.0), None);
        assert_eq!(field.len(), 1);
    }

    #[test]
    fn test_pipe_field_keeps_front_one_unit_short() {
        let mut field = PipeField::new();
        field.push(Pipe { x: -51.0, y: -200.0 });
        assert_eq!(field.pop_passed(52.0), None);
    }

    #[test]
    fn test_ground_wraps_at_one_width() {
        let mut ground = Ground { offset: -318.0 };
        ground.scroll(2.0, 320.0);
        assert_eq!(ground.offset, 0.0);
        ground.scroll(2.0, 320.0);
        assert_eq!(ground.offset, -2.0);
    }

    #[test]
    fn test_score_best_is_monotone() {
        let mut score = Score::with_best(2);
        assert!(!score.increment());
        assert!(!score.increment());
        assert!(score.increment());
        assert_eq!(score, Score { value: 3, best: 3 });
    }
}
