//! HUD overlay model
//!
//! The page owns the start screen, live score and game-over card. This is the
//! pure projection of the session onto those elements; the host only copies
//! it into the DOM.

use crate::sim::{GamePhase, GameState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudView {
    pub start_screen: bool,
    pub score_display: bool,
    pub game_over_screen: bool,
    /// Live score text
    pub score: u32,
    /// Game-over card values, present only in `Over`
    pub final_scores: Option<(u32, u32)>,
}

impl HudView {
    pub fn from_state(state: &GameState) -> Self {
        let phase = state.phase;
        Self {
            start_screen: phase == GamePhase::Ready,
            score_display: phase == GamePhase::Running,
            game_over_screen: phase == GamePhase::Over,
            score: state.score.value,
            final_scores: (phase == GamePhase::Over).then_some((state.score.value, state.score.best)),
        }
    }
}
