//! Rendering module
//!
//! `compose` turns a session into a back-to-front display list. On the web the
//! list is replayed onto a 2D canvas context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod commands;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use commands::{Circle, Color, DrawCommand, Gradient, Paint, Shape};

use crate::sim::GameState;

/// Full repaint: background, pipes, ground, bird
///
/// Reads the session only; `glow` marks no-fail mode on the bird.
pub fn compose(state: &GameState, glow: bool) -> Vec<DrawCommand> {
    let tuning = &state.tuning;
    let mut cmds = shapes::background(tuning);
    for pipe in state.pipes.iter() {
        cmds.extend(shapes::pipe(pipe, tuning));
    }
    cmds.extend(shapes::ground(&state.ground, tuning));
    cmds.extend(shapes::bird(&state.bird, glow));
    cmds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Pipe;
    use crate::tuning::Tuning;

    #[test]
    fn test_layer_order() {
        let mut state = GameState::new(Tuning::default(), 0);
        state.pipes.push(Pipe { x: 200.0, y: -200.0 });
        let cmds = compose(&state, false);

        let tuning = &state.tuning;
        let bg = shapes::background(tuning).len();
        let pipe = shapes::pipe(&Pipe { x: 200.0, y: -200.0 }, tuning).len();
        let ground = shapes::ground(&state.ground, tuning).len();
        let bird = shapes::bird(&state.bird, false).len();
        assert_eq!(cmds.len(), bg + pipe + ground + bird);

        // Sky first, bird transform opens the last layer
        assert_eq!(cmds[..bg], shapes::background(tuning)[..]);
        assert!(matches!(
            cmds[bg + pipe + ground],
            DrawCommand::PushTransform { .. }
        ));
    }

    #[test]
    fn test_compose_does_not_touch_state() {
        let state = GameState::new(Tuning::default(), 0);
        let before = format!("{:?}", state);
        let _ = compose(&state, true);
        assert_eq!(before, format!("{:?}", state));
    }
}
