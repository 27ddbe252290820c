//! Per-frame simulation step
//!
//! `tick` is the Update half of a display refresh: it mutates the session
//! according to its phase and bumps the frame counter. `activate` is the
//! single input action and runs between ticks.

use super::collision::first_collision;
use super::spawn::{SpawnSource, is_spawn_tick, spawn_pipe};
use super::state::{GameEvent, GamePhase, GameState};

/// Collaborator reads sampled fresh every frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Floor and pipe contact don't end the run
    pub no_fail: bool,
}

/// Advance the session by one frame
pub fn tick(state: &mut GameState, input: &TickInput, rng: &mut impl SpawnSource) {
    update_bird(state, input);
    update_ground(state);
    update_pipes(state, input, rng);
    state.frames += 1;
}

/// Flap, start or restart depending on phase
pub fn activate(state: &mut GameState) {
    match state.phase {
        GamePhase::Ready => {
            state.phase = GamePhase::Running;
            state.events.push(GameEvent::Started);
            log::info!("Run started (best {})", state.score.best);
        }
        GamePhase::Running => {
            state.bird.flap(&state.tuning);
            state.events.push(GameEvent::Flapped);
        }
        GamePhase::Over => reset(state),
    }
}

/// Back to Ready with an empty field; the best score survives
pub fn reset(state: &mut GameState) {
    state.bird.speed = 0.0;
    state.bird.rotation = 0.0;
    state.pipes.clear();
    state.score.value = 0;
    state.frames = 0;
    state.phase = GamePhase::Ready;
    state.events.push(GameEvent::Reset);
    log::info!("Session reset");
}

fn game_over(state: &mut GameState) {
    state.phase = GamePhase::Over;
    state.events.push(GameEvent::GameOver {
        score: state.score.value,
        best: state.score.best,
    });
    log::info!(
        "Game over: score {} (best {})",
        state.score.value,
        state.score.best
    );
}

fn update_bird(state: &mut GameState, input: &TickInput) {
    let tuning = &state.tuning;
    let bird = &mut state.bird;

    match state.phase {
        GamePhase::Ready => bird.hover(state.frames, tuning),
        GamePhase::Over => {}
        GamePhase::Running => {
            bird.fall(tuning);

            let floor_y = tuning.floor_y();
            if bird.touches_floor(floor_y) {
                bird.pos.y = floor_y - bird.radius;
                if input.no_fail {
                    bird.speed = -tuning.jump_impulse / 2.0;
                    state.events.push(GameEvent::Bounced);
                } else {
                    game_over(state);
                    return;
                }
            }

            if bird.touches_ceiling() {
                bird.pos.y = bird.radius;
                bird.speed = 0.0;
            }
        }
    }
}

fn update_ground(state: &mut GameState) {
    if state.phase == GamePhase::Running {
        state.ground.scroll(state.tuning.ground_speed, state.tuning.width);
    }
}

fn update_pipes(state: &mut GameState, input: &TickInput, rng: &mut impl SpawnSource) {
    if state.phase != GamePhase::Running {
        return;
    }
    let tuning = &state.tuning;

    state.pipes.scroll(tuning.pipe_speed);

    if let Some(hit) = first_collision(&state.bird, &state.pipes, tuning) {
        if !input.no_fail {
            log::debug!("Hit {:?} segment of pipe #{}", hit.segment, hit.index);
            game_over(state);
            return;
        }
    }

    while let Some(passed) = state.pipes.pop_passed(tuning.pipe_width) {
        let new_best = state.score.increment();
        log::debug!("Pipe passed at x={}, score {}", passed.x, state.score.value);
        if new_best {
            log::info!("New best score: {}", state.score.best);
        }
        state.events.push(GameEvent::Scored {
            score: state.score.value,
            best: state.score.best,
        });
    }

    if is_spawn_tick(state.frames, tuning) {
        let pipe = spawn_pipe(rng, tuning);
        log::debug!("Spawned pipe gap anchor y={} at frame {}", pipe.y, state.frames);
        state.pipes.push(pipe);
    }
}
