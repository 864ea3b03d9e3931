//! Simulation tick and match lifecycle
//!
//! One [`tick`] is one frame's worth of movement. Lifecycle commands
//! ([`start`], [`reset`]) are applied immediately from input callbacks.

use rand::Rng;

use super::ai;
use super::collision::{bounce_off_paddle, reflect_off_walls, scoring_side};
use super::state::{GameEvent, GamePhase, GameState, Side};

/// Advance the game state by one step.
///
/// A no-op unless the game is running. Returns what happened, in order.
pub fn tick<R: Rng>(state: &mut GameState, rng: &mut R) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !state.is_running() {
        return events;
    }
    state.time_ticks += 1;

    let ball = &mut state.ball;
    ball.pos += ball.vel;

    if reflect_off_walls(ball, &state.field) {
        events.push(GameEvent::WallBounce);
    }

    // Both paddles are checked every tick, left first
    if bounce_off_paddle(ball, &state.left, Side::Player) {
        events.push(GameEvent::PaddleHit(Side::Player));
    }
    if bounce_off_paddle(ball, &state.right, Side::Ai) {
        events.push(GameEvent::PaddleHit(Side::Ai));
    }

    if let Some(scorer) = scoring_side(&state.ball, &state.field) {
        score_point(state, scorer, rng, &mut events);
    }

    let field = state.field;
    ai::track_ball(&mut state.right, &state.ball, &field);

    events
}

/// Credit a point, decide the match if it is over, and serve again
fn score_point<R: Rng>(
    state: &mut GameState,
    scorer: Side,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    state.scores.increment(scorer);
    events.push(GameEvent::Scored(scorer));

    if let Some(winner) = state.scores.winner() {
        state.winner = Some(winner);
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::GameOver { winner });
    }

    state.respawn(rng);
}

/// Start (or resume) play. Returns whether the phase changed.
///
/// Has no effect once the match is over; only [`reset`] leaves `GameOver`.
pub fn start(state: &mut GameState) -> bool {
    match state.phase {
        GamePhase::Idle => {
            state.phase = GamePhase::Running;
            true
        }
        GamePhase::Running | GamePhase::GameOver => false,
    }
}

/// Return to the initial idle state with zeroed scores, from any phase
pub fn reset<R: Rng>(state: &mut GameState, rng: &mut R) {
    state.scores = Default::default();
    state.winner = None;
    state.phase = GamePhase::Idle;
    state.time_ticks = 0;
    state.respawn(rng);
}
