//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::collision::{resolve_boat_collisions, resolve_pickup};
use super::spawn::replenish;
use super::state::{GamePhase, GameState};

/// Input commands for a single tick (deterministic)
///
/// The presentation layer samples its own event source and reduces it to
/// this signal set. `pickup` and `reset` are edge-triggered: the caller
/// raises them for exactly one tick per press.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move the boat up this tick
    pub move_up: bool,
    /// Move the boat down this tick
    pub move_down: bool,
    /// Attempt to free one collectible pinned against an obstacle
    pub pickup: bool,
    /// Restart the session
    pub reset: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.reset {
        state.reset();
        log::info!("session reset, seed {}", state.seed);
        return;
    }

    // Ended sessions stay frozen for the presentation layer to read
    if state.phase == GamePhase::Ended {
        return;
    }

    state.time_ticks += 1;
    state.elapsed_secs += dt;

    // Boat movement: opposed inputs cancel out
    let mut dy = 0.0;
    if input.move_up {
        dy -= state.tuning.boat_speed * dt;
    }
    if input.move_down {
        dy += state.tuning.boat_speed * dt;
    }
    if dy != 0.0 {
        state.boat.move_by(dy);
    }

    // Items drift left by the fixed horizontal step
    let step = state.tuning.item_speed * dt;
    for item in &mut state.items {
        item.rect.x -= step;
    }

    replenish(state);

    resolve_boat_collisions(state);
    if input.pickup {
        resolve_pickup(state);
    }

    // Game-over transition, evaluated once per tick after both passes
    if state.remaining_secs_raw() <= 0.0 || state.lives == 0 {
        state.phase = GamePhase::Ended;
        let outcome = state.classify_outcome();
        state.outcome = Some(outcome);
        log::info!(
            "session ended after {} ticks: score {}, lives {}, {:?}",
            state.time_ticks,
            state.score,
            state.lives,
            outcome
        );
    }
}
