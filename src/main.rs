//! River Sweeper entry point
//!
//! Headless presentation collaborator: drives the simulation core once
//! per tick with a scripted pilot and prints a JSON run summary. A
//! graphical frontend would replace the pilot with sampled input and
//! render `GameState` instead of logging it.

use serde::Serialize;

use river_sweeper::consts::*;
use river_sweeper::sim::{GamePhase, GameState, ItemKind, TickInput, tick};

/// End-of-run summary printed to stdout
#[derive(Serialize)]
struct RunSummary {
    seed: u64,
    ticks: u64,
    score: i64,
    lives: u32,
    outcome: String,
}

/// Steer toward the nearest collectible row and fire a pickup attempt
/// once a second
fn pilot_input(state: &GameState) -> TickInput {
    let boat_mid = state.boat.rect.center().y;
    let target = state
        .items
        .iter()
        .filter(|item| item.kind.is_collectible() && item.rect.right() > state.boat.rect.x)
        .min_by(|a, b| {
            let da = (a.rect.x - state.boat.rect.x).abs();
            let db = (b.rect.x - state.boat.rect.x).abs();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|item| item.rect.center().y);

    let (up, down) = match target {
        Some(y) if y < boat_mid - 2.0 => (true, false),
        Some(y) if y > boat_mid + 2.0 => (false, true),
        _ => (false, false),
    };

    TickInput {
        move_up: up,
        move_down: down,
        pickup: state.time_ticks % 30 == 0,
        reset: false,
    }
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or_else(rand::random);

    log::info!("starting session with seed {seed}");
    let mut state = GameState::new(seed);

    while state.phase == GamePhase::Active {
        let input = pilot_input(&state);
        tick(&mut state, &input, SIM_DT);

        if state.time_ticks % 30 == 0 {
            log::info!(
                "t={:>3}s score={} lives={} items={} (plastic {})",
                state.tuning.time_limit_secs as u32 - state.remaining_secs(),
                state.score,
                state.lives,
                state.items.len(),
                state.count_items(ItemKind::is_collectible),
            );
        }
    }

    let summary = RunSummary {
        seed,
        ticks: state.time_ticks,
        score: state.score,
        lives: state.lives,
        outcome: format!("{:?}", state.outcome.expect("ended session has an outcome")),
    };
    match serde_json::to_string(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("summary encoding failed: {e}"),
    }
}
