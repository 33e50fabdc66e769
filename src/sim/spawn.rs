//! Population maintenance: initial seeding, replenishment, and cull
//!
//! Two spawn regimes keep the river stocked. Obstacles burst-fill to
//! their targets every tick so the hazard density never drops; plastics
//! trickle in one at a time behind a cooldown so scoring chances stay
//! readable. The cooldown slot draws from the full kind set, obstacles
//! included, so wood or stone can occasionally arrive ahead of the
//! burst path.

use glam::Vec2;
use rand::Rng;

use super::cluster::clustered_positions;
use super::rect::Rect;
use super::state::{GameState, ItemKind, COLLECTIBLE_KINDS, SPAWNABLE_KINDS};
use crate::consts::*;

/// Region where clustered batches land: right half of the play area,
/// water band only
fn cluster_region() -> Rect {
    Rect::new(WIDTH / 2.0, SAND_HEIGHT, WIDTH / 2.0, HEIGHT - SAND_HEIGHT)
}

/// Populate a fresh session with clustered rafts of debris and obstacles
pub fn seed_initial_items(state: &mut GameState) {
    let region = cluster_region();
    let tuning = state.tuning.clone();

    let plastic = clustered_positions(
        &mut state.rng,
        tuning.collectible_clusters,
        tuning.collectible_target,
        region,
    );
    for pos in plastic {
        let kind = COLLECTIBLE_KINDS[state.rng.random_range(0..COLLECTIBLE_KINDS.len())];
        state.insert_item(Rect::square(pos, ITEM_SIZE), kind);
    }

    let wood = clustered_positions(&mut state.rng, tuning.wood_clusters, tuning.wood_target, region);
    for pos in wood {
        state.insert_item(Rect::square(pos, ITEM_SIZE), ItemKind::Wood);
    }

    let stone =
        clustered_positions(&mut state.rng, tuning.stone_clusters, tuning.stone_target, region);
    for pos in stone {
        state.insert_item(Rect::square(pos, ITEM_SIZE), ItemKind::Stone);
    }

    log::debug!("seeded {} items", state.items.len());
}

/// One item at the right edge with a fresh random vertical placement
fn spawn_at_edge(state: &mut GameState, kind: ItemKind) {
    let y = state.rng.random_range(SAND_HEIGHT..=HEIGHT - ITEM_SIZE);
    state.insert_item(Rect::square(Vec2::new(WIDTH, y), ITEM_SIZE), kind);
}

/// Per-tick population maintenance. Order matters:
/// 1. cooldown-gated slot (one spawn, any kind)
/// 2. wood burst-fill to target
/// 3. stone burst-fill to target
/// 4. cull items fully past the left edge
pub fn replenish(state: &mut GameState) {
    let tuning = state.tuning.clone();

    if state.count_items(ItemKind::is_collectible) < tuning.collectible_target
        && state.elapsed_secs - state.last_spawn_secs > tuning.spawn_cooldown_secs
    {
        let kind = SPAWNABLE_KINDS[state.rng.random_range(0..SPAWNABLE_KINDS.len())];
        spawn_at_edge(state, kind);
        state.last_spawn_secs = state.elapsed_secs;
    }

    while state.count_items(|k| *k == ItemKind::Wood) < tuning.wood_target {
        spawn_at_edge(state, ItemKind::Wood);
    }

    while state.count_items(|k| *k == ItemKind::Stone) < tuning.stone_target {
        spawn_at_edge(state, ItemKind::Stone);
    }

    cull(state);
}

/// Drop every item whose right edge has scrolled past the left boundary
pub fn cull(state: &mut GameState) {
    let before = state.items.len();
    state.items.retain(|item| item.rect.right() >= 0.0);
    let dropped = before - state.items.len();
    if dropped > 0 {
        log::trace!("culled {dropped} off-screen items");
    }
}
