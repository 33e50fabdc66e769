//! Collision resolution and scoring
//!
//! Two independent passes per tick, in this order: the boat pass resolves
//! every item overlapping the player, then the manual pickup action (when
//! the player triggered it) frees at most one collectible pinned against
//! an obstacle.

use super::state::{GameState, ItemKind};

/// Resolve every item overlapping the boat this tick.
///
/// Collectible: score +1. Obstacle: score -1 and a life lost. Either way
/// the item is removed; ids guarantee each overlap is accounted exactly
/// once even when identical boxes coexist.
pub fn resolve_boat_collisions(state: &mut GameState) {
    let boat_rect = state.boat.rect;
    let hits: Vec<(u32, ItemKind)> = state
        .items
        .iter()
        .filter(|item| boat_rect.intersects(&item.rect))
        .map(|item| (item.id, item.kind))
        .collect();

    for (id, kind) in hits {
        if kind.is_collectible() {
            state.score += 1;
        } else {
            state.score -= 1;
            state.lives = state.lives.saturating_sub(1);
            log::debug!("obstacle hit, {} lives left", state.lives);
        }
        state.remove_item(id);
    }
}

/// Manual pickup: free one collectible pinned against an obstacle.
///
/// Scans collectibles in registry order; the first one overlapping ANY
/// obstacle is removed for a point and the scan stops. Obstacles are
/// never removed by this action. Returns whether anything was freed.
pub fn resolve_pickup(state: &mut GameState) -> bool {
    let pinned = state.items.iter().find_map(|item| {
        if !item.kind.is_collectible() {
            return None;
        }
        let stuck = state
            .items
            .iter()
            .any(|other| other.kind.is_obstacle() && item.rect.intersects(&other.rect));
        stuck.then_some(item.id)
    });

    match pinned {
        Some(id) => {
            state.remove_item(id);
            state.score += 1;
            log::debug!("freed pinned item {id}");
            true
        }
        None => false,
    }
}
