//! Game state and core simulation types
//!
//! All state needed to replay a session deterministically lives here.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Session is running; ticks mutate state
    Active,
    /// Session finished; further ticks are ignored
    Ended,
}

/// End-of-session classification, used by the presentation layer to pick
/// the closing screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Ran out of lives
    Failure,
    /// Survived with score at or above the success threshold
    Success,
    /// Survived but short of the threshold
    Neutral,
}

/// Item categories floating down the river
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Bottle,
    Can,
    Chips,
    Wrapper,
    Tube,
    Bag,
    Wood,
    Stone,
}

/// The six plastic kinds worth a point on contact
pub const COLLECTIBLE_KINDS: [ItemKind; 6] = [
    ItemKind::Bottle,
    ItemKind::Can,
    ItemKind::Chips,
    ItemKind::Wrapper,
    ItemKind::Tube,
    ItemKind::Bag,
];

/// Every kind eligible for the rate-limited spawn slot. Obstacles are
/// part of this draw, so the slot can land wood or stone ahead of the
/// burst path.
pub const SPAWNABLE_KINDS: [ItemKind; 8] = [
    ItemKind::Bottle,
    ItemKind::Can,
    ItemKind::Chips,
    ItemKind::Wrapper,
    ItemKind::Tube,
    ItemKind::Bag,
    ItemKind::Wood,
    ItemKind::Stone,
];

impl ItemKind {
    /// Plastic debris: +1 score and removal on boat contact
    #[inline]
    pub fn is_collectible(&self) -> bool {
        !self.is_obstacle()
    }

    /// Wood or stone: -1 score, -1 life, and removal on boat contact
    #[inline]
    pub fn is_obstacle(&self) -> bool {
        matches!(self, ItemKind::Wood | ItemKind::Stone)
    }
}

/// A floating item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Unique id assigned at creation; removal goes through this, never
    /// through value equality, so duplicate boxes stay unambiguous
    pub id: u32,
    pub rect: Rect,
    pub kind: ItemKind,
}

/// The player's boat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boat {
    pub rect: Rect,
}

impl Default for Boat {
    fn default() -> Self {
        Self {
            rect: Rect::new(BOAT_X, SAND_HEIGHT, BOAT_SIZE, BOAT_SIZE),
        }
    }
}

impl Boat {
    /// Move vertically by `dy`, clamped to the water band. Horizontal
    /// position is fixed.
    pub fn move_by(&mut self, dy: f32) {
        self.rect.y = crate::clamp_to_water_band(self.rect.y + dy, self.rect.h);
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// RNG carried across ticks; all randomness flows through it
    pub rng: Pcg32,
    /// Balance knobs supplied at startup
    pub tuning: Tuning,
    /// Signed score; obstacle hits can push it below zero
    pub score: i64,
    /// Remaining lives; saturating, never below zero
    pub lives: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Accumulated simulated seconds since reset
    pub elapsed_secs: f32,
    /// Simulated second at which the last cooldown-gated spawn fired
    pub last_spawn_secs: f32,
    /// Live items, unordered
    pub items: Vec<Item>,
    /// Player boat
    pub boat: Boat,
    /// Current phase
    pub phase: GamePhase,
    /// Set once the phase transitions to `Ended`
    pub outcome: Option<Outcome>,
    /// Next item id
    next_id: u32,
}

impl GameState {
    /// Create a new session with the given seed and default balance
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new session with explicit balance knobs
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            lives: tuning.initial_lives,
            tuning,
            score: 0,
            time_ticks: 0,
            elapsed_secs: 0.0,
            last_spawn_secs: 0.0,
            items: Vec::new(),
            boat: Boat::default(),
            phase: GamePhase::Active,
            outcome: None,
            next_id: 1,
        };
        super::spawn::seed_initial_items(&mut state);
        state
    }

    /// Restart the session in place: fresh clustered batch, full lives,
    /// countdown restarted. The layout seed is drawn from the session RNG
    /// so consecutive runs differ but the whole sequence replays from the
    /// first seed.
    pub fn reset(&mut self) {
        let seed = self.rng.random::<u64>();
        *self = Self::with_tuning(seed, self.tuning.clone());
    }

    /// Allocate a new item id
    pub fn next_item_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Insert an item, assigning its id
    pub fn insert_item(&mut self, rect: Rect, kind: ItemKind) -> u32 {
        let id = self.next_item_id();
        self.items.push(Item { id, rect, kind });
        id
    }

    /// Remove an item by id. Returns true if it was present.
    pub fn remove_item(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        debug_assert!(self.items.len() + 1 >= before, "duplicate item id {id}");
        self.items.len() < before
    }

    /// Count items matching a predicate on kind
    pub fn count_items(&self, pred: impl Fn(&ItemKind) -> bool) -> usize {
        self.items.iter().filter(|item| pred(&item.kind)).count()
    }

    /// Remaining countdown, floored to whole seconds and clamped at zero.
    /// This is the value the presentation layer renders.
    pub fn remaining_secs(&self) -> u32 {
        (self.tuning.time_limit_secs - self.elapsed_secs).max(0.0) as u32
    }

    /// Raw countdown, may be negative once the limit is exceeded
    pub fn remaining_secs_raw(&self) -> f32 {
        self.tuning.time_limit_secs - self.elapsed_secs
    }

    /// Classify the finished session for end-screen selection
    pub fn classify_outcome(&self) -> Outcome {
        if self.lives == 0 {
            Outcome::Failure
        } else if self.score >= self.tuning.success_score_threshold {
            Outcome::Success
        } else {
            Outcome::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_state() {
        let state = GameState::new(7);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, state.tuning.initial_lives);
        assert_eq!(state.phase, GamePhase::Active);
        assert!(state.outcome.is_none());
        assert!(!state.items.is_empty());
    }

    #[test]
    fn test_boat_clamps_to_water_band() {
        let mut boat = Boat::default();
        boat.move_by(-1000.0);
        assert_eq!(boat.rect.y, SAND_HEIGHT);
        boat.move_by(1000.0);
        assert_eq!(boat.rect.y, HEIGHT - boat.rect.h);
    }

    #[test]
    fn test_remove_item_by_id_with_duplicate_boxes() {
        let mut state = GameState::new(7);
        state.items.clear();
        let rect = Rect::new(100.0, 300.0, ITEM_SIZE, ITEM_SIZE);
        let first = state.insert_item(rect, ItemKind::Bottle);
        let second = state.insert_item(rect, ItemKind::Bottle);

        // Duplicate (box, kind) pairs are legal; ids disambiguate removal
        assert!(state.remove_item(second));
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id, first);
        assert!(!state.remove_item(second));
    }

    #[test]
    fn test_remaining_secs_clamps() {
        let mut state = GameState::new(7);
        state.elapsed_secs = state.tuning.time_limit_secs + 5.0;
        assert_eq!(state.remaining_secs(), 0);
        assert!(state.remaining_secs_raw() < 0.0);
    }

    #[test]
    fn test_outcome_classification() {
        let mut state = GameState::new(7);
        state.lives = 0;
        state.score = 100;
        assert_eq!(state.classify_outcome(), Outcome::Failure);

        state.lives = 2;
        state.score = state.tuning.success_score_threshold;
        assert_eq!(state.classify_outcome(), Outcome::Success);

        state.score = state.tuning.success_score_threshold - 1;
        assert_eq!(state.classify_outcome(), Outcome::Neutral);
    }

    #[test]
    fn test_kind_partition() {
        for kind in COLLECTIBLE_KINDS {
            assert!(kind.is_collectible());
            assert!(!kind.is_obstacle());
        }
        assert!(ItemKind::Wood.is_obstacle());
        assert!(ItemKind::Stone.is_obstacle());
    }
}
