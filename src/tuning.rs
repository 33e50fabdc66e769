//! Data-driven game balance
//!
//! Every knob the session reads at startup, with defaults matching the
//! shipped game. Collected in one struct so a harness or balance pass can
//! swap the whole set without touching simulation code.

use serde::{Deserialize, Serialize};

/// Balance knobs supplied at session creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    /// Target number of live collectibles
    pub collectible_target: usize,
    /// Target number of live wood obstacles
    pub wood_target: usize,
    /// Target number of live stone obstacles
    pub stone_target: usize,
    /// Leftward item drift, pixels per second
    pub item_speed: f32,
    /// Boat vertical speed, pixels per second
    pub boat_speed: f32,
    /// Session countdown, seconds
    pub time_limit_secs: f32,
    /// Minimum gap between cooldown-gated spawns, seconds
    pub spawn_cooldown_secs: f32,
    /// Score at or above which a survived session counts as a win
    pub success_score_threshold: i64,
    /// Lives at session start
    pub initial_lives: u32,
    /// Cluster counts for the initial batch
    pub collectible_clusters: usize,
    pub wood_clusters: usize,
    pub stone_clusters: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            collectible_target: 10,
            wood_target: 4,
            stone_target: 4,
            // 2 px and 3 px per frame at the 30 Hz frame rate
            item_speed: 60.0,
            boat_speed: 90.0,
            time_limit_secs: 75.0,
            spawn_cooldown_secs: 1.5,
            success_score_threshold: 20,
            initial_lives: 4,
            collectible_clusters: 3,
            wood_clusters: 2,
            stone_clusters: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_round_trip() {
        let tuning = Tuning::default();
        let json = serde_json::to_string(&tuning).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(back.collectible_target, tuning.collectible_target);
        assert_eq!(back.initial_lives, tuning.initial_lives);
        assert_eq!(back.time_limit_secs, tuning.time_limit_secs);
    }
}
