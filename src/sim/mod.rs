//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Identity-based item removal (stable ids)
//! - No rendering or platform dependencies

pub mod cluster;
pub mod collision;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use cluster::clustered_positions;
pub use collision::{resolve_boat_collisions, resolve_pickup};
pub use rect::Rect;
pub use spawn::{replenish, seed_initial_items};
pub use state::{Boat, GamePhase, GameState, Item, ItemKind, Outcome};
pub use tick::{TickInput, tick};
