//! River Sweeper - a river-cleanup arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, movement, collisions, game state)
//! - `tuning`: Data-driven game balance

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (30 Hz, one tick per rendered frame)
    pub const SIM_DT: f32 = 1.0 / 30.0;

    /// Play area dimensions
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 600.0;

    /// Top of the water band; the strip above it is sand
    pub const SAND_HEIGHT: f32 = HEIGHT / 3.0;

    /// Item defaults - every item is a square of this side
    pub const ITEM_SIZE: f32 = 50.0;

    /// Boat defaults - square sprite box, horizontally anchored
    pub const BOAT_SIZE: f32 = 70.0;
    pub const BOAT_X: f32 = WIDTH / 3.0 - BOAT_SIZE / 2.0;
}

/// Clamp a vertical position so a box of height `h` stays inside the water band
#[inline]
pub fn clamp_to_water_band(y: f32, h: f32) -> f32 {
    y.clamp(consts::SAND_HEIGHT, consts::HEIGHT - h)
}

/// Uniform point inside an axis-aligned region given by min/max corners
#[inline]
pub fn lerp_point(min: Vec2, max: Vec2, tx: f32, ty: f32) -> Vec2 {
    Vec2::new(min.x + (max.x - min.x) * tx, min.y + (max.y - min.y) * ty)
}
