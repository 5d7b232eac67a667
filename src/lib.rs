//! Throng - a 2D crowd-emotion sandbox
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actors, areas, relationships, scenarios)
//! - `scenarios`: Built-in scenario layouts
//! - `renderer`: Tessellation of simulation state into vertex lists
//! - `game`: Scenario registry and per-frame orchestration

pub mod clock;
pub mod color;
pub mod game;
pub mod renderer;
pub mod scenarios;
pub mod sim;

pub use clock::Clock;
pub use color::Rgba;
pub use game::Game;

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Fixed demo timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// World dimensions (the demo's orthographic view)
    pub const WORLD_WIDTH: f32 = 1024.0;
    pub const WORLD_HEIGHT: f32 = 576.0;

    /// Player movement
    pub const PLAYER_ACCELERATION: f32 = 200_000.0;
    pub const PLAYER_MAX_MOVE_SPEED: f32 = 100.0;
    /// Time to coast from max speed to a stop with no input held
    pub const SECONDS_TO_DRAG_TO_STOP: f32 = 0.1;

    /// How long a falling actor shrinks before it is dead
    pub const SECONDS_TO_FALL: f64 = 3.0;

    /// Actor defaults
    pub const DEFAULT_NPC_RADIUS: f32 = 10.0;
}

/// Linear interpolation from `from` toward `to` by `t` in [0, 1]
#[inline]
pub fn lerp_f32(from: f32, to: f32, t: f32) -> f32 {
    from + t * (to - from)
}

/// f64 variant, used for expiry times
#[inline]
pub fn lerp_f64(from: f64, to: f64, t: f32) -> f64 {
    from + t as f64 * (to - from)
}

/// Map `value` from one range onto another, unclamped.
///
/// A collapsed input range maps everything to `out_end` - scenario data
/// with matching inner/outer distances relies on selecting the outer value.
#[inline]
pub fn range_map(in_start: f32, in_end: f32, value: f32, out_start: f32, out_end: f32) -> f32 {
    if in_start == in_end {
        return out_end;
    }
    let fraction = (value - in_start) / (in_end - in_start);
    out_start + fraction * (out_end - out_start)
}

/// Build a velocity vector from a speed and a heading in degrees
#[inline]
pub fn velocity_from_heading(speed: f32, heading_degrees: f32) -> Vec2 {
    Vec2::from_angle(heading_degrees.to_radians()) * speed
}

/// Decompose a velocity vector into (speed, heading degrees)
#[inline]
pub fn heading_from_velocity(velocity: Vec2) -> (f32, f32) {
    (velocity.length(), velocity.y.atan2(velocity.x).to_degrees())
}
