//! Deterministic simulation module
//!
//! All world state and per-frame logic lives here. This module must stay
//! pure and deterministic:
//! - No wall-clock reads; time arrives as delta-seconds
//! - Fixed actor update order (players first, then NPCs, insertion order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod area;
pub mod geom;
pub mod input;
pub mod scenario;

pub use actor::{closeness_factor, run_relationships, Actor, ActorId, ActorState, Relationship};
pub use area::Area;
pub use geom::Aabb2;
pub use input::FrameInput;
pub use scenario::{Scenario, ScenarioState, StartFn, UpdateFn};
