//! Scenario: one self-contained run of actors and areas
//!
//! A scenario owns everything in the world and drives the per-frame update
//! in a fixed order: update hook, then player actors in insertion order,
//! then autonomous actors in insertion order. Players move first so that
//! NPC relationships targeting a player observe the already-moved position
//! from this frame.

use serde::Serialize;

use crate::clock::Clock;
use crate::sim::actor::{run_relationships, Actor, ActorId};
use crate::sim::area::Area;
use crate::sim::input::FrameInput;

/// Scenario lifecycle. Advisory only: the frame loop is not gated on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScenarioState {
    Inactive,
    Intro,
    Running,
    Ending,
}

/// Populates a scenario's actors, areas, and relationship wiring
pub type StartFn = fn(&mut Scenario);
/// Scenario-specific per-frame logic, invoked before any actor updates
pub type UpdateFn = fn(&mut Scenario, f32);

/// A named world: owned actors and areas plus the hooks that shape them
#[derive(Serialize)]
pub struct Scenario {
    pub name: String,
    pub areas: Vec<Area>,
    pub actors: Vec<Actor>,
    pub state: ScenarioState,
    pub time_entered_state: f64,
    pub clock: Clock,
    #[serde(skip)]
    start_fn: StartFn,
    #[serde(skip)]
    update_fn: UpdateFn,
}

impl Scenario {
    pub fn new(name: impl Into<String>, start_fn: StartFn, update_fn: UpdateFn) -> Self {
        Self {
            name: name.into(),
            areas: Vec::new(),
            actors: Vec::new(),
            state: ScenarioState::Inactive,
            time_entered_state: 0.0,
            clock: Clock::new(),
            start_fn,
            update_fn,
        }
    }

    /// Append an actor, returning its stable handle
    pub fn add_actor(&mut self, actor: Actor) -> ActorId {
        let id = ActorId(self.actors.len() as u32);
        self.actors.push(actor);
        id
    }

    pub fn add_area(&mut self, area: Area) {
        self.areas.push(area);
    }

    /// Enter the intro state and run the setup hook
    pub fn start(&mut self) {
        log::info!("starting scenario '{}'", self.name);
        self.change_state(ScenarioState::Intro);
        let start_fn = self.start_fn;
        start_fn(self);
        log::debug!(
            "scenario '{}' populated: {} actors, {} areas",
            self.name,
            self.actors.len(),
            self.areas.len()
        );
    }

    /// Advance one frame: scenario hook, players, then NPCs
    pub fn update(&mut self, input: &FrameInput, dt: f32) {
        self.clock.advance(dt);
        let dt = self.clock.delta_seconds();
        let now = self.clock.now();

        let update_fn = self.update_fn;
        update_fn(self, dt);

        for actor in self.actors.iter_mut().filter(|a| a.is_player) {
            actor.update_as_player(input, &self.areas, dt, now);
        }

        for index in 0..self.actors.len() {
            if self.actors[index].is_player {
                continue;
            }
            self.actors[index].previous_position = self.actors[index].position;
            run_relationships(&mut self.actors, index, dt, now);
            self.actors[index].update(&self.areas, dt, now);
        }
    }

    /// Drop every actor and area and return to Inactive
    pub fn wipe_clean(&mut self) {
        log::info!("wiping scenario '{}'", self.name);
        self.areas.clear();
        self.actors.clear();
        self.change_state(ScenarioState::Inactive);
    }

    pub fn change_state(&mut self, new_state: ScenarioState) -> ScenarioState {
        let previous = self.state;
        self.state = new_state;
        self.time_entered_state = self.clock.now();
        previous
    }

    pub fn seconds_in_current_state(&self) -> f64 {
        self.clock.now() - self.time_entered_state
    }
}
