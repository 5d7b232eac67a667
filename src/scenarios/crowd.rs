//! Crowd: a seeded scatter of onlookers
//!
//! Generated rather than hand-placed. Every run with the same seed lays out
//! and simulates identically; the mix of eager, shy, and fair-weather
//! followers comes from the RNG.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::color::Rgba;
use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::sim::{Aabb2, Actor, ActorId, Area, Relationship, Scenario};

const CROWD_SEED: u64 = 0x5EED_CAFE;
const CROWD_SIZE: usize = 40;

pub fn start(scenario: &mut Scenario) {
    let mut rng = Pcg32::seed_from_u64(CROWD_SEED);

    let mut player = Actor::player_at(Vec2::new(150.0, 288.0));
    player.base_color = Rgba::BLUE;
    let player_id = scenario.add_actor(player);

    for n in 0..CROWD_SIZE {
        let position = Vec2::new(
            rng.random_range(220.0..950.0),
            rng.random_range(80.0..500.0),
        );
        let mut npc = Actor::at(position);
        npc.base_color = Rgba::WHITE;

        let inner = rng.random_range(40.0..80.0);
        let outer = inner + rng.random_range(40.0..120.0);
        let pull = rng.random_range(0.5..1.5);
        // Every fifth onlooker is shy and backs away instead
        let pull = if n % 5 == 4 { -pull } else { pull };
        let mut toward_player = Relationship {
            target: Some(player_id),
            inner_distance: inner,
            outer_distance: outer,
            attraction_at_inner: Vec2::splat(pull),
            ..Default::default()
        };
        // Some interest wears off partway into the run
        if rng.random_range(0.0..1.0) < 0.25 {
            let expires = rng.random_range(10.0..30.0);
            toward_player.expire_at_inner = expires;
            toward_player.expire_at_outer = expires;
        }
        npc.relationships.push(toward_player);
        scenario.add_actor(npc);
    }

    let count = scenario.actors.len();
    for subject in 0..count {
        let dont_bump = Relationship {
            target: Some(ActorId(subject as u32)),
            inner_distance: 0.0,
            outer_distance: 24.0,
            attraction_at_inner: Vec2::new(-2.0, -2.0),
            ..Default::default()
        };
        for holder in 0..count {
            if holder == subject {
                continue;
            }
            scenario.actors[holder].relationships.push(dont_bump);
        }
    }

    scenario.add_area(Area::new(Aabb2::from_min_max_xy(
        0.0,
        0.0,
        WORLD_WIDTH,
        WORLD_HEIGHT,
    )));
}

pub fn update(_scenario: &mut Scenario, _dt: f32) {}
