//! Popularity: a crowd that flocks to the player once it gets close enough
//!
//! Everyone wants to stand near the player but nobody wants to touch, so the
//! player drags an ever-growing entourage through the corridors.

use glam::Vec2;

use crate::color::Rgba;
use crate::sim::{Aabb2, Actor, ActorId, Area, Relationship, Scenario};

const FOLLOWER_SPOTS: [(f32, f32); 19] = [
    (150.0, 374.0),
    (86.0, 182.0),
    (246.0, 54.0),
    (278.0, 54.0),
    (534.0, 86.0),
    (406.0, 374.0),
    (470.0, 374.0),
    (502.0, 502.0),
    (598.0, 438.0),
    (694.0, 502.0),
    (854.0, 502.0),
    (790.0, 406.0),
    (854.0, 406.0),
    (790.0, 310.0),
    (854.0, 310.0),
    (790.0, 214.0),
    (854.0, 214.0),
    (790.0, 118.0),
    (854.0, 118.0),
];

pub fn start(scenario: &mut Scenario) {
    let mut player = Actor::player_at(Vec2::new(118.0, 502.0));
    player.base_color = Rgba::BLUE;
    let player_id = scenario.add_actor(player);

    let follow_player = Relationship {
        target: Some(player_id),
        inner_distance: 75.0,
        outer_distance: 125.0,
        attraction_at_inner: Vec2::new(1.5, 1.5),
        ..Default::default()
    };

    for (x, y) in FOLLOWER_SPOTS {
        let mut npc = Actor::at(Vec2::new(x, y));
        npc.base_color = Rgba::WHITE;
        npc.relationships.push(follow_player);
        scenario.add_actor(npc);
    }

    // Nobody stands inside anybody else
    let count = scenario.actors.len();
    for subject in 0..count {
        let dont_bump = Relationship {
            target: Some(ActorId(subject as u32)),
            inner_distance: 0.0,
            outer_distance: 32.0,
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

    for (left, top, width, height) in [
        (64.0, 32.0, 128.0, 512.0),
        (64.0, 32.0, 512.0, 128.0),
        (384.0, 32.0, 128.0, 416.0),
        (384.0, 416.0, 512.0, 128.0),
        (768.0, 64.0, 128.0, 352.0),
        (768.0, 32.0, 256.0, 96.0),
    ] {
        scenario.add_area(Area::new(Aabb2::from_min_max_xy(
            left,
            top,
            left + width,
            top + height,
        )));
    }

    let mut goal = Area::new(Aabb2::from_min_max_xy(928.0, 32.0, 1024.0, 128.0));
    goal.color = Rgba::WHITE;
    goal.alpha = 1.0;
    scenario.add_area(goal);
}

pub fn update(_scenario: &mut Scenario, _dt: f32) {}
