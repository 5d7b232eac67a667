//! Responsibility: a flock that trails the player everywhere
//!
//! Followers are pulled toward the player from far away but repelled when
//! they crowd in, settling into a shell that follows every move.

use glam::Vec2;

use crate::color::Rgba;
use crate::sim::{Aabb2, Actor, ActorId, Area, Relationship, Scenario};

pub fn start(scenario: &mut Scenario) {
    let player_position = Vec2::new(200.0, 200.0);
    let mut player = Actor::player_at(player_position);
    player.base_color = Rgba::BLUE;
    let player_id = scenario.add_actor(player);

    let follow_player = Relationship {
        target: Some(player_id),
        inner_distance: 16.0,
        outer_distance: 256.0,
        attraction_at_inner: Vec2::new(-0.25, -0.25),
        attraction_at_outer: Vec2::new(0.75, 0.75),
        ..Default::default()
    };

    // 5x5 ring of followers with the player's own spot left open
    for column in 0..5 {
        for row in 0..5 {
            if column == 2 && row == 2 {
                continue;
            }
            let offset = Vec2::new((column as f32 - 2.0) * 30.0, (row as f32 - 2.0) * 30.0);
            let mut npc = Actor::at(player_position - offset);
            npc.base_color = Rgba::WHITE;
            npc.relationships.push(follow_player);
            scenario.add_actor(npc);
        }
    }

    let count = scenario.actors.len();
    for subject in 0..count {
        let dont_bump = Relationship {
            target: Some(ActorId(subject as u32)),
            inner_distance: 0.0,
            outer_distance: 64.0,
            attraction_at_inner: Vec2::new(-3.0, -3.0),
            ..Default::default()
        };
        for holder in 0..count {
            if holder == subject {
                continue;
            }
            scenario.actors[holder].relationships.push(dont_bump);
        }
    }

    scenario.add_area(Area::new(Aabb2::from_min_max_xy(0.0, 0.0, 1024.0, 576.0)));

    let mut goal = Area::new(Aabb2::from_min_max_xy(928.0, 32.0, 1024.0, 128.0));
    goal.color = Rgba::WHITE;
    goal.alpha = 1.0;
    scenario.add_area(goal);
}

pub fn update(_scenario: &mut Scenario, _dt: f32) {}
