//! Claustrophobia: push through a packed hall to the far exit
//!
//! A dense grid of strangers with strong personal-space repulsion fills a
//! walled corridor; the only way to the goal is through the crush.

use glam::Vec2;

use crate::color::Rgba;
use crate::sim::{Aabb2, Actor, ActorId, Area, Relationship, Scenario};

pub fn start(scenario: &mut Scenario) {
    let mut player = Actor::player_at(Vec2::new(100.0, 288.0));
    player.base_color = Rgba::BLUE;
    scenario.add_actor(player);

    // 11x9 grid, every other column staggered half a step down
    for column in 0..11 {
        for row in 0..9 {
            let x = 512.0 - (column as f32 - 5.0) * 50.0;
            let y = 288.0 + (row as f32 - 4.0) * 30.0 + (column % 2) as f32 * 16.0;
            let mut npc = Actor::at(Vec2::new(x, y));
            npc.base_color = Rgba::WHITE;
            scenario.add_actor(npc);
        }
    }

    let count = scenario.actors.len();
    for subject in 0..count {
        let dont_bump = Relationship {
            target: Some(ActorId(subject as u32)),
            inner_distance: 0.0,
            outer_distance: 20.0,
            attraction_at_inner: Vec2::new(-5.0, -5.0),
            ..Default::default()
        };
        for holder in 0..count {
            if holder == subject {
                continue;
            }
            scenario.actors[holder].relationships.push(dont_bump);
        }
    }

    scenario.add_area(Area::new(Aabb2::from_min_max_xy(0.0, 100.0, 1024.0, 476.0)));

    for bounds in [
        Aabb2::from_min_max_xy(0.0, 100.0, 10.0, 476.0),
        Aabb2::from_min_max_xy(1014.0, 10.0, 1024.0, 476.0),
        Aabb2::from_min_max_xy(0.0, 100.0, 1024.0, 100.0),
        Aabb2::from_min_max_xy(0.0, 476.0, 1024.0, 476.0),
    ] {
        let mut wall = Area::new(bounds);
        wall.color = Rgba::DARK_GREY;
        wall.alpha = 1.0;
        wall.impassable_to_player = true;
        wall.impassable_to_npc = true;
        wall.deep_shadow = false;
        scenario.add_area(wall);
    }

    let mut goal = Area::new(Aabb2::from_min_max_xy(928.0, 224.0, 1024.0, 352.0));
    goal.color = Rgba::WHITE;
    goal.alpha = 1.0;
    scenario.add_area(goal);
}

pub fn update(_scenario: &mut Scenario, _dt: f32) {}
