//! Self-doubt: three bodies, one set of controls
//!
//! Every actor here is player-controlled, so each keypress moves all three
//! down a zig-zag staircase of ledges that only one line can survive.

use glam::Vec2;

use crate::color::Rgba;
use crate::sim::{Aabb2, Actor, Area, Scenario};

pub fn start(scenario: &mut Scenario) {
    let mut left = Actor::player_at(Vec2::new(412.0, 50.0));
    left.base_color = Rgba::WHITE;
    scenario.add_actor(left);

    let mut right = Actor::player_at(Vec2::new(612.0, 50.0));
    right.base_color = Rgba::WHITE;
    scenario.add_actor(right);

    let mut center = Actor::player_at(Vec2::new(512.0, 100.0));
    center.base_color = Rgba::BLUE;
    scenario.add_actor(center);

    for bounds in [
        Aabb2::from_min_max_xy(0.0, 376.0, 1024.0, 576.0),
        Aabb2::from_min_max_xy(200.0, 176.0, 824.0, 376.0),
        Aabb2::from_min_max_xy(400.0, -176.0, 624.0, 176.0),
        Aabb2::from_min_max_xy(470.0, -576.0, 554.0, -376.0),
        Aabb2::from_min_max_xy(624.0, -76.0, 554.0, 76.0),
    ] {
        scenario.add_area(Area::new(bounds));
    }
}

pub fn update(_scenario: &mut Scenario, _dt: f32) {}
