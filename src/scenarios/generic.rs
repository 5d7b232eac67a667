//! Smoke-test layout: two idle NPCs, one player, two overlapping rooms

use glam::Vec2;

use crate::color::Rgba;
use crate::sim::{Aabb2, Actor, Area, Scenario};

pub fn start(scenario: &mut Scenario) {
    scenario.add_actor(Actor::at(Vec2::new(150.0, 350.0)));
    scenario.add_actor(Actor::at(Vec2::new(180.0, 380.0)));

    let mut player = Actor::player_at(Vec2::new(250.0, 300.0));
    player.base_color = Rgba::PURPLE;
    scenario.add_actor(player);

    scenario.add_area(Area::new(Aabb2::from_min_max_xy(100.0, 150.0, 400.0, 500.0)));
    scenario.add_area(Area::new(Aabb2::from_min_max_xy(400.0, 250.0, 600.0, 350.0)));
}

pub fn update(_scenario: &mut Scenario, _dt: f32) {}
