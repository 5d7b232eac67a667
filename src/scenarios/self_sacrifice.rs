//! Self-sacrifice: mimics march where the player does, over a shorter floor
//!
//! Same mirrored-mimic setup as schadenfreude, but the player's lane keeps
//! going where the mimics' lane ends: walking to the player's goal can march
//! the crowd off its floor.

use glam::Vec2;

use crate::color::Rgba;
use crate::sim::{Aabb2, Actor, Area, Relationship, Scenario};

const PLAYER_LANE_LEFT: f32 = 100.0;
const PLAYER_LANE_RIGHT: f32 = 412.0;
const PLAYER_LANE_TOP: f32 = 150.0;
const LANE_BOTTOM: f32 = 466.0;
const GOAL_BOTTOM: f32 = 100.0;

const MIMIC_LANE_LEFT: f32 = 612.0;
const MIMIC_LANE_RIGHT: f32 = 924.0;

const COLUMNS: usize = 3;
const ROWS: usize = 6;

pub fn start(scenario: &mut Scenario) {
    let lane_width = MIMIC_LANE_RIGHT - MIMIC_LANE_LEFT;
    let lane_height = LANE_BOTTOM - GOAL_BOTTOM;
    let cell_width = (lane_width / COLUMNS as f32).trunc();
    let cell_height = (lane_height / (ROWS + 3) as f32).trunc();
    let base_y = LANE_BOTTOM - cell_height / 2.0 - 72.0;

    let mut player = Actor::player_at(Vec2::new(
        PLAYER_LANE_LEFT + (PLAYER_LANE_RIGHT - PLAYER_LANE_LEFT) / 2.0,
        base_y + (PLAYER_LANE_TOP - GOAL_BOTTOM),
    ));
    player.base_color = Rgba::BLUE;
    let player_id = scenario.add_actor(player);

    let shadow_player = Relationship {
        target: Some(player_id),
        mimic_at_outer: Vec2::new(1.0, 1.0),
        ..Default::default()
    };

    for column in 0..COLUMNS {
        for row in 0..ROWS {
            let mut npc = Actor::at(Vec2::new(
                MIMIC_LANE_LEFT + cell_width * column as f32 + cell_width / 2.0,
                base_y - cell_height * row as f32,
            ));
            npc.base_color = Rgba::WHITE;
            npc.relationships.push(shadow_player);
            scenario.add_actor(npc);
        }
    }

    scenario.add_area(Area::new(Aabb2::from_min_max_xy(
        PLAYER_LANE_LEFT,
        PLAYER_LANE_TOP,
        PLAYER_LANE_RIGHT,
        LANE_BOTTOM,
    )));

    let mut player_goal = Area::new(Aabb2::from_min_max_xy(
        PLAYER_LANE_LEFT,
        0.0,
        PLAYER_LANE_RIGHT,
        GOAL_BOTTOM,
    ));
    player_goal.color = Rgba::WHITE;
    player_goal.alpha = 1.0;
    scenario.add_area(player_goal);

    scenario.add_area(Area::new(Aabb2::from_min_max_xy(
        MIMIC_LANE_LEFT,
        0.0,
        MIMIC_LANE_RIGHT,
        LANE_BOTTOM,
    )));

    let mut mimic_goal = Area::new(Aabb2::from_min_max_xy(
        MIMIC_LANE_LEFT,
        0.0,
        MIMIC_LANE_RIGHT,
        GOAL_BOTTOM,
    ));
    mimic_goal.color = Rgba::WHITE;
    mimic_goal.alpha = 1.0;
    scenario.add_area(mimic_goal);
}

pub fn update(_scenario: &mut Scenario, _dt: f32) {}
