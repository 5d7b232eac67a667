//! Tessellation of simulation state into vertex lists
//!
//! Rendering reads the scenario and never mutates it. The frame is built in
//! the same pass order every time: area shadows, areas, actor shadows, NPC
//! bodies, then player bodies on top.

pub mod shapes;
pub mod vertex;

pub use vertex::Vertex;

use glam::Vec2;

use crate::color::Rgba;
use crate::sim::{Actor, ActorState, Area, Scenario};

const CIRCLE_SEGMENTS: u32 = 32;
const OUTLINE_WIDTH: f32 = 2.0;
const SHADOW_ALPHA_SCALE: f32 = 0.1;

const AREA_SHADOW_OFFSET: Vec2 = Vec2::new(10.0, 10.0);
const AREA_SHADOW_PADDINGS: [f32; 3] = [0.0, 4.0, 8.0];

const ACTOR_SHADOW_OFFSET: Vec2 = Vec2::new(3.0, 3.0);
const ACTOR_SHADOW_RADIUS_SCALES: [f32; 3] = [1.2, 1.1, 1.0];

/// Tessellate one frame of a scenario
pub fn scenario_vertices(scenario: &Scenario) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    for area in &scenario.areas {
        push_area(&mut vertices, area, true);
    }
    for area in &scenario.areas {
        push_area(&mut vertices, area, false);
    }

    for actor in &scenario.actors {
        push_actor(&mut vertices, actor, true);
    }
    for actor in scenario.actors.iter().filter(|a| !a.is_player) {
        push_actor(&mut vertices, actor, false);
    }
    // Players draw last so they sit on top of the crowd
    for actor in scenario.actors.iter().filter(|a| a.is_player) {
        push_actor(&mut vertices, actor, false);
    }

    vertices
}

fn push_area(vertices: &mut Vec<Vertex>, area: &Area, shadow_pass: bool) {
    if shadow_pass {
        if !area.deep_shadow {
            return;
        }
        let shadow_color = Rgba::BLACK.to_array_with_alpha(SHADOW_ALPHA_SCALE * area.alpha);
        for padding in AREA_SHADOW_PADDINGS {
            let mut bounds = area.bounds;
            bounds.add_padding(padding, padding);
            bounds.translate(AREA_SHADOW_OFFSET);
            vertices.extend(shapes::rect(&bounds, shadow_color));
        }
    } else {
        vertices.extend(shapes::rect(
            &area.bounds,
            area.color.to_array_with_alpha(area.alpha),
        ));
    }
}

fn push_actor(vertices: &mut Vec<Vertex>, actor: &Actor, shadow_pass: bool) {
    if actor.state == ActorState::Dead {
        return;
    }

    if shadow_pass {
        let shadow_color = Rgba::BLACK.to_array_with_alpha(SHADOW_ALPHA_SCALE * actor.alpha());
        for scale in ACTOR_SHADOW_RADIUS_SCALES {
            vertices.extend(shapes::circle(
                actor.position + ACTOR_SHADOW_OFFSET,
                scale * actor.radius(),
                shadow_color,
                CIRCLE_SEGMENTS,
            ));
        }
    } else {
        vertices.extend(shapes::circle(
            actor.position,
            actor.radius(),
            actor.color().to_array_with_alpha(actor.alpha()),
            CIRCLE_SEGMENTS,
        ));
        vertices.extend(shapes::circle_outline(
            actor.position,
            actor.radius(),
            OUTLINE_WIDTH,
            Rgba::BLACK.to_array_with_alpha(actor.alpha()),
            CIRCLE_SEGMENTS,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Aabb2, FrameInput, Scenario};
    use glam::Vec2;

    fn noop_start(_: &mut Scenario) {}
    fn noop_update(_: &mut Scenario, _: f32) {}

    #[test]
    fn test_dead_actors_are_not_drawn() {
        let mut scenario = Scenario::new("render", noop_start, noop_update);
        scenario.add_area(Area::new(Aabb2::from_min_max_xy(0.0, 0.0, 100.0, 100.0)));
        let mut actor = Actor::at(Vec2::new(50.0, 50.0));
        let with_living = {
            scenario.add_actor(actor.clone());
            scenario_vertices(&scenario).len()
        };

        actor.change_state(ActorState::Dead, 0.0);
        scenario.actors[0] = actor;
        let with_dead = scenario_vertices(&scenario).len();
        assert!(with_dead < with_living);
    }

    #[test]
    fn test_shallow_shadow_area_skips_shadow_pass() {
        let mut scenario = Scenario::new("render", noop_start, noop_update);
        let mut wall = Area::new(Aabb2::from_min_max_xy(0.0, 0.0, 10.0, 100.0));
        wall.deep_shadow = false;
        scenario.add_area(wall.clone());
        let without_shadow = scenario_vertices(&scenario).len();

        wall.deep_shadow = true;
        scenario.areas[0] = wall;
        let with_shadow = scenario_vertices(&scenario).len();
        assert!(without_shadow < with_shadow);
    }

    #[test]
    fn test_rendering_does_not_disturb_the_simulation() {
        let mut scenario = Scenario::new("render", noop_start, noop_update);
        scenario.add_area(Area::new(Aabb2::from_min_max_xy(0.0, 0.0, 500.0, 500.0)));
        scenario.add_actor(Actor::player_at(Vec2::new(100.0, 100.0)));
        scenario.update(&FrameInput::default(), 1.0 / 60.0);

        let before = scenario.actors[0].position;
        let _ = scenario_vertices(&scenario);
        let _ = scenario_vertices(&scenario);
        assert_eq!(scenario.actors[0].position, before);
    }
}
