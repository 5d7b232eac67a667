//! Actors and the relationships between them
//!
//! An actor is a circle with a velocity (speed + heading), a visual identity,
//! and a list of directed relationships to other actors. Relationships are
//! evaluated sequentially every frame; each evaluation may displace the
//! owning actor immediately, so list order is part of the simulation's
//! observable behavior and must not be "fixed" with double-buffering.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::consts::{
    DEFAULT_NPC_RADIUS, PLAYER_ACCELERATION, PLAYER_MAX_MOVE_SPEED, SECONDS_TO_DRAG_TO_STOP,
    SECONDS_TO_FALL,
};
use crate::sim::area::Area;
use crate::sim::input::FrameInput;
use crate::{lerp_f32, lerp_f64, range_map, heading_from_velocity, velocity_from_heading};

/// Stable slot index into a scenario's actor store.
///
/// Actor lists are append-only while a scenario runs, so a slot index never
/// dangles; a handle past the end of the store is treated as "no target".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub u32);

impl ActorId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Actor lifecycle. Transitions are one-directional: Active -> Falling -> Dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorState {
    Active,
    Falling,
    Dead,
}

impl ActorState {
    /// Whether movement integration and area containment run in this state
    pub fn runs_physics(self) -> bool {
        matches!(self, ActorState::Active)
    }
}

/// One directed influence from the owning actor toward another actor.
///
/// Every distance-indexed pair interpolates between its inner and outer
/// value by the closeness factor. Positive attraction components pull
/// toward the target, negative push away. Mimic components copy a fraction
/// of the target's last per-frame displacement (negative counter-moves).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Relationship {
    pub target: Option<ActorId>,
    pub inner_distance: f32,
    pub outer_distance: f32,
    pub attraction_at_inner: Vec2,
    pub attraction_at_outer: Vec2,
    pub mimic_at_inner: Vec2,
    pub mimic_at_outer: Vec2,
    /// Simulation time after which the relationship stops contributing
    /// (0 = never expires)
    pub expire_at_inner: f64,
    pub expire_at_outer: f64,
    pub color_at_inner: Rgba,
    pub color_at_outer: Rgba,
    pub alpha_scale_at_inner: f32,
    pub alpha_scale_at_outer: f32,
    pub radius_scale_at_inner: f32,
    pub radius_scale_at_outer: f32,
}

impl Default for Relationship {
    fn default() -> Self {
        Self {
            target: None,
            inner_distance: 0.0,
            outer_distance: 0.0,
            attraction_at_inner: Vec2::ZERO,
            attraction_at_outer: Vec2::ZERO,
            mimic_at_inner: Vec2::ZERO,
            mimic_at_outer: Vec2::ZERO,
            expire_at_inner: 0.0,
            expire_at_outer: 0.0,
            color_at_inner: Rgba::DEFAULT_NPC,
            color_at_outer: Rgba::DEFAULT_NPC,
            alpha_scale_at_inner: 1.0,
            alpha_scale_at_outer: 1.0,
            radius_scale_at_inner: 1.0,
            radius_scale_at_outer: 1.0,
        }
    }
}

/// Copy of the fields a relationship evaluation reads from its target.
///
/// Taken before the owning actor is mutated, which keeps the sequential
/// in-frame semantics: the snapshot reflects whatever the target's state is
/// at this point in the frame, already-updated or not.
#[derive(Debug, Clone, Copy)]
pub struct TargetView {
    pub position: Vec2,
    pub previous_position: Vec2,
    pub radius: f32,
}

/// Normalized closeness in [0, 1]: 1 at/inside the inner distance,
/// 0 at/beyond the outer distance.
///
/// The max/min chain (rather than `clamp`) also pins a NaN edge distance
/// (degenerate radii/positions) to 0 instead of letting it propagate.
#[inline]
pub fn closeness_factor(inner_distance: f32, outer_distance: f32, edge_distance: f32) -> f32 {
    range_map(inner_distance, outer_distance, edge_distance, 1.0, 0.0)
        .max(0.0)
        .min(1.0)
}

/// A circular, mobile simulation entity (player or NPC)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub position: Vec2,
    pub previous_position: Vec2,
    pub movement_speed: f32,
    pub movement_heading_degrees: f32,
    pub is_player: bool,
    pub base_color: Rgba,
    pub base_alpha: f32,
    /// Product of this frame's relationship alpha contributions;
    /// rebuilt from 1.0 every frame, never carried over
    pub alpha_scale: f32,
    pub base_radius: f32,
    /// Product of this frame's relationship radius contributions
    pub radius_scale: f32,
    pub state: ActorState,
    pub time_entered_state: f64,
    pub relationships: Vec<Relationship>,
}

impl Default for Actor {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            previous_position: Vec2::ZERO,
            movement_speed: 0.0,
            movement_heading_degrees: 0.0,
            is_player: false,
            base_color: Rgba::DEFAULT_NPC,
            base_alpha: 1.0,
            alpha_scale: 1.0,
            base_radius: DEFAULT_NPC_RADIUS,
            radius_scale: 1.0,
            state: ActorState::Active,
            time_entered_state: 0.0,
            relationships: Vec::new(),
        }
    }
}

impl Actor {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            previous_position: position,
            ..Self::default()
        }
    }

    pub fn player_at(position: Vec2) -> Self {
        Self {
            is_player: true,
            ..Self::at(position)
        }
    }

    /// Current visual/collision radius
    pub fn radius(&self) -> f32 {
        self.base_radius * self.radius_scale
    }

    pub fn alpha(&self) -> f32 {
        self.base_alpha * self.alpha_scale
    }

    pub fn color(&self) -> Rgba {
        self.base_color
    }

    pub fn seconds_in_state(&self, now: f64) -> f64 {
        now - self.time_entered_state
    }

    pub fn change_state(&mut self, new_state: ActorState, now: f64) -> ActorState {
        let previous = self.state;
        self.state = new_state;
        self.time_entered_state = now;
        previous
    }

    fn start_falling(&mut self, now: f64) {
        self.change_state(ActorState::Falling, now);
        self.base_color = Rgba::WHITE;
        log::debug!("actor at {:?} started falling", self.position);
    }

    /// Per-frame update for an autonomous actor. Players are handled by
    /// `update_as_player` and skipped here.
    pub fn update(&mut self, areas: &[Area], dt: f32, now: f64) {
        if self.is_player {
            return;
        }

        // Relationship side effects were applied by the scenario pass just
        // before this call; previous_position was recorded there too.
        if self.state.runs_physics() {
            self.run_physics(areas, dt, now);
        } else if self.state == ActorState::Falling {
            self.continue_falling(now);
        }
    }

    /// Per-frame update for a player actor: input-driven acceleration
    /// instead of relationships, then the same physics/containment pass.
    pub fn update_as_player(&mut self, input: &FrameInput, areas: &[Area], dt: f32, now: f64) {
        if !self.is_player {
            return;
        }

        self.previous_position = self.position;
        if self.state == ActorState::Active {
            self.integrate_player_input(input, dt);
        }

        if self.state.runs_physics() {
            self.run_physics(areas, dt, now);
        } else if self.state == ActorState::Falling {
            self.continue_falling(now);
        }
    }

    fn integrate_player_input(&mut self, input: &FrameInput, dt: f32) {
        let mut intention = Vec2::ZERO;
        if input.up {
            intention += Vec2::new(0.0, -PLAYER_ACCELERATION);
        }
        if input.down {
            intention += Vec2::new(0.0, PLAYER_ACCELERATION);
        }
        if input.left {
            intention += Vec2::new(-PLAYER_ACCELERATION, 0.0);
        }
        if input.right {
            intention += Vec2::new(PLAYER_ACCELERATION, 0.0);
        }

        // A zero intention stays zero; otherwise renormalize so diagonals
        // are not faster than a single axis
        intention = intention.normalize_or_zero() * (dt * PLAYER_ACCELERATION);

        let mut velocity =
            velocity_from_heading(self.movement_speed, self.movement_heading_degrees);
        velocity += intention * dt;
        let (speed, heading) = heading_from_velocity(velocity);
        self.movement_speed = speed;
        self.movement_heading_degrees = heading;

        if self.movement_speed > PLAYER_MAX_MOVE_SPEED {
            velocity = velocity.normalize_or_zero() * PLAYER_MAX_MOVE_SPEED;
            let (speed, heading) = heading_from_velocity(velocity);
            self.movement_speed = speed;
            self.movement_heading_degrees = heading;
        }

        if intention == Vec2::ZERO {
            let drag_fraction = dt / SECONDS_TO_DRAG_TO_STOP;
            self.movement_speed -= drag_fraction * PLAYER_MAX_MOVE_SPEED;
            if self.movement_speed < 0.0 {
                self.movement_speed = 0.0;
            }
        }
    }

    /// Integrate velocity, resolve impassable areas in list order, and start
    /// falling if no passable area holds this actor afterward.
    fn run_physics(&mut self, areas: &[Area], dt: f32, now: f64) {
        let velocity = velocity_from_heading(self.movement_speed, self.movement_heading_degrees);
        self.position += velocity * dt;

        let mut inside_a_passable_area = false;
        for area in areas {
            if area.is_impassable_to(self.is_player) {
                if let Some(corrected) = area.force_circle_outside(self.position, self.radius()) {
                    self.position = corrected;
                }
            } else if area.is_circle_inside(self.position, self.radius()) {
                inside_a_passable_area = true;
            }
        }

        if !inside_a_passable_area {
            self.start_falling(now);
        }
    }

    /// Shrink toward nothing over the fall duration, then die
    fn continue_falling(&mut self, now: f64) {
        let fraction_fallen =
            ((self.seconds_in_state(now) / SECONDS_TO_FALL) as f32).max(0.0).min(1.0);
        self.radius_scale *= 1.0 - fraction_fallen;
        if fraction_fallen >= 1.0 {
            self.change_state(ActorState::Dead, now);
            log::debug!("actor at {:?} fell to its death", self.position);
        }
    }

    /// Evaluate one relationship against a snapshot of its target.
    ///
    /// Side effects happen in a fixed order: accumulator multiplies, then the
    /// mimic displacement, then the attraction displacement computed from the
    /// already-mimic-displaced position.
    fn run_relationship(&mut self, relationship: Relationship, other: &TargetView, dt: f32, now: f64) {
        let center_distance = (other.position - self.position).length();
        let edge_distance = center_distance - (self.radius() + other.radius);
        let closeness = closeness_factor(
            relationship.inner_distance,
            relationship.outer_distance,
            edge_distance,
        );

        let expire_at = lerp_f64(
            relationship.expire_at_outer,
            relationship.expire_at_inner,
            closeness,
        );
        if expire_at > 0.0 && now >= expire_at {
            return;
        }

        let attraction = relationship
            .attraction_at_outer
            .lerp(relationship.attraction_at_inner, closeness);
        let mimic = relationship
            .mimic_at_outer
            .lerp(relationship.mimic_at_inner, closeness);
        // TODO: blend base_color toward the interpolated relationship color
        // once the renderer takes a per-actor tint
        let alpha_scale = lerp_f32(
            relationship.alpha_scale_at_outer,
            relationship.alpha_scale_at_inner,
            closeness,
        );
        let radius_scale = lerp_f32(
            relationship.radius_scale_at_outer,
            relationship.radius_scale_at_inner,
            closeness,
        );

        self.alpha_scale *= alpha_scale;
        self.radius_scale *= radius_scale;

        let other_displacement = other.position - other.previous_position;
        self.position += other_displacement * mimic;

        let to_other = other.position - self.position;
        self.position += to_other * attraction * dt;
    }
}

/// Re-evaluate every relationship of `actors[index]`, resetting its
/// alpha/radius accumulators first.
///
/// Runs over a plain mutable slice in a single pass; an earlier actor's
/// relationships can observe a later target's not-yet-updated position and
/// vice versa, which is the intended order-dependent dynamic.
pub fn run_relationships(actors: &mut [Actor], index: usize, dt: f32, now: f64) {
    actors[index].alpha_scale = 1.0;
    actors[index].radius_scale = 1.0;

    for relationship_index in 0..actors[index].relationships.len() {
        let relationship = actors[index].relationships[relationship_index];
        let Some(target) = relationship.target else {
            continue;
        };
        // A handle past the store or pointing back at the owner is no target
        if target.index() == index {
            continue;
        }
        let Some(other) = actors.get(target.index()) else {
            continue;
        };
        let other = TargetView {
            position: other.position,
            previous_position: other.previous_position,
            radius: other.radius(),
        };
        actors[index].run_relationship(relationship, &other, dt, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    fn passable_floor() -> Vec<Area> {
        vec![Area::new(crate::sim::geom::Aabb2::from_min_max_xy(
            -10_000.0, -10_000.0, 10_000.0, 10_000.0,
        ))]
    }

    #[test]
    fn test_closeness_endpoints() {
        assert_eq!(closeness_factor(0.0, 20.0, 0.0), 1.0);
        assert_eq!(closeness_factor(0.0, 20.0, 20.0), 0.0);
        assert_eq!(closeness_factor(0.0, 20.0, 10.0), 0.5);
    }

    #[test]
    fn test_closeness_overlapping_actors_clamps_high() {
        // Overlapping actors produce a negative edge distance
        assert_eq!(closeness_factor(0.0, 20.0, -15.0), 1.0);
    }

    #[test]
    fn test_closeness_collapsed_range_is_outer() {
        // inner == outer == 0 must select the outer values (closeness 0)
        assert_eq!(closeness_factor(0.0, 0.0, 5.0), 0.0);
        assert_eq!(closeness_factor(0.0, 0.0, -5.0), 0.0);
    }

    #[test]
    fn test_closeness_nan_edge_distance_pins_to_zero() {
        assert_eq!(closeness_factor(0.0, 20.0, f32::NAN), 0.0);
    }

    proptest! {
        #[test]
        fn prop_closeness_always_in_unit_interval(
            inner in -1.0e6f32..1.0e6,
            outer in -1.0e6f32..1.0e6,
            edge in -1.0e6f32..1.0e6,
        ) {
            let c = closeness_factor(inner, outer, edge);
            prop_assert!((0.0..=1.0).contains(&c));
        }
    }

    #[test]
    fn test_repulsion_moves_actor_away() {
        // Don't-bump pair five units apart: inner 0, outer 20, push (-5,-5)
        let mut other = Actor::at(Vec2::new(105.0, 100.0));
        other.base_radius = 0.0;
        let mut me = Actor::at(Vec2::new(100.0, 100.0));
        me.base_radius = 0.0;
        me.relationships.push(Relationship {
            target: Some(ActorId(1)),
            inner_distance: 0.0,
            outer_distance: 20.0,
            attraction_at_inner: Vec2::new(-5.0, -5.0),
            ..Default::default()
        });

        let mut actors = vec![me, other];
        run_relationships(&mut actors, 0, DT, 0.0);

        // Displacement roughly opposite the direction toward the other actor
        let moved = actors[0].position - Vec2::new(100.0, 100.0);
        assert!(moved.x < 0.0, "moved toward the other actor: {moved:?}");
        assert!(moved.y.abs() < 1e-4);
        assert!((0.0..=1.0).contains(&actors[0].radius_scale));
    }

    #[test]
    fn test_attraction_pulls_actor_closer() {
        let mut me = Actor::at(Vec2::new(100.0, 100.0));
        me.relationships.push(Relationship {
            target: Some(ActorId(1)),
            inner_distance: 0.0,
            outer_distance: 500.0,
            attraction_at_inner: Vec2::new(1.5, 1.5),
            attraction_at_outer: Vec2::new(1.5, 1.5),
            ..Default::default()
        });
        let other = Actor::at(Vec2::new(200.0, 100.0));

        let mut actors = vec![me, other];
        let before = (actors[1].position - actors[0].position).length();
        run_relationships(&mut actors, 0, DT, 0.0);
        let after = (actors[1].position - actors[0].position).length();
        assert!(after < before);
    }

    #[test]
    fn test_mimic_copies_target_displacement() {
        let mut me = Actor::at(Vec2::new(0.0, 0.0));
        me.relationships.push(Relationship {
            target: Some(ActorId(1)),
            mimic_at_outer: Vec2::new(1.0, 1.0),
            ..Default::default()
        });
        let mut other = Actor::at(Vec2::new(300.0, 0.0));
        other.previous_position = Vec2::new(298.0, -1.0);

        let mut actors = vec![me, other];
        run_relationships(&mut actors, 0, DT, 0.0);

        // Collapsed 0/0 distance range selects the outer mimic of (1,1),
        // so the full displacement is copied
        assert!((actors[0].position.x - 2.0).abs() < 1e-4);
        assert!((actors[0].position.y - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_unset_and_bad_targets_are_skipped() {
        let mut me = Actor::at(Vec2::new(50.0, 50.0));
        me.relationships.push(Relationship::default()); // no target
        me.relationships.push(Relationship {
            target: Some(ActorId(99)), // past the store
            attraction_at_outer: Vec2::new(10.0, 10.0),
            ..Default::default()
        });
        me.relationships.push(Relationship {
            target: Some(ActorId(0)), // self
            attraction_at_outer: Vec2::new(10.0, 10.0),
            ..Default::default()
        });

        let mut actors = vec![me];
        run_relationships(&mut actors, 0, DT, 0.0);
        assert_eq!(actors[0].position, Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_expired_relationship_contributes_nothing() {
        let mut me = Actor::at(Vec2::ZERO);
        me.relationships.push(Relationship {
            target: Some(ActorId(1)),
            attraction_at_outer: Vec2::new(2.0, 2.0),
            expire_at_outer: 1.0,
            ..Default::default()
        });
        let other = Actor::at(Vec2::new(100.0, 0.0));
        let mut actors = vec![me, other];

        // Before expiry the pull applies
        run_relationships(&mut actors, 0, DT, 0.5);
        assert!(actors[0].position.x > 0.0);

        // At/after expiry it no longer does
        let frozen = actors[0].position;
        run_relationships(&mut actors, 0, DT, 1.0);
        assert_eq!(actors[0].position, frozen);
    }

    #[test]
    fn test_accumulators_rebuild_each_frame() {
        let mut me = Actor::at(Vec2::ZERO);
        me.relationships.push(Relationship {
            target: Some(ActorId(1)),
            radius_scale_at_outer: 0.5,
            alpha_scale_at_outer: 0.25,
            ..Default::default()
        });
        let other = Actor::at(Vec2::new(400.0, 0.0));
        let mut actors = vec![me, other];

        for _ in 0..3 {
            run_relationships(&mut actors, 0, DT, 0.0);
        }
        // Not 0.5^3: the product is reset to 1.0 before each pass
        assert!((actors[0].radius_scale - 0.5).abs() < 1e-6);
        assert!((actors[0].alpha_scale - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_actor_falls_when_outside_all_passable_areas() {
        let areas = vec![Area::new(crate::sim::geom::Aabb2::from_min_max_xy(
            0.0, 0.0, 100.0, 100.0,
        ))];
        let mut actor = Actor::at(Vec2::new(500.0, 500.0));
        actor.update(&areas, DT, 10.0);
        assert_eq!(actor.state, ActorState::Falling);
        assert_eq!(actor.time_entered_state, 10.0);
        assert_eq!(actor.base_color, Rgba::WHITE);
    }

    #[test]
    fn test_falling_actor_shrinks_linearly_and_dies_on_time() {
        let areas: Vec<Area> = Vec::new();
        let mut actor = Actor::at(Vec2::ZERO);
        actor.update(&areas, DT, 0.0); // no areas at all: falls immediately
        assert_eq!(actor.state, ActorState::Falling);

        // Accumulators reset each frame, so the shrink tracks elapsed time
        actor.radius_scale = 1.0;
        actor.update(&areas, DT, 1.5);
        assert!((actor.radius_scale - 0.5).abs() < 1e-4);
        assert_eq!(actor.state, ActorState::Falling);

        actor.radius_scale = 1.0;
        actor.update(&areas, DT, 3.0);
        assert_eq!(actor.state, ActorState::Dead);
        assert!(actor.radius_scale.abs() < 1e-6);
    }

    #[test]
    fn test_player_at_rest_stays_put() {
        let areas = passable_floor();
        let mut player = Actor::player_at(Vec2::new(100.0, 100.0));
        player.update_as_player(&FrameInput::default(), &areas, 0.016, 0.016);
        assert_eq!(player.position, Vec2::new(100.0, 100.0));
        assert_eq!(player.movement_speed, 0.0);
        assert_eq!(player.state, ActorState::Active);
    }

    #[test]
    fn test_player_accelerates_and_clamps_to_max_speed() {
        let areas = passable_floor();
        let mut player = Actor::player_at(Vec2::new(0.0, 0.0));
        let input = FrameInput {
            right: true,
            ..Default::default()
        };
        for frame in 1..=120 {
            player.update_as_player(&input, &areas, DT, DT as f64 * frame as f64);
        }
        assert!(player.position.x > 0.0);
        assert!(player.movement_speed <= PLAYER_MAX_MOVE_SPEED + 1e-3);
    }

    #[test]
    fn test_player_drags_to_stop() {
        let areas = passable_floor();
        let mut player = Actor::player_at(Vec2::ZERO);
        player.movement_speed = PLAYER_MAX_MOVE_SPEED;

        // Full drag takes SECONDS_TO_DRAG_TO_STOP of no input
        let frames = (SECONDS_TO_DRAG_TO_STOP / DT).ceil() as usize + 1;
        for frame in 1..=frames {
            player.update_as_player(
                &FrameInput::default(),
                &areas,
                DT,
                DT as f64 * frame as f64,
            );
        }
        assert_eq!(player.movement_speed, 0.0);
    }

    #[test]
    fn test_npc_is_pushed_out_of_impassable_area() {
        let mut wall = Area::new(crate::sim::geom::Aabb2::from_min_max_xy(
            200.0, 0.0, 210.0, 100.0,
        ));
        wall.impassable_to_npc = true;
        let floor = Area::new(crate::sim::geom::Aabb2::from_min_max_xy(
            0.0, 0.0, 400.0, 100.0,
        ));
        let areas = vec![floor, wall.clone()];

        // Walking into the wall face from the west
        let mut npc = Actor::at(Vec2::new(195.0, 50.0));
        npc.update(&areas, DT, 0.0);
        assert_eq!(npc.position, Vec2::new(190.0, 50.0));
        assert!(!wall.is_circle_inside(npc.position, npc.radius()));
        assert_eq!(npc.state, ActorState::Active);
    }
}
