//! Rectangular areas with passability rules
//!
//! Areas are static for the lifetime of a scenario. An actor standing in no
//! area that permits its class starts falling, so area queries are the floor
//! the whole simulation walks on.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::sim::geom::Aabb2;

/// A static rectangular region
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Area {
    pub bounds: Aabb2,
    pub color: Rgba,
    pub alpha: f32,
    pub impassable_to_player: bool,
    pub impassable_to_npc: bool,
    /// Draw the padded drop-shadow layers behind this area
    pub deep_shadow: bool,
}

impl Default for Area {
    fn default() -> Self {
        Self {
            bounds: Aabb2::from_min_max_xy(100.0, 100.0, 200.0, 200.0),
            color: Rgba::WHITE,
            alpha: 0.5,
            impassable_to_player: false,
            impassable_to_npc: false,
            deep_shadow: true,
        }
    }
}

impl Area {
    pub fn new(bounds: Aabb2) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }

    /// Whether this area blocks the given actor class
    pub fn is_impassable_to(&self, is_player: bool) -> bool {
        if is_player {
            self.impassable_to_player
        } else {
            self.impassable_to_npc
        }
    }

    /// True if a circle at `center` touches or overlaps this area.
    ///
    /// Uses the interior-allowed closest point, so a center anywhere within
    /// the bounds counts, and a center outside counts while the circle still
    /// reaches the nearest edge.
    pub fn is_circle_inside(&self, center: Vec2, radius: f32) -> bool {
        let closest = self.bounds.closest_point_to(center);
        (closest - center).length() < radius
    }

    /// Push a circle overlapping the boundary region out to exactly one
    /// radius from the closest boundary point. Returns the corrected center,
    /// or `None` if the circle was not overlapping.
    ///
    /// A center sitting exactly on the boundary has no defined push
    /// direction; it resolves along +X so the outcome is deterministic.
    pub fn force_circle_outside(&self, center: Vec2, radius: f32) -> Option<Vec2> {
        let closest = self.bounds.closest_boundary_point_to(center);
        let displacement = closest - center;
        if displacement.length() >= radius {
            return None;
        }

        let away = -displacement;
        let direction = away.normalize_or_zero();
        let direction = if direction == Vec2::ZERO { Vec2::X } else { direction };
        Some(closest + direction * radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Area {
        Area::new(Aabb2::from_min_max_xy(min_x, min_y, max_x, max_y))
    }

    #[test]
    fn test_circle_inside_by_center() {
        let a = area(0.0, 0.0, 100.0, 100.0);
        assert!(a.is_circle_inside(Vec2::new(50.0, 50.0), 10.0));
    }

    #[test]
    fn test_circle_inside_by_overlap_only() {
        let a = area(0.0, 0.0, 100.0, 100.0);
        // Center outside, but the edge is within one radius
        assert!(a.is_circle_inside(Vec2::new(105.0, 50.0), 10.0));
        assert!(!a.is_circle_inside(Vec2::new(120.0, 50.0), 10.0));
    }

    #[test]
    fn test_touching_exactly_is_outside() {
        let a = area(0.0, 0.0, 100.0, 100.0);
        // Distance equals radius: strict less-than, so not inside
        assert!(!a.is_circle_inside(Vec2::new(110.0, 50.0), 10.0));
    }

    #[test]
    fn test_force_outside_pushes_to_radius() {
        // Center outside, overlapping the east edge
        let a = area(0.0, 0.0, 100.0, 100.0);
        let pushed = a
            .force_circle_outside(Vec2::new(105.0, 50.0), 10.0)
            .expect("overlapping circle must be pushed");

        assert_eq!(pushed, Vec2::new(110.0, 50.0));
        let boundary = a.bounds.closest_boundary_point_to(pushed);
        assert!(((pushed - boundary).length() - 10.0).abs() < 1e-4);
        assert!(!a.is_circle_inside(pushed, 10.0));
    }

    #[test]
    fn test_force_outside_idempotent() {
        let a = area(0.0, 0.0, 100.0, 100.0);
        let once = a
            .force_circle_outside(Vec2::new(105.0, 40.0), 10.0)
            .expect("first push");
        assert!(a.force_circle_outside(once, 10.0).is_none());
    }

    #[test]
    fn test_force_outside_degenerate_center_on_boundary() {
        let a = area(0.0, 0.0, 100.0, 100.0);
        // Center exactly on the left edge: displacement is zero, +X fallback
        let pushed = a
            .force_circle_outside(Vec2::new(0.0, 50.0), 10.0)
            .expect("boundary center still overlaps");
        assert_eq!(pushed, Vec2::new(10.0, 50.0));
    }

    #[test]
    fn test_force_outside_deep_interior_is_left_alone() {
        // Boundary-distance gate: a circle far from every edge is not moved
        let a = area(0.0, 0.0, 1000.0, 1000.0);
        assert!(a.force_circle_outside(Vec2::new(500.0, 500.0), 10.0).is_none());
    }

    #[test]
    fn test_passability_by_class() {
        let mut a = area(0.0, 0.0, 10.0, 10.0);
        a.impassable_to_npc = true;
        assert!(a.is_impassable_to(false));
        assert!(!a.is_impassable_to(true));
    }
}
