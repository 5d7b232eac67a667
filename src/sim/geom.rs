//! Axis-aligned box geometry
//!
//! The only collision shape the simulation knows. Queries are split into an
//! interior-allowed closest point (containment tests) and a boundary-only
//! closest point (push-out resolution).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned 2D box. `mins` componentwise <= `maxs` after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb2 {
    pub mins: Vec2,
    pub maxs: Vec2,
}

impl Aabb2 {
    /// Build from two opposite corners in any order; components are sorted.
    /// Scenario layouts pass flipped corner pairs and rely on this.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            mins: a.min(b),
            maxs: a.max(b),
        }
    }

    pub fn from_min_max_xy(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self::from_corners(Vec2::new(min_x, min_y), Vec2::new(max_x, max_y))
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.mins.x
            && point.x <= self.maxs.x
            && point.y >= self.mins.y
            && point.y <= self.maxs.y
    }

    /// Closest point in the box to `point`; a point already inside maps to itself
    pub fn closest_point_to(&self, point: Vec2) -> Vec2 {
        point.clamp(self.mins, self.maxs)
    }

    /// Closest point on the box *boundary* to `point`.
    ///
    /// Outside the box this is the same as `closest_point_to`; inside, the
    /// point projects to the nearest edge. Ties resolve in a fixed order
    /// (left, right, low y, high y) to keep runs reproducible.
    pub fn closest_boundary_point_to(&self, point: Vec2) -> Vec2 {
        if !self.contains_point(point) {
            return self.closest_point_to(point);
        }

        let to_min_x = point.x - self.mins.x;
        let to_max_x = self.maxs.x - point.x;
        let to_min_y = point.y - self.mins.y;
        let to_max_y = self.maxs.y - point.y;

        let nearest = to_min_x.min(to_max_x).min(to_min_y).min(to_max_y);
        if nearest == to_min_x {
            Vec2::new(self.mins.x, point.y)
        } else if nearest == to_max_x {
            Vec2::new(self.maxs.x, point.y)
        } else if nearest == to_min_y {
            Vec2::new(point.x, self.mins.y)
        } else {
            Vec2::new(point.x, self.maxs.y)
        }
    }

    /// Grow (or shrink, with negative padding) symmetrically on each axis
    pub fn add_padding(&mut self, pad_x: f32, pad_y: f32) {
        self.mins.x -= pad_x;
        self.mins.y -= pad_y;
        self.maxs.x += pad_x;
        self.maxs.y += pad_y;
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.mins += offset;
        self.maxs += offset;
    }
}
