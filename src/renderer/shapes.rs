//! Shape generation for 2D primitives
//!
//! Everything tessellates to plain triangle lists so the presenter can
//! concatenate and upload one buffer per frame.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::geom::Aabb2;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a circle outline as a thin ring band
pub fn circle_outline(
    center: Vec2,
    radius: f32,
    width: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let inner_radius = (radius - width / 2.0).max(0.0);
    let outer_radius = radius + width / 2.0;
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let inner1 = center + inner_radius * Vec2::new(theta1.cos(), theta1.sin());
        let outer1 = center + outer_radius * Vec2::new(theta1.cos(), theta1.sin());
        let inner2 = center + inner_radius * Vec2::new(theta2.cos(), theta2.sin());
        let outer2 = center + outer_radius * Vec2::new(theta2.cos(), theta2.sin());

        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(bounds: &Aabb2, color: [f32; 4]) -> Vec<Vertex> {
    let (mins, maxs) = (bounds.mins, bounds.maxs);
    vec![
        Vertex::new(mins.x, mins.y, color),
        Vertex::new(maxs.x, mins.y, color),
        Vertex::new(maxs.x, maxs.y, color),
        Vertex::new(mins.x, mins.y, color),
        Vertex::new(maxs.x, maxs.y, color),
        Vertex::new(mins.x, maxs.y, color),
    ]
}

/// Generate vertices for a rectangle outline of the given edge width
pub fn rect_outline(bounds: &Aabb2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut outer = *bounds;
    outer.add_padding(width / 2.0, width / 2.0);
    let mut inner = *bounds;
    inner.add_padding(-width / 2.0, -width / 2.0);

    let mut vertices = Vec::with_capacity(24);
    // Top, bottom, left, right bands
    vertices.extend(rect(
        &Aabb2::from_min_max_xy(outer.mins.x, outer.mins.y, outer.maxs.x, inner.mins.y),
        color,
    ));
    vertices.extend(rect(
        &Aabb2::from_min_max_xy(outer.mins.x, inner.maxs.y, outer.maxs.x, outer.maxs.y),
        color,
    ));
    vertices.extend(rect(
        &Aabb2::from_min_max_xy(outer.mins.x, inner.mins.y, inner.mins.x, inner.maxs.y),
        color,
    ));
    vertices.extend(rect(
        &Aabb2::from_min_max_xy(inner.maxs.x, inner.mins.y, outer.maxs.x, inner.maxs.y),
        color,
    ));

    vertices
}
