//! RGBA color values for actors and areas
//!
//! Rendering hints only - the simulation never branches on color.

use serde::{Deserialize, Serialize};

use crate::lerp_f32;

/// Linear RGBA color, components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Rgba = Rgba::rgb(0.0, 0.0, 0.0);
    pub const GREEN: Rgba = Rgba::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Rgba = Rgba::rgb(0.0, 0.0, 1.0);
    pub const PURPLE: Rgba = Rgba::rgb(0.5, 0.0, 0.5);
    pub const DARK_GREY: Rgba = Rgba::rgb(0.25, 0.25, 0.25);

    /// Default body color for autonomous actors
    pub const DEFAULT_NPC: Rgba = Rgba::GREEN;

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Componentwise blend from `self` toward `to` by `t`
    pub fn lerp(self, to: Rgba, t: f32) -> Rgba {
        Rgba {
            r: lerp_f32(self.r, to.r, t),
            g: lerp_f32(self.g, to.g, t),
            b: lerp_f32(self.b, to.b, t),
            a: lerp_f32(self.a, to.a, t),
        }
    }

    /// As an `[r, g, b, a]` array with an alpha override, for vertex upload
    pub fn to_array_with_alpha(self, alpha: f32) -> [f32; 4] {
        [self.r, self.g, self.b, alpha]
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::WHITE
    }
}
