//! Axis-aligned playfield volumes
//!
//! Three volumes matter to the match:
//! - the playfield, outside of which bullets expire
//! - the player's movement box (inset from the playfield edge)
//! - the enemies' roaming box (inset further)

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// An axis-aligned box in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Full playfield volume
    pub const fn playfield() -> Self {
        Self::new(Vec3::ZERO, Vec3::new(FIELD_WIDTH, FIELD_HEIGHT, FIELD_CEILING))
    }

    /// Playfield shrunk horizontally by `margin` on every side
    pub fn inset(margin: f32) -> Self {
        Self::new(
            Vec3::new(margin, margin, 0.0),
            Vec3::new(FIELD_WIDTH - margin, FIELD_HEIGHT - margin, FIELD_CEILING),
        )
    }

    /// Where the player may stand
    pub fn player_area() -> Self {
        Self::inset(PLAYER_EDGE_MARGIN)
    }

    /// Where enemies may roam
    pub fn enemy_area() -> Self {
        Self::inset(ENEMY_EDGE_MARGIN)
    }

    /// Clamp a point into the box
    #[inline]
    pub fn clamp(&self, p: Vec3) -> Vec3 {
        p.clamp(self.min, self.max)
    }

    /// Horizontal edges are exclusive, the height range is inclusive
    /// (grounded bullets travel at z = 0).
    pub fn contains(&self, p: Vec3) -> bool {
        p.x > self.min.x
            && p.x < self.max.x
            && p.y > self.min.y
            && p.y < self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }
}
