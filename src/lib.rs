//! Zone Royale - a shrinking-zone, last-one-standing arena match
//!
//! Core modules:
//! - `sim`: Deterministic match simulation (zone, AI, projectiles, combat, pickups)
//! - `catalog`: Read-only weapon table
//! - `config`: Data-driven match parameters
//! - `stats`: End-of-match summary

pub mod catalog;
pub mod config;
pub mod sim;
pub mod stats;

pub use catalog::{CatalogError, Weapon, WeaponCatalog};
pub use config::{ConfigError, MatchConfig, ZoneConfig};
pub use stats::MatchSummary;

use glam::{Vec2, Vec3};

/// Match balancing constants
pub mod consts {
    /// Default tick duration (ms), ~60 Hz
    pub const DEFAULT_TICK_MS: f32 = 16.0;

    /// Playfield dimensions (bullets die outside this volume)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;
    pub const FIELD_CEILING: f32 = 200.0;

    /// Player movement is kept this far from the playfield edge
    pub const PLAYER_EDGE_MARGIN: f32 = 25.0;
    /// Enemies roam inside this margin
    pub const ENEMY_EDGE_MARGIN: f32 = 50.0;

    /// Combatant caps
    pub const MAX_HEALTH: f32 = 100.0;
    pub const MAX_ARMOR: f32 = 100.0;

    /// Enemy AI timings (ms)
    pub const ENEMY_MOVE_INTERVAL_MS: f64 = 1000.0;
    pub const ENEMY_SHOT_COOLDOWN_MS: f64 = 2000.0;
    /// Max wander offset per axis (full range is ±half of this)
    pub const ENEMY_WANDER_SPAN: f32 = 60.0;
    /// Enemies only shoot at the player inside this radius
    pub const ENEMY_DETECTION_RADIUS: f32 = 150.0;
    /// Max aim error (radians, full range is ±half of this)
    pub const ENEMY_AIM_SPREAD: f32 = 0.5;
    /// Enemy projectile: 8 units per 16 ms frame
    pub const ENEMY_BULLET_SPEED: f32 = 500.0;
    pub const ENEMY_BULLET_DAMAGE: f32 = 25.0;
    pub const ENEMY_BULLET_RANGE: f32 = 200.0;

    /// Bullet vs combatant hit radius
    pub const HIT_RADIUS: f32 = 15.0;
    /// Fraction of raw damage armor can soak
    pub const ARMOR_ABSORB_RATIO: f32 = 0.7;

    /// Pickup consumption radius
    pub const PICKUP_RADIUS: f32 = 20.0;
    /// Rounds granted by an ammo pickup
    pub const AMMO_PICKUP_ROUNDS: u32 = 30;

    /// Delay before an empty clip refills (ms)
    pub const RELOAD_DELAY_MS: f32 = 2000.0;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Project a world position onto the ground plane
#[inline]
pub fn planar(v: Vec3) -> Vec2 {
    v.truncate()
}

/// Lift a ground-plane point into world space at z = 0
#[inline]
pub fn from_planar(v: Vec2) -> Vec3 {
    v.extend(0.0)
}

/// Ground-plane bearing (radians) from `from` toward `to`
#[inline]
pub fn bearing(from: Vec3, to: Vec3) -> f32 {
    let d = planar(to - from);
    d.y.atan2(d.x)
}

/// Unit vector on the ground plane for a bearing
#[inline]
pub fn heading(theta: f32) -> Vec3 {
    Vec3::new(theta.cos(), theta.sin(), 0.0)
}

/// Replace NaN/infinite input with zero
#[inline]
pub fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() { v } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_normalize_angle_wraps() {
        assert!((normalize_angle(3.0 * PI) + PI).abs() < 1e-5);
        assert!((normalize_angle(-3.0 * PI / 2.0) - FRAC_PI_2).abs() < 1e-5);
        assert_eq!(normalize_angle(0.25), 0.25);
    }

    #[test]
    fn test_bearing_ignores_height() {
        let from = Vec3::new(0.0, 0.0, 0.0);
        let to = Vec3::new(0.0, 10.0, 50.0);
        assert!((bearing(from, to) - FRAC_PI_2).abs() < 1e-6);
        let h = heading(FRAC_PI_2);
        assert!(h.x.abs() < 1e-6 && (h.y - 1.0).abs() < 1e-6 && h.z == 0.0);
    }

    #[test]
    fn test_planar_round_trip_drops_height() {
        let p = Vec3::new(3.0, 4.0, 9.0);
        assert_eq!(from_planar(planar(p)), Vec3::new(3.0, 4.0, 0.0));
    }

    #[test]
    fn test_finite_or_zero() {
        assert_eq!(finite_or_zero(f32::NAN), 0.0);
        assert_eq!(finite_or_zero(f32::INFINITY), 0.0);
        assert_eq!(finite_or_zero(-2.5), -2.5);
    }
}
