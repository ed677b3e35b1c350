//! Match configuration
//!
//! Tunable parameters for a match, loadable from a JSON file. Missing fields
//! fall back to the defaults.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::DEFAULT_TICK_MS;

/// Errors from loading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read match config: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed match config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Safe-zone parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneConfig {
    /// Zone center on the ground plane (fixed for the match)
    pub center: Vec2,
    /// Starting radius
    pub radius: f32,
    /// Radius floor
    pub min_radius: f32,
    /// Radius lost per shrink
    pub shrink_step: f32,
    /// Delay before the first shrink (ms)
    pub initial_shrink_ms: f32,
    /// Delay between later shrinks (ms)
    pub shrink_interval_ms: f32,
    /// Health lost per second outside the zone
    pub damage_per_sec: f32,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            center: Vec2::new(400.0, 300.0),
            radius: 250.0,
            min_radius: 50.0,
            shrink_step: 0.5,
            initial_shrink_ms: 180_000.0,
            shrink_interval_ms: 5_000.0,
            damage_per_sec: 5.0,
        }
    }
}

/// Match parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// AI opponents
    pub enemy_count: u32,
    /// Pickups scattered at match start
    pub pickup_count: u32,
    /// Weapons the player starts with (taken from the front of the catalog)
    pub loadout_size: usize,
    /// Player spawn point
    pub player_spawn: Vec2,
    /// Tick duration used by fixed-rate drivers (ms)
    pub tick_ms: f32,
    pub zone: ZoneConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            enemy_count: 8,
            pickup_count: 10,
            loadout_size: 4,
            player_spawn: Vec2::new(400.0, 300.0),
            tick_ms: DEFAULT_TICK_MS,
            zone: ZoneConfig::default(),
        }
    }
}

impl MatchConfig {
    /// Participants in a match built from this config
    pub fn total_players(&self) -> u32 {
        self.enemy_count + 1
    }

    /// Parse a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config from disk
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded match config from {}", path.display());
        Ok(config)
    }

    /// Load a config, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default match config");
                Self::default()
            }
        }
    }
}
