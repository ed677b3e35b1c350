//! Snapshot-style engine interface
//!
//! Each call takes the current snapshot and returns the next one, leaving
//! the input untouched. Callers that own their state can use the in-place
//! functions in `tick` and `actions` instead.

use super::actions;
use super::state::MatchState;
use crate::catalog::WeaponCatalog;
use crate::config::MatchConfig;

/// Build the opening snapshot (already Active)
pub fn initialize_match(config: &MatchConfig, catalog: &WeaponCatalog, seed: u64) -> MatchState {
    MatchState::new(config, catalog, seed)
}

/// Advance one step of `dt_ms`; a Terminal snapshot comes back unchanged
pub fn tick(state: &MatchState, dt_ms: f32) -> MatchState {
    let mut next = state.clone();
    super::tick::tick(&mut next, dt_ms);
    next
}

pub fn move_player(state: &MatchState, dx: f32, dy: f32, dz: Option<f32>) -> MatchState {
    let mut next = state.clone();
    actions::move_player(&mut next, dx, dy, dz);
    next
}

pub fn shoot_weapon(state: &MatchState, tx: f32, ty: f32, tz: Option<f32>) -> MatchState {
    let mut next = state.clone();
    actions::shoot_weapon(&mut next, tx, ty, tz);
    next
}

pub fn select_weapon(state: &MatchState, weapon: &str) -> MatchState {
    let mut next = state.clone();
    actions::select_weapon(&mut next, weapon);
    next
}
