//! Simulation tick
//!
//! Core match loop: advances the state by one measured time step.

use super::actions::update_reload;
use super::ai::update_enemies;
use super::collision::resolve_hits;
use super::pickup::collect_pickups;
use super::projectile::update_bullets;
use super::state::{GameEvent, MatchPhase, MatchState};
use super::zone::update_zone;

/// Advance the match by `dt_ms` milliseconds.
///
/// Steps run in a fixed order: zone, enemy AI, projectiles, combat, pickups,
/// reload, then the end-of-match check. Zone damage can therefore kill
/// before combat resolves, and combat before pickups are looked at. A match
/// that is not Active is left untouched.
pub fn tick(state: &mut MatchState, dt_ms: f32) {
    if !state.is_active() {
        return;
    }
    // Non-finite or negative durations advance nothing
    let dt_ms = if dt_ms.is_finite() { dt_ms.max(0.0) } else { 0.0 };

    state.events.clear();
    state.info.elapsed_ms += f64::from(dt_ms);

    update_zone(state, dt_ms);
    update_enemies(state);
    update_bullets(&mut state.bullets, dt_ms);
    resolve_hits(state);
    collect_pickups(state);
    update_reload(state, dt_ms);
    check_match_end(state);

    // Ensure deterministic ordering
    state.normalize_order();
}

/// Move to Terminal if the player is dead or no enemy is left.
/// Returns the placement if the match ended on this call.
pub fn check_match_end(state: &mut MatchState) -> Option<u32> {
    if !state.is_active() {
        return None;
    }
    let alive_enemies = state.alive_enemy_count();
    let placement = if !state.player.combatant.alive {
        alive_enemies + 1
    } else if alive_enemies == 0 {
        1
    } else {
        return None;
    };

    state.info.phase = MatchPhase::Terminal;
    state.info.placement = Some(placement);
    state.events.push(GameEvent::MatchEnded { placement });
    if placement == 1 {
        log::info!("Victory! Last one standing after {:.1}s", state.info.elapsed_ms / 1000.0);
    } else {
        log::info!(
            "Player eliminated: placed #{placement} of {}",
            state.info.total_players
        );
    }
    Some(placement)
}
