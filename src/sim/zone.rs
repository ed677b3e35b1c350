//! Safe-zone shrinking and out-of-zone damage

use super::state::{Combatant, DeathCause, GameEvent, MatchState, Zone};

/// Count down the shrink timer, shrinking the radius when it fires.
/// Returns the new radius if a shrink happened.
pub fn advance_shrink(zone: &mut Zone, dt_ms: f32) -> Option<f32> {
    zone.shrink_timer_ms -= dt_ms;
    if zone.shrink_timer_ms > 0.0 {
        return None;
    }
    zone.radius = (zone.radius - zone.shrink_step).max(zone.min_radius);
    zone.shrink_timer_ms = zone.shrink_interval_ms;
    Some(zone.radius)
}

/// Damage one combatant if it stands outside the zone.
/// Returns true if the zone killed it.
fn burn(zone: &Zone, combatant: &mut Combatant, dt_ms: f32) -> bool {
    if !combatant.alive || zone.contains(combatant.pos) {
        return false;
    }
    combatant.take_damage(zone.damage_per_sec * (dt_ms / 1000.0))
}

/// Zone step of a tick: shrink, then burn everyone caught outside
pub fn update_zone(state: &mut MatchState, dt_ms: f32) {
    if let Some(radius) = advance_shrink(&mut state.zone, dt_ms) {
        log::debug!("Zone shrunk to radius {radius}");
        state.events.push(GameEvent::ZoneShrunk { radius });
    }

    let zone = &state.zone;
    let victims = std::iter::once(&mut state.player.combatant)
        .chain(state.enemies.iter_mut().map(|e| &mut e.combatant));
    for combatant in victims {
        if burn(zone, combatant, dt_ms) {
            log::info!("{} died in the zone", combatant.label());
            state.events.push(GameEvent::Eliminated {
                id: combatant.id,
                cause: DeathCause::Zone,
            });
        }
    }
}
