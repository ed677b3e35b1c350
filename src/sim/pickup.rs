//! Pickup consumption
//!
//! Only the player collects pickups. Collected pickups are gone for good.

use super::state::{GameEvent, MatchState, Pickup, PickupKind, Player};
use crate::consts::{AMMO_PICKUP_ROUNDS, PICKUP_RADIUS};

/// Apply a pickup to the player. Returns the amount granted.
pub fn apply_pickup(player: &mut Player, pickup: &Pickup) -> f32 {
    let c = &mut player.combatant;
    match pickup.kind {
        PickupKind::Health => {
            let before = c.health;
            c.heal(pickup.value);
            c.health - before
        }
        PickupKind::Armor => {
            let before = c.armor;
            c.add_armor(pickup.value);
            c.armor - before
        }
        PickupKind::Ammo => {
            let before = c.ammo;
            c.ammo = (c.ammo + AMMO_PICKUP_ROUNDS).min(player.max_ammo);
            if c.ammo > 0 {
                player.reload_ms = None;
            }
            c.ammo.saturating_sub(before) as f32
        }
    }
}

/// Pickup step of a tick
pub fn collect_pickups(state: &mut MatchState) {
    if !state.player.combatant.alive {
        return;
    }
    let pos = state.player.combatant.pos;
    let (taken, remaining): (Vec<Pickup>, Vec<Pickup>) = std::mem::take(&mut state.pickups)
        .into_iter()
        .partition(|p| p.pos.distance(pos) < PICKUP_RADIUS);
    state.pickups = remaining;

    for pickup in taken {
        let amount = apply_pickup(&mut state.player, &pickup);
        log::debug!("Collected {:?} pickup (+{amount})", pickup.kind);
        state.events.push(GameEvent::PickupCollected {
            kind: pickup.kind,
            amount,
        });
    }
}
