//! Bullet hit detection and damage resolution
//!
//! Point-in-sphere tests at the bullet's post-integration position. Fast
//! bullets can tunnel through a target within one tick; that is accepted.
//! Bullets resolve one at a time in id order, so a later bullet sees the
//! health an earlier one left behind.

use super::state::{Bullet, Combatant, DeathCause, GameEvent, KillFeedEntry, MatchState};
use crate::consts::HIT_RADIUS;

/// Whether a bullet strikes a combatant this tick
#[inline]
pub fn is_hit(bullet: &Bullet, target: &Combatant) -> bool {
    target.alive && bullet.owner != target.id && bullet.pos.distance(target.pos) < HIT_RADIUS
}

/// Outcome of one bullet striking one target
#[derive(Debug, Clone, Copy, PartialEq)]
struct Strike {
    target: u32,
    killed: bool,
    /// Victim is an enemy (kill credit and feed entry apply)
    enemy: bool,
}

/// Check a bullet against the player, then each enemy. The first target
/// struck takes the damage and consumes the bullet.
fn strike(state: &mut MatchState, bullet: &Bullet) -> Option<Strike> {
    let player = &mut state.player.combatant;
    if is_hit(bullet, player) {
        let killed = player.take_armored_damage(bullet.damage);
        return Some(Strike {
            target: player.id,
            killed,
            enemy: false,
        });
    }

    // Enemy armor is not consulted here
    let enemy = state
        .enemies
        .iter_mut()
        .map(|e| &mut e.combatant)
        .find(|c| is_hit(bullet, c))?;
    let killed = enemy.take_damage(bullet.damage);
    Some(Strike {
        target: enemy.id,
        killed,
        enemy: true,
    })
}

/// Book the consequences of a strike: damage credit, events, kill feed
fn record(state: &mut MatchState, bullet: &Bullet, hit: Strike) {
    // Kill credit (count and damage) only for enemy victims
    if hit.killed && hit.enemy {
        if let Some(shooter) = state.combatant_mut(bullet.owner) {
            shooter.kills += 1;
            shooter.damage_dealt += bullet.damage;
        }
    }
    state.events.push(GameEvent::Hit {
        shooter: bullet.owner,
        target: hit.target,
        damage: bullet.damage,
    });

    if !hit.killed {
        return;
    }
    let killer = state.label(bullet.owner);
    let victim = state.label(hit.target);
    log::info!("{killer} eliminated {victim} with {}", bullet.weapon);
    state.events.push(GameEvent::Eliminated {
        id: hit.target,
        cause: DeathCause::Shot { by: bullet.owner },
    });
    if hit.enemy {
        state.events.push(GameEvent::Kill(KillFeedEntry {
            killer,
            victim,
            weapon: bullet.weapon.clone(),
        }));
    }
}

/// Combat step of a tick
pub fn resolve_hits(state: &mut MatchState) {
    let bullets = std::mem::take(&mut state.bullets);
    let mut survivors = Vec::with_capacity(bullets.len());
    for bullet in bullets {
        match strike(state, &bullet) {
            Some(hit) => record(state, &bullet, hit),
            None => survivors.push(bullet),
        }
    }
    state.bullets = survivors;
}
