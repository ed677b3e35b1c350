//! Enemy decision-making
//!
//! Each enemy runs two independent timers: a random-walk step every second
//! and a shot at the player every two seconds while the player is in range.
//! No pathfinding, no coordination between enemies.

use glam::Vec3;
use rand::Rng;

use super::state::{Bullet, Combatant, Enemy, MatchState};
use crate::consts::*;
use crate::{bearing, heading, normalize_angle, planar};

/// A shot an enemy decided to fire this tick
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyShot {
    pub owner: u32,
    pub origin: Vec3,
    pub vel: Vec3,
    pub weapon: String,
}

/// Random-walk step. Returns true if the enemy moved.
pub fn wander<R: Rng + ?Sized>(enemy: &mut Enemy, now_ms: f64, rng: &mut R) -> bool {
    if !enemy.combatant.alive || now_ms - enemy.last_move_ms <= ENEMY_MOVE_INTERVAL_MS {
        return false;
    }
    let dx = (rng.random::<f32>() - 0.5) * ENEMY_WANDER_SPAN;
    let dy = (rng.random::<f32>() - 0.5) * ENEMY_WANDER_SPAN;
    let pos = enemy.combatant.pos + Vec3::new(dx, dy, 0.0);
    enemy.combatant.pos = enemy.roam.clamp(pos);
    enemy.last_move_ms = now_ms;
    true
}

/// Decide whether to shoot at the target; stamps the shot timer if so
pub fn aim<R: Rng + ?Sized>(
    enemy: &mut Enemy,
    target: &Combatant,
    now_ms: f64,
    rng: &mut R,
) -> Option<EnemyShot> {
    if !enemy.combatant.alive || !target.alive {
        return None;
    }
    if let Some(last) = enemy.last_shot_ms {
        if now_ms - last <= ENEMY_SHOT_COOLDOWN_MS {
            return None;
        }
    }
    let origin = enemy.combatant.pos;
    if origin.distance(target.pos) >= ENEMY_DETECTION_RADIUS {
        return None;
    }

    let inaccuracy = (rng.random::<f32>() - 0.5) * ENEMY_AIM_SPREAD;
    let theta = normalize_angle(bearing(origin, target.pos) + inaccuracy);
    enemy.last_shot_ms = Some(now_ms);

    Some(EnemyShot {
        owner: enemy.combatant.id,
        origin,
        vel: aim_direction(origin, target.pos, theta) * ENEMY_BULLET_SPEED,
        weapon: enemy.combatant.weapon.name.clone(),
    })
}

/// Unit vector along bearing `theta` that climbs or drops to the target's
/// height over the ground distance to it
fn aim_direction(origin: Vec3, target: Vec3, theta: f32) -> Vec3 {
    let ground = planar(target - origin).length();
    let rise = target.z - origin.z;
    (heading(theta) * ground + Vec3::Z * rise)
        .try_normalize()
        .unwrap_or_else(|| heading(theta))
}

/// AI step of a tick
pub fn update_enemies(state: &mut MatchState) {
    let now = state.info.elapsed_ms;
    let rng = &mut state.rng;
    let player = &state.player.combatant;

    // Deferred so bullet ids can be allocated afterwards
    let mut shots = Vec::new();
    for enemy in state.enemies.iter_mut().filter(|e| e.combatant.alive) {
        wander(enemy, now, rng);
        if let Some(shot) = aim(enemy, player, now, rng) {
            shots.push(shot);
        }
    }

    for shot in shots {
        let id = state.next_entity_id();
        state.bullets.push(Bullet {
            id,
            owner: shot.owner,
            pos: shot.origin,
            vel: shot.vel,
            range: ENEMY_BULLET_RANGE,
            damage: ENEMY_BULLET_DAMAGE,
            weapon: shot.weapon,
        });
    }
}
