//! Player-initiated actions
//!
//! Applied immediately against the current state, outside the tick. Every
//! action is a silent no-op unless the match is Active and the player alive.

use glam::Vec3;

use super::bounds::Bounds;
use super::state::{Bullet, GameEvent, MatchState, PLAYER_ID};
use crate::consts::RELOAD_DELAY_MS;
use crate::finite_or_zero;

fn can_act(state: &MatchState, action: &str) -> bool {
    if !state.is_active() {
        log::debug!("Ignoring {action}: match is not active");
        return false;
    }
    if !state.player.combatant.alive {
        log::debug!("Ignoring {action}: player is dead");
        return false;
    }
    true
}

/// Move the player by a delta, clamped to the player's area
pub fn move_player(state: &mut MatchState, dx: f32, dy: f32, dz: Option<f32>) {
    if !can_act(state, "move") {
        return;
    }
    state.events.clear();
    let delta = Vec3::new(
        finite_or_zero(dx),
        finite_or_zero(dy),
        dz.map(finite_or_zero).unwrap_or(0.0),
    );
    let c = &mut state.player.combatant;
    c.pos = Bounds::player_area().clamp(c.pos + delta);
}

/// Fire the current weapon at a target point. Without a target height the
/// point is on the ground. Aiming at the player's own position fires
/// along +x.
pub fn shoot_weapon(state: &mut MatchState, tx: f32, ty: f32, tz: Option<f32>) {
    if !can_act(state, "shot") {
        return;
    }
    if state.player.combatant.ammo == 0 || state.player.is_reloading() {
        log::debug!("Ignoring shot: clip is empty");
        return;
    }
    state.events.clear();

    let c = &state.player.combatant;
    let origin = c.pos;
    let target = Vec3::new(
        finite_or_zero(tx),
        finite_or_zero(ty),
        tz.map(finite_or_zero).unwrap_or(0.0),
    );
    let dir = (target - origin).try_normalize().unwrap_or(Vec3::X);
    let weapon = c.weapon.clone();

    let id = state.next_entity_id();
    state.bullets.push(Bullet {
        id,
        owner: PLAYER_ID,
        pos: origin,
        vel: dir * weapon.projectile_speed,
        range: weapon.range,
        damage: weapon.damage,
        weapon: weapon.name,
    });

    let player = &mut state.player;
    player.combatant.ammo -= 1;
    if player.combatant.ammo == 0 {
        player.reload_ms = Some(RELOAD_DELAY_MS);
        state.events.push(GameEvent::ReloadStarted);
    }
}

/// Switch to a weapon from the player's inventory by type name
pub fn select_weapon(state: &mut MatchState, name: &str) {
    if !can_act(state, "weapon switch") {
        return;
    }
    let Some(weapon) = state.player.weapons.iter().find(|w| w.name == name).cloned() else {
        log::debug!("Ignoring weapon switch: {name} is not in the inventory");
        return;
    };
    state.events.clear();

    let player = &mut state.player;
    player.max_ammo = weapon.clip_size;
    player.combatant.ammo = player.combatant.ammo.min(player.max_ammo);
    player.combatant.weapon = weapon;
}

/// Reload step of a tick: count down and refill the clip when done
pub fn update_reload(state: &mut MatchState, dt_ms: f32) {
    let player = &mut state.player;
    if !player.combatant.alive {
        return;
    }
    let Some(remaining) = player.reload_ms else {
        return;
    };
    let remaining = remaining - dt_ms;
    if remaining > 0.0 {
        player.reload_ms = Some(remaining);
        return;
    }
    player.reload_ms = None;
    player.combatant.ammo = player.max_ammo;
    state.events.push(GameEvent::Reloaded);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::WeaponCatalog;
    use crate::config::MatchConfig;
    use crate::sim::state::MatchPhase;

    fn arena() -> MatchState {
        let config = MatchConfig {
            enemy_count: 1,
            pickup_count: 0,
            ..Default::default()
        };
        MatchState::new(&config, &WeaponCatalog::default(), 13)
    }

    #[test]
    fn test_move_clamped() {
        let mut state = arena();
        move_player(&mut state, 10.0, -5.0, None);
        assert_eq!(state.player.combatant.pos, Vec3::new(410.0, 295.0, 0.0));
        move_player(&mut state, 1000.0, 1000.0, Some(-3.0));
        assert_eq!(state.player.combatant.pos, Vec3::new(775.0, 575.0, 0.0));
    }

    #[test]
    fn test_move_ignores_non_finite() {
        let mut state = arena();
        move_player(&mut state, f32::NAN, 5.0, Some(f32::INFINITY));
        assert_eq!(state.player.combatant.pos, Vec3::new(400.0, 305.0, 0.0));
    }

    #[test]
    fn test_dead_player_cannot_act() {
        let mut state = arena();
        state.player.combatant.alive = false;
        let before = state.clone();
        move_player(&mut state, 10.0, 10.0, None);
        shoot_weapon(&mut state, 500.0, 300.0, None);
        select_weapon(&mut state, "rifle");
        assert_eq!(state, before);
    }

    #[test]
    fn test_terminal_match_ignores_actions() {
        let mut state = arena();
        state.info.phase = MatchPhase::Terminal;
        let before = state.clone();
        shoot_weapon(&mut state, 500.0, 300.0, None);
        move_player(&mut state, 10.0, 10.0, None);
        assert_eq!(state, before);
    }

    #[test]
    fn test_shot_uses_current_weapon() {
        let mut state = arena();
        let weapon = state.player.combatant.weapon.clone();
        shoot_weapon(&mut state, 500.0, 300.0, None);
        assert_eq!(state.player.combatant.ammo, weapon.clip_size - 1);
        let bullet = state.bullets.last().unwrap();
        assert_eq!(bullet.owner, PLAYER_ID);
        assert_eq!(bullet.damage, weapon.damage);
        assert_eq!(bullet.range, weapon.range);
        assert!((bullet.vel - Vec3::X * weapon.projectile_speed).length() < 1e-3);
    }

    #[test]
    fn test_zero_length_aim_fires_along_x() {
        let mut state = arena();
        shoot_weapon(&mut state, 400.0, 300.0, None);
        let bullet = state.bullets.last().unwrap();
        assert!(bullet.vel.x > 0.0 && bullet.vel.y == 0.0);
    }

    #[test]
    fn test_flat_aim_from_height_targets_the_ground() {
        let mut state = arena();
        move_player(&mut state, 0.0, 0.0, Some(40.0));
        shoot_weapon(&mut state, 430.0, 300.0, None);
        let bullet = state.bullets.last().unwrap();
        assert_eq!(bullet.pos.z, 40.0);
        // 30 across, 40 down
        let speed = state.player.combatant.weapon.projectile_speed;
        assert!((bullet.vel.z / speed + 0.8).abs() < 1e-4);
    }

    #[test]
    fn test_empty_clip_blocks_until_reload() {
        let mut state = arena();
        let clip = state.player.max_ammo;
        for _ in 0..clip {
            shoot_weapon(&mut state, 500.0, 300.0, None);
        }
        assert_eq!(state.player.combatant.ammo, 0);
        assert!(state.events.contains(&GameEvent::ReloadStarted));

        let bullets = state.bullets.len();
        shoot_weapon(&mut state, 500.0, 300.0, None);
        assert_eq!(state.bullets.len(), bullets);

        update_reload(&mut state, RELOAD_DELAY_MS - 1.0);
        assert_eq!(state.player.combatant.ammo, 0);
        update_reload(&mut state, 1.0);
        assert_eq!(state.player.combatant.ammo, clip);
        assert!(state.events.contains(&GameEvent::Reloaded));

        shoot_weapon(&mut state, 500.0, 300.0, None);
        assert_eq!(state.bullets.len(), bullets + 1);
    }

    #[test]
    fn test_select_weapon_resets_clip_size() {
        let mut state = arena();
        select_weapon(&mut state, "rifle");
        assert_eq!(state.player.combatant.weapon.name, "rifle");
        assert_eq!(state.player.max_ammo, 30);
        // Ammo carries over, capped by the new clip
        assert_eq!(state.player.combatant.ammo, 12);
        select_weapon(&mut state, "sniper");
        assert_eq!(state.player.max_ammo, 5);
        assert_eq!(state.player.combatant.ammo, 5);
    }

    #[test]
    fn test_select_unknown_weapon_is_noop() {
        let mut state = arena();
        let before = state.clone();
        select_weapon(&mut state, "railgun");
        assert_eq!(state, before);
    }
}
