//! Match state and core simulation types
//!
//! Everything a snapshot carries lives here. Collections are owned by
//! `MatchState` and kept sorted by id for deterministic iteration.

use glam::{Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use crate::catalog::{Weapon, WeaponCatalog};
use crate::config::{MatchConfig, ZoneConfig};
use crate::consts::*;
use crate::{from_planar, planar};

/// Player's fixed entity id
pub const PLAYER_ID: u32 = 1;

/// Lifecycle phase of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Being set up
    Initializing,
    /// Ticks and actions are processed
    Active,
    /// Match over, state frozen
    Terminal,
}

/// State shared by the player and the enemies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub id: u32,
    pub pos: Vec3,
    pub health: f32,
    pub armor: f32,
    /// Goes true -> false once, never back
    pub alive: bool,
    pub weapon: Weapon,
    pub ammo: u32,
    pub kills: u32,
    /// Cumulative damage credited by its kills (the killing shot of each)
    pub damage_dealt: f32,
}

impl Combatant {
    pub fn new(id: u32, pos: Vec3, armor: f32, weapon: Weapon) -> Self {
        let ammo = weapon.clip_size;
        Self {
            id,
            pos,
            health: MAX_HEALTH,
            armor: armor.clamp(0.0, MAX_ARMOR),
            alive: true,
            weapon,
            ammo,
            kills: 0,
            damage_dealt: 0.0,
        }
    }

    /// Remove health, clamped at zero. Returns true if this call killed.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if !self.alive {
            return false;
        }
        self.health = (self.health - amount).clamp(0.0, MAX_HEALTH);
        if self.health <= 0.0 {
            self.alive = false;
            return true;
        }
        false
    }

    /// Split a hit between armor and health: armor soaks up to 70% of the
    /// raw damage, limited by what it has left. Returns true if this call
    /// killed.
    pub fn take_armored_damage(&mut self, raw: f32) -> bool {
        let mut damage = raw;
        if self.armor > 0.0 {
            let absorbed = self.armor.min(raw * ARMOR_ABSORB_RATIO);
            self.armor = (self.armor - absorbed).clamp(0.0, MAX_ARMOR);
            damage -= absorbed;
        }
        self.take_damage(damage)
    }

    /// Restore health up to the cap. Negative amounts restore nothing.
    pub fn heal(&mut self, amount: f32) {
        self.health = (self.health + amount.max(0.0)).min(MAX_HEALTH);
    }

    /// Add armor up to the cap. Negative amounts add nothing.
    pub fn add_armor(&mut self, amount: f32) {
        self.armor = (self.armor + amount.max(0.0)).min(MAX_ARMOR);
    }

    /// Name shown in the kill feed
    pub fn label(&self) -> String {
        if self.id == PLAYER_ID {
            "You".to_string()
        } else {
            format!("Enemy {}", self.id)
        }
    }
}

/// The human-controlled combatant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub combatant: Combatant,
    /// Weapons the player can switch between
    pub weapons: Vec<Weapon>,
    /// Clip size of the selected weapon
    pub max_ammo: u32,
    /// Time left until the empty clip refills (ms)
    pub reload_ms: Option<f32>,
}

impl Player {
    /// Create a player holding `weapon` with a full clip
    pub fn new(pos: Vec3, weapon: Weapon, weapons: Vec<Weapon>) -> Self {
        let max_ammo = weapon.clip_size;
        Self {
            combatant: Combatant::new(PLAYER_ID, pos, 0.0, weapon),
            weapons,
            max_ammo,
            reload_ms: None,
        }
    }

    pub fn is_reloading(&self) -> bool {
        self.reload_ms.is_some()
    }
}

/// An AI-controlled opponent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub combatant: Combatant,
    /// Match clock at the last wander step (ms)
    pub last_move_ms: f64,
    /// Match clock at the last shot (ms), None before the first
    pub last_shot_ms: Option<f64>,
    /// Box the enemy wanders inside
    pub roam: Bounds,
}

impl Enemy {
    pub fn new(id: u32, pos: Vec3, armor: f32, weapon: Weapon) -> Self {
        Self {
            combatant: Combatant::new(id, pos, armor, weapon),
            last_move_ms: 0.0,
            last_shot_ms: None,
            roam: Bounds::enemy_area(),
        }
    }
}

/// A projectile in flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    /// Combatant that fired it
    pub owner: u32,
    pub pos: Vec3,
    /// Units per second
    pub vel: Vec3,
    /// Distance left before it expires
    pub range: f32,
    pub damage: f32,
    /// Weapon label for the kill feed
    pub weapon: String,
}

/// Pickup types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    Health,
    Armor,
    Ammo,
}

impl PickupKind {
    pub const ALL: [PickupKind; 3] = [PickupKind::Health, PickupKind::Armor, PickupKind::Ammo];
}

/// A pickup lying on the ground
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pickup {
    pub id: u32,
    pub kind: PickupKind,
    pub pos: Vec3,
    pub value: f32,
}

/// The shrinking safe area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub center: Vec2,
    /// Never increases, never below `min_radius`
    pub radius: f32,
    pub min_radius: f32,
    pub shrink_step: f32,
    pub shrink_interval_ms: f32,
    /// Countdown to the next shrink (ms)
    pub shrink_timer_ms: f32,
    pub damage_per_sec: f32,
}

impl Zone {
    pub fn from_config(config: &ZoneConfig) -> Self {
        let min_radius = config.min_radius.max(0.0);
        Self {
            center: config.center,
            radius: config.radius.max(min_radius),
            min_radius,
            shrink_step: config.shrink_step.max(0.0),
            shrink_interval_ms: config.shrink_interval_ms,
            shrink_timer_ms: config.initial_shrink_ms,
            damage_per_sec: config.damage_per_sec,
        }
    }

    /// Ground-plane distance from the zone center
    pub fn distance_from_center(&self, pos: Vec3) -> f32 {
        planar(pos).distance(self.center)
    }

    /// Signed distance to the zone edge (positive = outside)
    pub fn edge_distance(&self, pos: Vec3) -> f32 {
        self.distance_from_center(pos) - self.radius
    }

    /// Whether a position is safe (on the edge counts as inside)
    pub fn contains(&self, pos: Vec3) -> bool {
        self.edge_distance(pos) <= 0.0
    }
}

/// A kill-feed line for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KillFeedEntry {
    pub killer: String,
    pub victim: String,
    pub weapon: String,
}

/// Why a combatant died
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    Zone,
    Shot { by: u32 },
}

/// Notifications produced by the last operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Kill(KillFeedEntry),
    Hit { shooter: u32, target: u32, damage: f32 },
    Eliminated { id: u32, cause: DeathCause },
    PickupCollected { kind: PickupKind, amount: f32 },
    ReloadStarted,
    Reloaded,
    ZoneShrunk { radius: f32 },
    MatchEnded { placement: u32 },
}

/// Match-level bookkeeping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchInfo {
    pub phase: MatchPhase,
    /// Match clock; 0 is the match start (ms)
    pub elapsed_ms: f64,
    /// Every combatant id, player first
    pub participants: Vec<u32>,
    /// Fixed at match start
    pub total_players: u32,
    /// Set once Terminal (1 = victory)
    pub placement: Option<u32>,
}

/// Complete match snapshot (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    /// Seed the match was created with
    pub seed: u64,
    /// Match-owned random source
    pub rng: Pcg32,
    pub info: MatchInfo,
    pub player: Player,
    /// Sorted by id
    pub enemies: Vec<Enemy>,
    /// Sorted by id
    pub bullets: Vec<Bullet>,
    /// Sorted by id
    pub pickups: Vec<Pickup>,
    pub zone: Zone,
    /// Events emitted by the most recent operation
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl MatchState {
    /// Set up a match. A zero-size loadout falls back to the whole catalog.
    pub fn new(config: &MatchConfig, catalog: &WeaponCatalog, seed: u64) -> Self {
        Self::with_rng(config, catalog, seed, Pcg32::seed_from_u64(seed))
    }

    /// Set up a match drawing from an explicit random source
    pub fn with_rng(config: &MatchConfig, catalog: &WeaponCatalog, seed: u64, rng: Pcg32) -> Self {
        let mut loadout = catalog.loadout(config.loadout_size);
        if loadout.is_empty() {
            loadout = catalog.weapons().to_vec();
        }
        let current = loadout[0].clone();
        let spawn = Bounds::player_area().clamp(from_planar(config.player_spawn));
        let player = Player::new(spawn, current, loadout);

        let mut state = Self {
            seed,
            rng,
            info: MatchInfo {
                phase: MatchPhase::Initializing,
                elapsed_ms: 0.0,
                participants: vec![PLAYER_ID],
                total_players: config.total_players(),
                placement: None,
            },
            player,
            enemies: Vec::new(),
            bullets: Vec::new(),
            pickups: Vec::new(),
            zone: Zone::from_config(&config.zone),
            events: Vec::new(),
            next_id: PLAYER_ID + 1,
        };

        state.spawn_enemies(config.enemy_count, catalog);
        state.spawn_pickups(config.pickup_count);
        state.info.phase = MatchPhase::Active;

        log::info!(
            "Match started: seed={}, enemies={}, pickups={}, zone radius={}",
            seed,
            state.enemies.len(),
            state.pickups.len(),
            state.zone.radius
        );
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn spawn_enemies(&mut self, count: u32, catalog: &WeaponCatalog) {
        for _ in 0..count {
            let id = self.next_entity_id();
            let pos = Vec3::new(
                self.rng.random_range(100.0..700.0),
                self.rng.random_range(100.0..500.0),
                0.0,
            );
            let armor = self.rng.random_range(0.0..50.0);
            let weapon = catalog.weapons()[self.rng.random_range(0..catalog.len())].clone();
            self.enemies.push(Enemy::new(id, pos, armor, weapon));
            self.info.participants.push(id);
        }
    }

    fn spawn_pickups(&mut self, count: u32) {
        for _ in 0..count {
            let id = self.next_entity_id();
            let kind = PickupKind::ALL[self.rng.random_range(0..PickupKind::ALL.len())];
            let pos = Vec3::new(
                self.rng.random_range(50.0..750.0),
                self.rng.random_range(50.0..550.0),
                0.0,
            );
            let value = self.rng.random_range(25.0..75.0);
            self.pickups.push(Pickup { id, kind, pos, value });
        }
    }

    pub fn is_active(&self) -> bool {
        self.info.phase == MatchPhase::Active
    }

    pub fn is_terminal(&self) -> bool {
        self.info.phase == MatchPhase::Terminal
    }

    pub fn alive_enemy_count(&self) -> u32 {
        self.enemies.iter().filter(|e| e.combatant.alive).count() as u32
    }

    /// Look up any combatant by id
    pub fn combatant(&self, id: u32) -> Option<&Combatant> {
        if id == PLAYER_ID {
            return Some(&self.player.combatant);
        }
        self.enemies
            .iter()
            .map(|e| &e.combatant)
            .find(|c| c.id == id)
    }

    pub fn combatant_mut(&mut self, id: u32) -> Option<&mut Combatant> {
        if id == PLAYER_ID {
            return Some(&mut self.player.combatant);
        }
        self.enemies
            .iter_mut()
            .map(|e| &mut e.combatant)
            .find(|c| c.id == id)
    }

    /// Kill-feed name for a combatant id
    pub fn label(&self, id: u32) -> String {
        self.combatant(id)
            .map(Combatant::label)
            .unwrap_or_else(|| "Unknown".to_string())
    }

    /// Every combatant ranked for a leaderboard: survivors first, then by
    /// kills, then by id.
    pub fn standings(&self) -> Vec<&Combatant> {
        let mut all: Vec<&Combatant> = std::iter::once(&self.player.combatant)
            .chain(self.enemies.iter().map(|e| &e.combatant))
            .collect();
        all.sort_by(|a, b| {
            b.alive
                .cmp(&a.alive)
                .then(b.kills.cmp(&a.kills))
                .then(a.id.cmp(&b.id))
        });
        all
    }

    /// Kill-feed entries from the last operation
    pub fn new_kills(&self) -> Vec<&KillFeedEntry> {
        self.events
            .iter()
            .filter_map(|e| match e {
                GameEvent::Kill(entry) => Some(entry),
                _ => None,
            })
            .collect()
    }

    /// Whether the player's bullets hit anyone in the last operation
    pub fn hit_target(&self) -> bool {
        self.player_hits().next().is_some()
    }

    /// Damage the player's bullets applied in the last operation
    pub fn damage(&self) -> f32 {
        self.player_hits().sum()
    }

    fn player_hits(&self) -> impl Iterator<Item = f32> + '_ {
        self.events.iter().filter_map(|e| match *e {
            GameEvent::Hit { shooter, damage, .. } if shooter == PLAYER_ID => Some(damage),
            _ => None,
        })
    }

    /// Ensure collections are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.enemies.sort_by_key(|e| e.combatant.id);
        self.bullets.sort_by_key(|b| b.id);
        self.pickups.sort_by_key(|p| p.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weapon() -> Weapon {
        Weapon::new("rifle", 30.0, 30, 750.0, 400.0, "5.56")
    }

    #[test]
    fn test_new_match_is_active_with_expected_roster() {
        let state = MatchState::new(&MatchConfig::default(), &WeaponCatalog::default(), 7);
        assert_eq!(state.info.phase, MatchPhase::Active);
        assert_eq!(state.enemies.len(), 8);
        assert_eq!(state.pickups.len(), 10);
        assert_eq!(state.info.total_players, 9);
        assert_eq!(state.info.participants.len(), 9);
        assert_eq!(state.player.combatant.id, PLAYER_ID);
        assert_eq!(state.player.weapons.len(), 4);
        assert_eq!(state.player.combatant.ammo, state.player.max_ammo);
        assert_eq!(state.player.combatant.pos, Vec3::new(400.0, 300.0, 0.0));
    }

    #[test]
    fn test_spawns_within_ranges() {
        let state = MatchState::new(&MatchConfig::default(), &WeaponCatalog::default(), 42);
        for (i, enemy) in state.enemies.iter().enumerate() {
            let c = &enemy.combatant;
            assert_eq!(c.id, i as u32 + 2);
            assert!((100.0..700.0).contains(&c.pos.x));
            assert!((100.0..500.0).contains(&c.pos.y));
            assert!((0.0..50.0).contains(&c.armor));
        }
        for pickup in &state.pickups {
            assert!((25.0..75.0).contains(&pickup.value));
        }
    }

    #[test]
    fn test_same_seed_same_match() {
        let a = MatchState::new(&MatchConfig::default(), &WeaponCatalog::default(), 99);
        let b = MatchState::new(&MatchConfig::default(), &WeaponCatalog::default(), 99);
        assert_eq!(a, b);
    }

    #[test]
    fn test_entity_ids_are_unique() {
        let state = MatchState::new(&MatchConfig::default(), &WeaponCatalog::default(), 3);
        let mut ids: Vec<u32> = state.info.participants.clone();
        ids.extend(state.pickups.iter().map(|p| p.id));
        let len = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), len);
    }

    #[test]
    fn test_armored_damage_split() {
        let mut c = Combatant::new(PLAYER_ID, Vec3::ZERO, 40.0, weapon());
        c.take_armored_damage(25.0);
        assert!((c.armor - 22.5).abs() < 1e-4);
        assert!((c.health - 92.5).abs() < 1e-4);
    }

    #[test]
    fn test_armor_limited_by_remaining() {
        let mut c = Combatant::new(PLAYER_ID, Vec3::ZERO, 5.0, weapon());
        c.take_armored_damage(50.0);
        assert_eq!(c.armor, 0.0);
        assert!((c.health - 55.0).abs() < 1e-4);
    }

    #[test]
    fn test_death_is_reported_once() {
        let mut c = Combatant::new(5, Vec3::ZERO, 0.0, weapon());
        assert!(c.take_damage(150.0));
        assert_eq!(c.health, 0.0);
        assert!(!c.alive);
        assert!(!c.take_damage(10.0));
    }

    #[test]
    fn test_heal_and_armor_capped() {
        let mut c = Combatant::new(5, Vec3::ZERO, 90.0, weapon());
        c.health = 80.0;
        c.heal(50.0);
        c.add_armor(50.0);
        assert_eq!(c.health, MAX_HEALTH);
        assert_eq!(c.armor, MAX_ARMOR);
    }

    #[test]
    fn test_negative_heal_and_armor_are_ignored() {
        let mut c = Combatant::new(5, Vec3::ZERO, 30.0, weapon());
        c.health = 20.0;
        c.heal(-50.0);
        c.add_armor(-50.0);
        assert_eq!(c.health, 20.0);
        assert_eq!(c.armor, 30.0);
        assert!(c.alive);
    }

    #[test]
    fn test_zone_distance_is_planar() {
        let zone = Zone::from_config(&ZoneConfig::default());
        let above_center = Vec3::new(400.0, 300.0, 150.0);
        assert_eq!(zone.distance_from_center(above_center), 0.0);
        assert!(zone.contains(Vec3::new(650.0, 300.0, 0.0)));
        assert!(!zone.contains(Vec3::new(651.0, 300.0, 0.0)));
    }

    #[test]
    fn test_standings_rank_survivors_then_kills() {
        let mut state = MatchState::new(&MatchConfig::default(), &WeaponCatalog::default(), 1);
        state.enemies[0].combatant.kills = 3;
        state.enemies[1].combatant.alive = false;
        state.enemies[1].combatant.kills = 9;
        let standings = state.standings();
        assert_eq!(standings[0].id, state.enemies[0].combatant.id);
        assert_eq!(standings.last().map(|c| c.id), Some(state.enemies[1].combatant.id));
    }

    #[test]
    fn test_labels() {
        let state = MatchState::new(&MatchConfig::default(), &WeaponCatalog::default(), 1);
        assert_eq!(state.player.combatant.label(), "You");
        assert_eq!(state.enemies[0].combatant.label(), "Enemy 2");
    }
}
