//! Deterministic match simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through `tick`
//! - Seeded, match-owned RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering, audio or platform dependencies

pub mod actions;
pub mod ai;
pub mod bounds;
pub mod collision;
pub mod engine;
pub mod pickup;
pub mod projectile;
pub mod state;
pub mod tick;
pub mod zone;

pub use actions::{move_player, select_weapon, shoot_weapon};
pub use bounds::Bounds;
pub use state::{
    Bullet, Combatant, DeathCause, Enemy, GameEvent, KillFeedEntry, MatchInfo, MatchPhase,
    MatchState, Pickup, PickupKind, Player, Zone, PLAYER_ID,
};
pub use tick::{check_match_end, tick};
