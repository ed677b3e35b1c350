//! End-of-match summary
//!
//! Built from a snapshot, usually a Terminal one.

use serde::{Deserialize, Serialize};

use crate::sim::state::MatchState;

/// One row of the final leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub id: u32,
    pub name: String,
    pub kills: u32,
    pub alive: bool,
}

/// The player's result for a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub kills: u32,
    /// 0 or 1
    pub deaths: u32,
    /// Damage credited by the player's kills
    pub damage: f32,
    /// Time spent alive (ms); the full match length for a survivor
    pub survival_ms: f64,
    /// None while the match is still running
    pub placement: Option<u32>,
    pub total_players: u32,
    pub standings: Vec<Standing>,
}

impl MatchSummary {
    pub fn from_state(state: &MatchState) -> Self {
        let player = &state.player.combatant;
        Self {
            kills: player.kills,
            deaths: u32::from(!player.alive),
            damage: player.damage_dealt,
            survival_ms: state.info.elapsed_ms,
            placement: state.info.placement,
            total_players: state.info.total_players,
            standings: state
                .standings()
                .into_iter()
                .map(|c| Standing {
                    id: c.id,
                    name: c.label(),
                    kills: c.kills,
                    alive: c.alive,
                })
                .collect(),
        }
    }

    /// Kill/death ratio; with no deaths this is just the kill count
    pub fn kdr(&self) -> f32 {
        if self.deaths == 0 {
            self.kills as f32
        } else {
            self.kills as f32 / self.deaths as f32
        }
    }

    pub fn is_victory(&self) -> bool {
        self.placement == Some(1)
    }
}
