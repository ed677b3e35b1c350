//! Zone Royale entry point
//!
//! Runs one headless match with a scripted player and prints the summary.
//!
//! Run with `--help` for the flags.

#[cfg(not(target_arch = "wasm32"))]
mod driver {
    use std::path::PathBuf;

    use clap::Parser;
    use zone_royale::sim::{self, MatchState};
    use zone_royale::{planar, MatchConfig, MatchSummary, WeaponCatalog};

    /// Player movement speed (units/second)
    const PLAYER_SPEED: f32 = 150.0;
    /// Ticks between scripted shots
    const SHOT_EVERY_TICKS: u64 = 20;
    /// Safety cap, about 30 minutes of match time at 60 Hz
    const DEFAULT_MAX_TICKS: u64 = 108_000;

    #[derive(Parser, Debug)]
    #[command(name = "zone-royale")]
    #[command(about = "Run one headless shrinking-zone match and print the summary as JSON")]
    struct Args {
        /// Match config (JSON); defaults are used if it is missing or malformed
        #[arg(long)]
        config: Option<PathBuf>,
        /// Weapon catalog (JSON); the built-in weapons are used if it fails to load
        #[arg(long)]
        catalog: Option<PathBuf>,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Stop after this many ticks even if the match is still running
        #[arg(long, default_value_t = DEFAULT_MAX_TICKS)]
        max_ticks: u64,
    }

    fn load_catalog(args: &Args) -> WeaponCatalog {
        let Some(path) = &args.catalog else {
            return WeaponCatalog::default();
        };
        match WeaponCatalog::load(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("Failed to load weapon catalog: {e}; using built-in weapons");
                WeaponCatalog::default()
            }
        }
    }

    /// Head for the zone center and take a shot at the nearest enemy now and then
    fn script_player(state: &mut MatchState, tick_ms: f32, ticks: u64) {
        let pos = state.player.combatant.pos;
        let to_center = state.zone.center - planar(pos);
        let step = PLAYER_SPEED * tick_ms / 1000.0;
        if to_center.length() > step {
            let delta = to_center.normalize() * step;
            sim::move_player(state, delta.x, delta.y, None);
        }

        if ticks % SHOT_EVERY_TICKS != 0 {
            return;
        }
        let nearest = state
            .enemies
            .iter()
            .filter(|e| e.combatant.alive)
            .min_by(|a, b| {
                a.combatant
                    .pos
                    .distance(pos)
                    .total_cmp(&b.combatant.pos.distance(pos))
            });
        if let Some(target) = nearest {
            let at = target.combatant.pos;
            sim::shoot_weapon(state, at.x, at.y, Some(at.z));
        }
    }

    pub fn run() {
        env_logger::init();
        let args = Args::parse();

        let config = match &args.config {
            Some(path) => MatchConfig::load_or_default(path),
            None => MatchConfig::default(),
        };
        let catalog = load_catalog(&args);
        let seed = args.seed;
        let max_ticks = args.max_ticks;
        let tick_ms = config.tick_ms;

        log::info!("Zone Royale (headless) starting: seed={seed}, tick={tick_ms}ms");

        let mut state = MatchState::new(&config, &catalog, seed);
        let mut ticks = 0;
        while state.is_active() && ticks < max_ticks {
            script_player(&mut state, tick_ms, ticks);
            sim::tick(&mut state, tick_ms);
            for entry in state.new_kills() {
                log::info!("{} eliminated {} [{}]", entry.killer, entry.victim, entry.weapon);
            }
            ticks += 1;
        }
        if state.is_active() {
            log::warn!("Tick cap reached after {ticks} ticks; match still running");
        }

        let summary = MatchSummary::from_state(&state);
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to serialize summary: {e}"),
        }
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    driver::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The engine is a library on wasm32; there is no headless driver
}
