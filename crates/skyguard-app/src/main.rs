//! CLI runner: drives the simulation headless at 60Hz and reports the
//! outcome of the battle over the log.

use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use skyguard_app::game_loop;
use skyguard_app::sinks::{AudioRouter, LogAudioSink};
use skyguard_app::state::{shared_snapshot, GameLoopCommand};
use skyguard_core::constants::TICK_RATE;
use skyguard_core::enums::{Difficulty, FireMode, GamePhase, SpawnBand};
use skyguard_core::state::GameStateSnapshot;
use skyguard_sim::engine::SimConfig;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FireModeArg {
    Hitscan,
    Tracer,
}

impl From<FireModeArg> for FireMode {
    fn from(arg: FireModeArg) -> Self {
        match arg {
            FireModeArg::Hitscan => FireMode::Hitscan,
            FireModeArg::Tracer => FireMode::Tracer,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SpawnBandArg {
    Ground,
    High,
}

impl From<SpawnBandArg> for SpawnBand {
    fn from(arg: SpawnBandArg) -> Self {
        match arg {
            SpawnBandArg::Ground => SpawnBand::Ground,
            SpawnBandArg::High => SpawnBand::High,
        }
    }
}

/// Headless station-defense battle runner.
#[derive(Parser, Debug)]
#[command(name = "skyguard", version)]
struct Args {
    /// RNG seed; the same seed replays the same battle.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[arg(long, value_enum, default_value_t = DifficultyArg::Easy)]
    difficulty: DifficultyArg,

    #[arg(long, value_enum, default_value_t = FireModeArg::Hitscan)]
    fire_mode: FireModeArg,

    /// Altitude band drones spawn in.
    #[arg(long, value_enum, default_value_t = SpawnBandArg::Ground)]
    spawn_band: SpawnBandArg,

    /// Enable storm cloud hazards.
    #[arg(long)]
    hazards: bool,

    /// Scale drones up visually as they close on the station.
    #[arg(long)]
    scaling: bool,

    /// Stop after this many ticks even without a result (0 = no limit).
    #[arg(long, default_value_t = 0)]
    max_ticks: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = SimConfig {
        seed: args.seed,
        difficulty: args.difficulty.into(),
        fire_mode: args.fire_mode.into(),
        spawn_band: args.spawn_band.into(),
        hazards: args.hazards,
        drone_scaling: args.scaling,
    };
    log::info!(
        "starting battle: seed={} difficulty={} hazards={}",
        config.seed,
        config.difficulty.label(),
        config.hazards
    );

    let latest = shared_snapshot();
    let mut audio = AudioRouter::new(Box::new(LogAudioSink));
    let observer = Box::new(move |snapshot: &GameStateSnapshot| {
        audio.dispatch(&snapshot.audio_events);
        if snapshot.time.tick % TICK_RATE as u64 == 0 {
            log::debug!(
                "tick {}: {} drones, score {}, station {:.1}%",
                snapshot.time.tick,
                snapshot.hud.drone_count,
                snapshot.hud.score,
                snapshot.hud.station_health
            );
        }
    });

    let (cmd_tx, handle) = game_loop::spawn_game_loop(config, observer, latest.clone())
        .context("failed to spawn game loop thread")?;

    // Poll the shared snapshot until the battle resolves or the tick
    // budget runs out.
    let result = loop {
        std::thread::sleep(Duration::from_millis(50));
        let Ok(slot) = latest.lock() else {
            break None;
        };
        let Some(snapshot) = slot.clone() else {
            continue;
        };
        drop(slot);

        if let Some(final_score) = snapshot.final_score {
            break Some((snapshot.phase, final_score));
        }
        if args.max_ticks > 0 && snapshot.time.tick >= args.max_ticks {
            break None;
        }
    };

    let _ = cmd_tx.send(GameLoopCommand::Shutdown);
    handle
        .join()
        .map_err(|_| anyhow::anyhow!("game loop thread panicked"))?;

    match result {
        Some((GamePhase::Victory, score)) => log::info!("victory, final score {score}"),
        Some((_, score)) => log::info!("station destroyed, final score {score}"),
        None => log::info!("stopped without a result"),
    }
    Ok(())
}
