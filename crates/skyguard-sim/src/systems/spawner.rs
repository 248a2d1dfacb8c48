//! Spawn controller — interval- and cap-gated drone and hazard spawning.
//!
//! Spawning is deterministic given elapsed ticks and population headroom:
//! no stochastic retry, no backoff. The drone and storm timers run
//! independently of each other.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use skyguard_core::components::{Drone, StormCloud};
use skyguard_core::constants::*;
use skyguard_core::enums::{DifficultyParams, SpawnBand};

use crate::session::StationState;
use crate::world_setup;

/// Drone spawn pass. Spawns at most one drone per tick, when the interval
/// has elapsed and the population is under the difficulty cap.
pub fn run_drones(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
    station: &StationState,
    params: &DifficultyParams,
    band: SpawnBand,
    last_spawn_tick: &mut u64,
    current_tick: u64,
) {
    if current_tick.saturating_sub(*last_spawn_tick) < params.spawn_interval_ticks {
        return;
    }
    // The timer resets even when the cap blocks the spawn; a freed slot
    // waits for the next full interval rather than filling immediately.
    *last_spawn_tick = current_tick;

    let population = world.query_mut::<&Drone>().into_iter().count();
    if population >= params.max_drones {
        return;
    }

    world_setup::spawn_drone(world, rng, next_id, station, band);
}

/// Storm cloud spawn pass, on its own fixed timer and cap.
pub fn run_storms(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
    last_spawn_tick: &mut u64,
    current_tick: u64,
) {
    if current_tick.saturating_sub(*last_spawn_tick) < ms_to_ticks(STORM_SPAWN_INTERVAL_MS) {
        return;
    }
    *last_spawn_tick = current_tick;

    let population = world.query_mut::<&StormCloud>().into_iter().count();
    if population >= MAX_STORM_CLOUDS {
        return;
    }

    world_setup::spawn_storm_cloud(world, rng, next_id);
}
