//! Storm cloud hazards: drift, bounds culling, drone attrition, lightning.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyguard_core::components::{Drone, DroneBody, StormCloud};
use skyguard_core::constants::*;
use skyguard_core::events::AudioEvent;
use skyguard_core::types::{Position, Velocity};

use crate::session::{ScoreState, StationState};
use crate::world_setup;

/// Run the hazard system for one tick.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
    station: &mut StationState,
    score: &mut ScoreState,
    audio_events: &mut Vec<AudioEvent>,
    despawn_buffer: &mut Vec<Entity>,
    current_tick: u64,
) {
    drift_and_cull(world, despawn_buffer);

    // Snapshot cloud positions once; both damage passes read them.
    let clouds: Vec<Position> = world
        .query_mut::<(&StormCloud, &Position)>()
        .into_iter()
        .map(|(_, (_, pos))| *pos)
        .collect();
    if clouds.is_empty() {
        return;
    }

    damage_drones(
        world,
        rng,
        next_id,
        &clouds,
        score,
        audio_events,
        despawn_buffer,
    );
    roll_lightning(
        world,
        rng,
        next_id,
        &clouds,
        station,
        audio_events,
        current_tick,
    );
}

/// Advance cloud drift and remove clouds outside the playable bounds.
fn drift_and_cull(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (_cloud, pos, drift)) in
        world.query_mut::<(&StormCloud, &mut Position, &Velocity)>()
    {
        pos.x += drift.x;
        pos.y += drift.y;
        pos.z += drift.z;

        if pos.x.abs() > STORM_BOUNDS || pos.z.abs() > STORM_BOUNDS {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Fractional per-tick damage to every drone inside a cloud's radius.
/// Depleted drones die with an explosion and the smaller score award.
fn damage_drones(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
    clouds: &[Position],
    score: &mut ScoreState,
    audio_events: &mut Vec<AudioEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();
    let mut kill_positions: Vec<Position> = Vec::new();

    for (entity, (_drone, pos, body)) in
        world.query_mut::<(&Drone, &Position, &mut DroneBody)>()
    {
        for cloud in clouds {
            if pos.range_to(cloud) < STORM_DAMAGE_RADIUS {
                body.health -= STORM_DAMAGE_TO_DRONES * DT;
                if body.health <= 0.0 {
                    despawn_buffer.push(entity);
                    kill_positions.push(*pos);
                    break;
                }
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    for pos in kill_positions {
        score.award_hazard_kill();
        world_setup::spawn_explosion_burst(world, rng, next_id, pos);
        audio_events.push(AudioEvent::Explosion);
    }
}

/// Each cloud near the station has a small per-tick chance of a lightning
/// strike: fixed station damage, cosmetic burst, no drone involvement.
fn roll_lightning(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
    clouds: &[Position],
    station: &mut StationState,
    audio_events: &mut Vec<AudioEvent>,
    current_tick: u64,
) {
    for cloud in clouds {
        if rng.gen::<f64>() < STORM_LIGHTNING_CHANCE
            && cloud.range_to(&station.position) < STORM_LIGHTNING_RANGE
        {
            station.apply_damage(STORM_LIGHTNING_DAMAGE, current_tick);
            let strike_at = station.position;
            world_setup::spawn_explosion_burst(world, rng, next_id, strike_at);
            audio_events.push(AudioEvent::Explosion);
        }
    }
}
