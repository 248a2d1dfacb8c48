//! Station impact and recovery.
//!
//! Drones that close within the impact range are removed without score and
//! cost the station a fixed chunk of health. Recovery runs only on ticks
//! with no impact, after a quiet period since the last damage of any kind.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use skyguard_core::components::{Drone, DroneBody};
use skyguard_core::constants::*;
use skyguard_core::events::AudioEvent;
use skyguard_core::types::Position;

use crate::session::{ScoreState, StationState};
use crate::world_setup;

/// Impact pass. Returns true if at least one drone struck the station.
pub fn run_impacts(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
    station: &mut StationState,
    score: &mut ScoreState,
    audio_events: &mut Vec<AudioEvent>,
    despawn_buffer: &mut Vec<Entity>,
    current_tick: u64,
) -> bool {
    despawn_buffer.clear();
    let mut impact_positions: Vec<Position> = Vec::new();

    for (entity, (_drone, pos, _body)) in world.query_mut::<(&Drone, &Position, &DroneBody)>() {
        if pos.range_to(&station.position) < STATION_IMPACT_RANGE {
            despawn_buffer.push(entity);
            impact_positions.push(*pos);
        }
    }

    let impacted = !despawn_buffer.is_empty();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    for pos in impact_positions {
        station.apply_damage(STATION_IMPACT_DAMAGE, current_tick);
        score.station_impacts += 1;
        world_setup::spawn_explosion_burst(world, rng, next_id, pos);
        audio_events.push(AudioEvent::Explosion);
    }

    impacted
}

/// Recovery pass. Regenerates health toward the cap once the quiet period
/// has elapsed, and only on ticks without a station impact.
pub fn run_recovery(station: &mut StationState, impacted_this_tick: bool, current_tick: u64) {
    if impacted_this_tick || station.health >= STATION_MAX_HEALTH {
        return;
    }
    let quiet_ticks = match station.last_damage_tick {
        Some(last) => current_tick.saturating_sub(last),
        None => return,
    };
    if quiet_ticks > ms_to_ticks(HEALTH_RECOVERY_DELAY_MS) {
        station.health = (station.health + HEALTH_RECOVERY_RATE * DT).min(STATION_MAX_HEALTH);
    }
}
