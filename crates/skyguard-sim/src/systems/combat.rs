//! Combat resolution — player fire against the drone population.
//!
//! Two mutually exclusive modes per session: hitscan (instant ray test
//! through the view center) and tracer (projectiles with travel time,
//! full pairwise proximity scan). Populations are small enough (≤20
//! drones, a handful of tracers) that the nested scan is the right tool.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use skyguard_core::components::{Drone, DroneBody, Tracer};
use skyguard_core::constants::*;
use skyguard_core::enums::FireMode;
use skyguard_core::events::AudioEvent;
use skyguard_core::types::{Position, Velocity};

use crate::camera::{CameraRig, InputState};
use crate::session::ScoreState;
use crate::world_setup;

/// Run combat for one tick: gate the trigger on the fire-rate cooldown,
/// resolve the shot per mode, then advance and collide any live tracers.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
    camera: &CameraRig,
    fire_mode: FireMode,
    input: &mut InputState,
    last_fire_tick: &mut Option<u64>,
    score: &mut ScoreState,
    audio_events: &mut Vec<AudioEvent>,
    despawn_buffer: &mut Vec<Entity>,
    current_tick: u64,
) {
    let cooldown_ticks = match fire_mode {
        FireMode::Hitscan => ms_to_ticks(HITSCAN_COOLDOWN_MS),
        FireMode::Tracer => ms_to_ticks(TRACER_COOLDOWN_MS),
    };

    let fire_requested = input.take_fire();
    let cooled_down = match *last_fire_tick {
        Some(last) => current_tick.saturating_sub(last) >= cooldown_ticks,
        None => true,
    };

    if fire_requested && cooled_down {
        *last_fire_tick = Some(current_tick);
        match fire_mode {
            FireMode::Hitscan => {
                resolve_hitscan(world, rng, next_id, camera, score, audio_events);
            }
            FireMode::Tracer => {
                world_setup::spawn_tracer(world, next_id, camera);
            }
        }
    }

    if fire_mode == FireMode::Tracer {
        advance_tracers(world, despawn_buffer);
        collide_tracers(world, rng, next_id, score, audio_events);
    }
}

/// Cast a ray from the camera through the view center; destroy the nearest
/// drone whose bounding sphere it intersects. No travel time.
fn resolve_hitscan(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
    camera: &CameraRig,
    score: &mut ScoreState,
    audio_events: &mut Vec<AudioEvent>,
) {
    let origin = camera.position.to_dvec3();
    let dir = camera.forward();

    let mut nearest: Option<(Entity, Position, f64)> = None;
    for (entity, (_drone, pos, body)) in world.query_mut::<(&Drone, &Position, &DroneBody)>() {
        let radius = DRONE_HIT_RADIUS * (body.scale / DRONE_BASE_SCALE);
        let to_center = pos.to_dvec3() - origin;
        let along = to_center.dot(dir);
        if along <= 0.0 {
            continue;
        }
        let miss_distance = (to_center - dir * along).length();
        if miss_distance > radius {
            continue;
        }
        if nearest.map_or(true, |(_, _, best)| along < best) {
            nearest = Some((entity, *pos, along));
        }
    }

    if let Some((entity, pos, _)) = nearest {
        let _ = world.despawn(entity);
        score.award_kill();
        world_setup::spawn_explosion_burst(world, rng, next_id, pos);
        audio_events.push(AudioEvent::Explosion);
    }
}

/// Advance all tracers along their fixed direction and cull any that have
/// flown past the maximum range.
fn advance_tracers(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (tracer, pos, vel)) in
        world.query_mut::<(&Tracer, &mut Position, &Velocity)>()
    {
        pos.x += vel.x;
        pos.y += vel.y;
        pos.z += vel.z;

        if pos.range_to(&tracer.origin) > TRACER_MAX_RANGE {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Full pairwise tracer/drone scan. A tracer expends itself on its first
/// hit; each hit drone dies exactly once.
fn collide_tracers(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
    score: &mut ScoreState,
    audio_events: &mut Vec<AudioEvent>,
) {
    let tracers: Vec<(Entity, Position)> = world
        .query_mut::<(&Tracer, &Position)>()
        .into_iter()
        .map(|(e, (_, pos))| (e, *pos))
        .collect();
    let drones: Vec<(Entity, Position, f64)> = world
        .query_mut::<(&Drone, &Position, &DroneBody)>()
        .into_iter()
        .map(|(e, (_, pos, body))| (e, *pos, body.scale))
        .collect();

    let mut dead_drones: Vec<Entity> = Vec::new();
    for (tracer_entity, tracer_pos) in tracers {
        for &(drone_entity, drone_pos, scale) in &drones {
            if dead_drones.contains(&drone_entity) {
                continue;
            }
            let threshold = DRONE_HIT_RADIUS * (scale / DRONE_BASE_SCALE);
            if tracer_pos.range_to(&drone_pos) < threshold {
                dead_drones.push(drone_entity);
                let _ = world.despawn(tracer_entity);
                let _ = world.despawn(drone_entity);
                score.award_kill();
                world_setup::spawn_explosion_burst(world, rng, next_id, drone_pos);
                audio_events.push(AudioEvent::Explosion);
                break;
            }
        }
    }
}
