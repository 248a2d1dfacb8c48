//! Entity spawn factories.
//!
//! Creates drones, storm clouds, tracers, and cosmetic effect entities
//! with appropriate component bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyguard_core::components::*;
use skyguard_core::constants::*;
use skyguard_core::enums::SpawnBand;
use skyguard_core::types::{Position, Velocity};

use crate::camera::CameraRig;
use crate::session::StationState;

/// Allocate the next stable entity id.
fn alloc_id(next_id: &mut u32) -> EntityId {
    let id = EntityId(*next_id);
    *next_id += 1;
    id
}

/// Spawn a single drone at a uniform angle on the spawn circle around the
/// station, in the configured altitude band, facing the station.
pub fn spawn_drone(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
    station: &StationState,
    band: SpawnBand,
) -> hecs::Entity {
    let theta: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    let altitude = match band {
        SpawnBand::Ground => SPAWN_LOW_BASE + rng.gen::<f64>() * SPAWN_LOW_SPREAD,
        SpawnBand::High => SPAWN_HIGH_BASE + rng.gen::<f64>() * SPAWN_HIGH_SPREAD,
    };
    let position = Position::new(
        station.position.x + DRONE_SPAWN_RADIUS * theta.cos(),
        altitude,
        station.position.z + DRONE_SPAWN_RADIUS * theta.sin(),
    );
    let orientation = position.facing(&station.position);

    world.spawn((
        Drone,
        alloc_id(next_id),
        position,
        orientation,
        DroneBody {
            health: DRONE_HEALTH,
            scale: DRONE_BASE_SCALE,
        },
    ))
}

/// Spawn a storm cloud at a random point high over the battlefield with a
/// small constant 2D drift.
pub fn spawn_storm_cloud(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
) -> hecs::Entity {
    let position = Position::new(
        rng.gen_range(-STORM_SPAWN_EXTENT..STORM_SPAWN_EXTENT),
        STORM_ALTITUDE_BASE + rng.gen::<f64>() * STORM_ALTITUDE_SPREAD,
        rng.gen_range(-STORM_SPAWN_EXTENT..STORM_SPAWN_EXTENT),
    );
    let drift = Velocity::new(
        (rng.gen::<f64>() - 0.5) * STORM_DRIFT,
        0.0,
        (rng.gen::<f64>() - 0.5) * STORM_DRIFT,
    );

    world.spawn((StormCloud, alloc_id(next_id), position, drift))
}

/// Spawn a tracer round at the camera muzzle, flying along the view ray.
pub fn spawn_tracer(world: &mut World, next_id: &mut u32, camera: &CameraRig) -> hecs::Entity {
    let dir = camera.forward();
    let origin = Position::from(camera.position.to_dvec3() + dir * TRACER_MUZZLE_OFFSET);
    // Velocity is stored per tick so movement integration stays uniform.
    let velocity = Velocity::from(dir * TRACER_SPEED * DT);

    world.spawn((
        Tracer { origin },
        alloc_id(next_id),
        origin,
        velocity,
        camera.orientation,
    ))
}

/// Spawn a regular explosion burst at a destroyed drone's last position.
pub fn spawn_explosion_burst(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
    position: Position,
) -> hecs::Entity {
    spawn_burst(
        world,
        rng,
        next_id,
        position,
        EXPLOSION_PARTICLES,
        EXPLOSION_VELOCITY_SCALE,
        EXPLOSION_LIFETIME_SECS,
    )
}

/// Spawn the large terminal burst over the destroyed station.
pub fn spawn_terminal_burst(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
    position: Position,
) -> hecs::Entity {
    spawn_burst(
        world,
        rng,
        next_id,
        position,
        TERMINAL_EXPLOSION_PARTICLES,
        TERMINAL_EXPLOSION_VELOCITY_SCALE,
        TERMINAL_EXPLOSION_LIFETIME_SECS,
    )
}

fn spawn_burst(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
    position: Position,
    count: usize,
    velocity_scale: f64,
    lifetime: f64,
) -> hecs::Entity {
    let particles = (0..count)
        .map(|_| BurstParticle {
            position,
            velocity: Velocity::new(
                (rng.gen::<f64>() - 0.5) * velocity_scale,
                (rng.gen::<f64>() - 0.5) * velocity_scale,
                (rng.gen::<f64>() - 0.5) * velocity_scale,
            ),
            lifetime,
        })
        .collect();

    world.spawn((ExplosionBurst { particles }, alloc_id(next_id), position))
}

/// Spawn the mushroom cloud raised by the terminal explosion.
pub fn spawn_mushroom_cloud(
    world: &mut World,
    next_id: &mut u32,
    position: Position,
) -> hecs::Entity {
    world.spawn((
        MushroomCloud {
            lifetime: MUSHROOM_CLOUD_LIFETIME_SECS,
        },
        alloc_id(next_id),
        position,
    ))
}
