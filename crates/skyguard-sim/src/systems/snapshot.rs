//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot. Read-only — it never modifies the world.

use hecs::World;

use skyguard_core::components::*;
use skyguard_core::constants::*;
use skyguard_core::enums::{Difficulty, GamePhase};
use skyguard_core::events::AudioEvent;
use skyguard_core::state::*;
use skyguard_core::types::{Orientation, Position, SimTime};

use crate::camera::CameraRig;
use crate::session::{ScoreState, StationState};

/// Build a complete GameStateSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    difficulty: Difficulty,
    camera: &CameraRig,
    station: &StationState,
    score: &ScoreState,
    audio_events: Vec<AudioEvent>,
    shake_secs: f64,
    final_score: Option<u32>,
) -> GameStateSnapshot {
    let drones = build_drones(world);

    GameStateSnapshot {
        time: *time,
        phase,
        hud: HudView {
            drone_count: drones.len(),
            score: score.score,
            difficulty,
            difficulty_label: difficulty.label().to_string(),
            station_health: station.health,
        },
        camera: CameraView {
            position: camera.position,
            orientation: camera.orientation,
            shake: (shake_secs / SHAKE_DURATION_SECS).clamp(0.0, 1.0),
        },
        station: StationView {
            position: station.position,
            health: station.health,
        },
        lock_target: nearest_drone(&drones, &camera.position),
        drones,
        clouds: build_clouds(world),
        tracers: build_tracers(world),
        bursts: build_bursts(world),
        mushroom_cloud: build_mushroom_cloud(world),
        audio_events,
        final_score,
    }
}

fn build_drones(world: &World) -> Vec<DroneView> {
    let mut drones: Vec<DroneView> = world
        .query::<(&Drone, &EntityId, &Position, &Orientation, &DroneBody)>()
        .iter()
        .map(|(_, (_, id, pos, orientation, body))| DroneView {
            id: id.0,
            position: *pos,
            orientation: *orientation,
            scale: body.scale,
            health: body.health,
        })
        .collect();
    drones.sort_by_key(|d| d.id);
    drones
}

fn build_clouds(world: &World) -> Vec<CloudView> {
    let mut clouds: Vec<CloudView> = world
        .query::<(&StormCloud, &EntityId, &Position)>()
        .iter()
        .map(|(_, (_, id, pos))| CloudView {
            id: id.0,
            position: *pos,
        })
        .collect();
    clouds.sort_by_key(|c| c.id);
    clouds
}

fn build_tracers(world: &World) -> Vec<TracerView> {
    let mut tracers: Vec<TracerView> = world
        .query::<(&Tracer, &EntityId, &Position, &Orientation)>()
        .iter()
        .map(|(_, (_, id, pos, orientation))| TracerView {
            id: id.0,
            position: *pos,
            orientation: *orientation,
        })
        .collect();
    tracers.sort_by_key(|t| t.id);
    tracers
}

fn build_bursts(world: &World) -> Vec<BurstView> {
    let mut bursts: Vec<BurstView> = world
        .query::<(&ExplosionBurst, &EntityId)>()
        .iter()
        .map(|(_, (burst, id))| BurstView {
            id: id.0,
            particles: burst
                .particles
                .iter()
                .filter(|p| p.lifetime > 0.0)
                .map(|p| ParticleView {
                    position: p.position,
                    lifetime: p.lifetime,
                })
                .collect(),
        })
        .collect();
    bursts.sort_by_key(|b| b.id);
    bursts
}

fn build_mushroom_cloud(world: &World) -> Option<MushroomCloudView> {
    world
        .query::<(&MushroomCloud, &Position)>()
        .iter()
        .next()
        .map(|(_, (cloud, pos))| MushroomCloudView {
            position: *pos,
            lifetime: cloud.lifetime,
        })
}

/// The id of the drone nearest the camera, for the lock-ring overlay.
fn nearest_drone(drones: &[DroneView], camera_pos: &Position) -> Option<u32> {
    drones
        .iter()
        .min_by(|a, b| {
            let ra = camera_pos.range_to(&a.position);
            let rb = camera_pos.range_to(&b.position);
            ra.total_cmp(&rb)
        })
        .map(|d| d.id)
}
