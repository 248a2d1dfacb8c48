//! Game state snapshot — the complete visible state sent to the host each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{Difficulty, GamePhase};
use crate::events::AudioEvent;
use crate::types::{Orientation, Position, SimTime};

/// Complete game state broadcast to the presentation layer after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub hud: HudView,
    pub camera: CameraView,
    pub station: StationView,
    pub drones: Vec<DroneView>,
    pub clouds: Vec<CloudView>,
    pub tracers: Vec<TracerView>,
    pub bursts: Vec<BurstView>,
    pub mushroom_cloud: Option<MushroomCloudView>,
    /// Id of the drone nearest the camera, for the lock-ring overlay.
    pub lock_target: Option<u32>,
    pub audio_events: Vec<AudioEvent>,
    /// Final score, present once a terminal result is due for reporting
    /// (immediately on victory, after a fixed delay on defeat).
    pub final_score: Option<u32>,
}

/// HUD values published after every tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HudView {
    pub drone_count: usize,
    pub score: u32,
    pub difficulty: Difficulty,
    pub difficulty_label: String,
    /// Station health percentage, clamped to [0, 100].
    pub station_health: f64,
}

/// Camera placement for the renderer, shake already applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CameraView {
    pub position: Position,
    pub orientation: Orientation,
    /// Remaining shake strength in [0, 1]; 0 when the camera is steady.
    pub shake: f64,
}

/// Station placement and health for the renderer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StationView {
    pub position: Position,
    pub health: f64,
}

/// A live drone, as the renderer should place it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DroneView {
    pub id: u32,
    pub position: Position,
    pub orientation: Orientation,
    pub scale: f64,
    pub health: f64,
}

/// A storm cloud hazard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudView {
    pub id: u32,
    pub position: Position,
}

/// A tracer round in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracerView {
    pub id: u32,
    pub position: Position,
    pub orientation: Orientation,
}

/// One cosmetic explosion burst; expired particles are omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BurstView {
    pub id: u32,
    pub particles: Vec<ParticleView>,
}

/// A burst particle with its remaining lifetime (drives opacity).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: Position,
    pub lifetime: f64,
}

/// The terminal mushroom cloud while it winds down.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MushroomCloudView {
    pub position: Position,
    pub lifetime: f64,
}
