//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::ms_to_ticks;

/// Difficulty level selected by the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// Derived parameters for a difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyParams {
    /// Drone speed in world units per tick.
    pub drone_speed: f64,
    /// Interval between drone spawns, in ticks.
    pub spawn_interval_ticks: u64,
    /// Live drone population cap.
    pub max_drones: usize,
}

impl Difficulty {
    /// The fixed (speed, spawn interval, cap) triple for this level.
    pub fn params(self) -> DifficultyParams {
        let (drone_speed, spawn_interval_ms, max_drones) = match self {
            Difficulty::Easy => (0.1, 2000, 10),
            Difficulty::Medium => (0.2, 1500, 15),
            Difficulty::Hard => (0.3, 1000, 20),
        };
        DifficultyParams {
            drone_speed,
            spawn_interval_ticks: ms_to_ticks(spawn_interval_ms),
            max_drones,
        }
    }

    /// Display label for the HUD.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// How player fire resolves against drones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireMode {
    /// Instant ray test from the view center; no projectile entity.
    #[default]
    Hitscan,
    /// Tracer projectiles with travel time, fired continuously while held.
    Tracer,
}

/// Altitude band drones spawn in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnBand {
    /// Near-horizon approach, slightly above the ground plane.
    #[default]
    Ground,
    /// 50-100 units up, descending toward the station.
    High,
}

/// Game phase (top-level state).
///
/// `Victory` and `Defeat` are one-way: once entered, gameplay systems stop
/// and only cosmetic effects wind down. Restart means a fresh engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    Paused,
    Victory,
    Defeat,
}

impl GamePhase {
    /// Whether this phase is terminal (no way back to Active).
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Victory | GamePhase::Defeat)
    }
}
