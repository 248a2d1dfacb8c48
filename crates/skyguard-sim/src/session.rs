//! Session data owned by the engine rather than the ECS world.
//!
//! The station is a singleton for the session and the score is a plain
//! running total, so neither lives in the world as an entity.

use skyguard_core::constants::*;
use skyguard_core::types::Position;

/// The defended station: fixed position, clamped health pool, and the
/// bookkeeping needed for damage-gated recovery.
#[derive(Debug, Clone)]
pub struct StationState {
    pub position: Position,
    /// Health in [0, STATION_MAX_HEALTH].
    pub health: f64,
    /// Tick of the most recent damage, if any. Recovery stays suppressed
    /// until the recovery delay has elapsed past this.
    pub last_damage_tick: Option<u64>,
}

impl Default for StationState {
    fn default() -> Self {
        let (x, y, z) = STATION_POSITION;
        Self {
            position: Position::new(x, y, z),
            health: STATION_MAX_HEALTH,
            last_damage_tick: None,
        }
    }
}

impl StationState {
    /// Apply damage and stamp the damage tick. Health is clamped at zero.
    pub fn apply_damage(&mut self, amount: f64, tick: u64) {
        self.health = (self.health - amount).max(0.0);
        self.last_damage_tick = Some(tick);
    }

    /// The world positions of the three dome sub-targets.
    pub fn dome_positions(&self) -> [Position; 3] {
        DOME_OFFSETS.map(|(dx, dy, dz)| {
            Position::new(self.position.x + dx, self.position.y + dy, self.position.z + dz)
        })
    }
}

/// Running score state tracked by the engine. The score itself is a
/// monotone non-negative total; the counters break it down for the HUD
/// and for tests.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub score: u32,
    pub drones_shot: u32,
    pub hazard_kills: u32,
    pub station_impacts: u32,
}

impl ScoreState {
    pub fn award_kill(&mut self) {
        self.score += SCORE_PER_KILL;
        self.drones_shot += 1;
    }

    pub fn award_hazard_kill(&mut self) {
        self.score += SCORE_PER_HAZARD_KILL;
        self.hazard_kills += 1;
    }
}
