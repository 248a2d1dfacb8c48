//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless
//! (no rendering or audio dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skyguard_core::commands::PlayerCommand;
use skyguard_core::components::Drone;
use skyguard_core::constants::*;
use skyguard_core::enums::{Difficulty, DifficultyParams, FireMode, GamePhase, SpawnBand};
use skyguard_core::events::AudioEvent;
use skyguard_core::state::GameStateSnapshot;
use skyguard_core::types::SimTime;

use crate::camera::{CameraRig, InputState};
use crate::session::{ScoreState, StationState};
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new session.
///
/// Game variants (spawn band, firing mechanism, hazards, drone scaling)
/// are orthogonal flags on one engine rather than separate builds.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub difficulty: Difficulty,
    /// Hitscan or tracer-projectile firing.
    pub fire_mode: FireMode,
    /// Altitude band drones spawn in.
    pub spawn_band: SpawnBand,
    /// Whether storm cloud hazards are active.
    pub hazards: bool,
    /// Whether drone visual scale grows as they close on the station.
    pub drone_scaling: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            difficulty: Difficulty::Easy,
            fire_mode: FireMode::Hitscan,
            spawn_band: SpawnBand::Ground,
            hazards: false,
            drone_scaling: false,
        }
    }
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    difficulty: Difficulty,
    params: DifficultyParams,
    fire_mode: FireMode,
    spawn_band: SpawnBand,
    hazards: bool,
    drone_scaling: bool,

    rng: ChaCha8Rng,
    next_entity_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    audio_events: Vec<AudioEvent>,

    camera: CameraRig,
    input: InputState,
    station: StationState,
    score: ScoreState,

    last_spawn_tick: u64,
    last_storm_tick: u64,
    last_fire_tick: Option<u64>,
    last_ambient_tick: u64,

    shake_secs: f64,
    defeat_entered_tick: Option<u64>,
    final_score: Option<u32>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            difficulty: config.difficulty,
            params: config.difficulty.params(),
            fire_mode: config.fire_mode,
            spawn_band: config.spawn_band,
            hazards: config.hazards,
            drone_scaling: config.drone_scaling,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_entity_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            camera: CameraRig::default(),
            input: InputState::default(),
            station: StationState::default(),
            score: ScoreState::default(),
            last_spawn_tick: 0,
            last_storm_tick: 0,
            last_fire_tick: None,
            last_ambient_tick: 0,
            shake_secs: 0.0,
            defeat_entered_tick: None,
            final_score: None,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// Paused ticks fully no-op (beyond command processing); terminal ticks
    /// only wind down cosmetic effects.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        match self.phase {
            GamePhase::Active => {
                self.run_systems();
                self.evaluate_terminal();
                self.time.advance();
            }
            GamePhase::Victory | GamePhase::Defeat => {
                systems::effects::run(
                    &mut self.world,
                    &mut self.despawn_buffer,
                    &mut self.shake_secs,
                );
                self.report_defeat();
                self.time.advance();
            }
            GamePhase::Paused => {}
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.difficulty,
            &self.camera,
            &self.station,
            &self.score,
            audio_events,
            self.shake_secs,
            self.final_score,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the score state.
    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Get a read-only reference to the station state.
    pub fn station(&self) -> &StationState {
        &self.station
    }

    /// Number of live drones.
    pub fn drone_count(&self) -> usize {
        self.world.query::<&Drone>().iter().count()
    }

    /// Spawn a drone at an arbitrary position (for scenario tests).
    #[cfg(test)]
    pub fn spawn_drone_at(&mut self, position: skyguard_core::types::Position) -> hecs::Entity {
        use skyguard_core::components::{DroneBody, EntityId};
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;
        self.world.spawn((
            Drone,
            id,
            position,
            position.facing(&self.station.position),
            DroneBody {
                health: DRONE_HEALTH,
                scale: DRONE_BASE_SCALE,
            },
        ))
    }

    /// Spawn a drone with a specific health pool (for hazard scenario tests).
    #[cfg(test)]
    pub fn spawn_drone_with_health(
        &mut self,
        position: skyguard_core::types::Position,
        health: f64,
    ) -> hecs::Entity {
        let entity = self.spawn_drone_at(position);
        if let Ok(mut body) = self
            .world
            .get::<&mut skyguard_core::components::DroneBody>(entity)
        {
            body.health = health;
        }
        entity
    }

    /// Spawn a storm cloud at an arbitrary position (for scenario tests).
    #[cfg(test)]
    pub fn spawn_cloud_at(&mut self, position: skyguard_core::types::Position) -> hecs::Entity {
        use skyguard_core::components::{EntityId, StormCloud};
        use skyguard_core::types::Velocity;
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;
        self.world
            .spawn((StormCloud, id, position, Velocity::default()))
    }

    /// Mutable station access (for scenario tests).
    #[cfg(test)]
    pub fn station_mut(&mut self) -> &mut StationState {
        &mut self.station
    }

    /// Mutable score access (for scenario tests).
    #[cfg(test)]
    pub fn score_mut(&mut self) -> &mut ScoreState {
        &mut self.score
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Aim { dx, dy } => {
                // Aim input is dropped while paused or terminal.
                if self.phase == GamePhase::Active {
                    self.input.pending_dx += dx;
                    self.input.pending_dy += dy;
                }
            }
            PlayerCommand::Fire => {
                if self.phase == GamePhase::Active {
                    self.input.fire_pressed = true;
                }
            }
            PlayerCommand::SetFireHeld { held } => {
                self.input.fire_held = held;
            }
            PlayerCommand::SetDifficulty { level } => {
                self.difficulty = level;
                self.params = level.params();
                self.last_spawn_tick = self.time.tick;
                // Difficulty changes always clear the live population;
                // score and station health are untouched.
                self.despawn_buffer.clear();
                for (entity, _drone) in self.world.query_mut::<&Drone>() {
                    self.despawn_buffer.push(entity);
                }
                for entity in self.despawn_buffer.drain(..) {
                    let _ = self.world.despawn(entity);
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let current_tick = self.time.tick;

        // 1. Sample buffered aim input
        let (dx, dy) = self.input.take_aim();
        self.camera.apply_aim(dx, dy);

        // 2. Spawning (independent drone and storm timers)
        systems::spawner::run_drones(
            &mut self.world,
            &mut self.rng,
            &mut self.next_entity_id,
            &self.station,
            &self.params,
            self.spawn_band,
            &mut self.last_spawn_tick,
            current_tick,
        );
        if self.hazards {
            systems::spawner::run_storms(
                &mut self.world,
                &mut self.rng,
                &mut self.next_entity_id,
                &mut self.last_storm_tick,
                current_tick,
            );
        }

        // 3. Drone movement & targeting
        systems::targeting::run(
            &mut self.world,
            &mut self.rng,
            &self.station,
            self.params.drone_speed,
            self.drone_scaling,
        );

        // 4. Station impacts
        let impacted = systems::station::run_impacts(
            &mut self.world,
            &mut self.rng,
            &mut self.next_entity_id,
            &mut self.station,
            &mut self.score,
            &mut self.audio_events,
            &mut self.despawn_buffer,
            current_tick,
        );

        // 5. Storm hazards (drift, drone attrition, lightning)
        if self.hazards {
            systems::hazards::run(
                &mut self.world,
                &mut self.rng,
                &mut self.next_entity_id,
                &mut self.station,
                &mut self.score,
                &mut self.audio_events,
                &mut self.despawn_buffer,
                current_tick,
            );
        }

        // 6. Player fire
        systems::combat::run(
            &mut self.world,
            &mut self.rng,
            &mut self.next_entity_id,
            &self.camera,
            self.fire_mode,
            &mut self.input,
            &mut self.last_fire_tick,
            &mut self.score,
            &mut self.audio_events,
            &mut self.despawn_buffer,
            current_tick,
        );

        // 7. Station recovery
        systems::station::run_recovery(&mut self.station, impacted, current_tick);

        // 8. Cosmetic effects
        systems::effects::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.shake_secs,
        );

        // 9. Ambient audio cue
        if current_tick.saturating_sub(self.last_ambient_tick)
            >= ms_to_ticks(DRONE_AMBIENT_INTERVAL_MS)
        {
            self.audio_events.push(AudioEvent::DroneAmbient);
            self.last_ambient_tick = current_tick;
        }
    }

    /// Evaluate terminal conditions after all per-tick updates.
    /// Defeat takes precedence when both would hold on the same tick.
    fn evaluate_terminal(&mut self) {
        if self.station.health <= 0.0 {
            self.phase = GamePhase::Defeat;
            self.defeat_entered_tick = Some(self.time.tick);
            self.shake_secs = SHAKE_DURATION_SECS;
            world_setup::spawn_terminal_burst(
                &mut self.world,
                &mut self.rng,
                &mut self.next_entity_id,
                self.station.position,
            );
            world_setup::spawn_mushroom_cloud(
                &mut self.world,
                &mut self.next_entity_id,
                self.station.position,
            );
            self.audio_events.push(AudioEvent::NuclearExplosion);
            return;
        }

        // Empty-at-start is not victory: at least one drone must have died
        // for score before an empty battlefield counts as won.
        if self.score.score > 0 && self.drone_count() == 0 {
            self.phase = GamePhase::Victory;
            self.final_score = Some(self.score.score);
        }
    }

    /// After defeat, the final score is withheld until the report delay
    /// has elapsed, so the host shows the result after the explosion.
    fn report_defeat(&mut self) {
        if self.phase != GamePhase::Defeat || self.final_score.is_some() {
            return;
        }
        if let Some(entered) = self.defeat_entered_tick {
            if self.time.tick.saturating_sub(entered) >= ms_to_ticks(DEFEAT_REPORT_DELAY_MS) {
                self.final_score = Some(self.score.score);
            }
        }
    }
}
