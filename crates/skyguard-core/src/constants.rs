//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz). One tick per nominal rendered frame.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Convert a millisecond interval into whole ticks.
/// Interval timers run on tick counts so timing stays exact.
pub const fn ms_to_ticks(ms: u64) -> u64 {
    ms * TICK_RATE as u64 / 1000
}

// --- Station ---

/// Station position in world units.
pub const STATION_POSITION: (f64, f64, f64) = (50.0, -5.0, -50.0);

/// Offsets of the three dome sub-targets relative to the station.
pub const DOME_OFFSETS: [(f64, f64, f64); 3] =
    [(-10.0, 5.0, 0.0), (0.0, 5.0, 0.0), (10.0, 5.0, 0.0)];

/// Maximum station health. Health is clamped to [0, STATION_MAX_HEALTH].
pub const STATION_MAX_HEALTH: f64 = 100.0;

/// Distance from the station at which a drone counts as an impact.
pub const STATION_IMPACT_RANGE: f64 = 15.0;

/// Station health lost per drone impact.
pub const STATION_IMPACT_DAMAGE: f64 = 10.0;

/// Health regenerated per second once recovery is active.
pub const HEALTH_RECOVERY_RATE: f64 = 0.5;

/// Quiet period after the last damage before recovery starts (ms).
pub const HEALTH_RECOVERY_DELAY_MS: u64 = 1000;

// --- Drones ---

/// Radius of the spawn circle around the station.
pub const DRONE_SPAWN_RADIUS: f64 = 100.0;

/// Low spawn band: altitude sampled from SPAWN_LOW_BASE + rand * SPAWN_LOW_SPREAD.
pub const SPAWN_LOW_BASE: f64 = -5.0;
pub const SPAWN_LOW_SPREAD: f64 = 5.0;

/// High spawn band: altitude sampled from SPAWN_HIGH_BASE + rand * SPAWN_HIGH_SPREAD.
pub const SPAWN_HIGH_BASE: f64 = 50.0;
pub const SPAWN_HIGH_SPREAD: f64 = 50.0;

/// Hit points per drone. Only hazards chip away at this; player fire
/// destroys a drone outright.
pub const DRONE_HEALTH: f64 = 10.0;

/// Extra descent per tick while a drone sits above its target altitude.
pub const DRONE_DESCENT_RATE: f64 = 0.1;

/// Altitude margin above the target before descent kicks in.
pub const DRONE_DESCENT_MARGIN: f64 = 5.0;

/// Base visual scale of a drone.
pub const DRONE_BASE_SCALE: f64 = 2.0;

/// Distance over which the drone scale interpolates toward double size.
pub const DRONE_SCALE_RANGE: f64 = 100.0;

/// Bounding radius used for hitscan rays and tracer proximity, at base scale.
pub const DRONE_HIT_RADIUS: f64 = 3.0;

// --- Firing ---

/// Minimum interval between hitscan shots (ms).
pub const HITSCAN_COOLDOWN_MS: u64 = 200;

/// Minimum interval between tracer shots while the trigger is held (ms).
pub const TRACER_COOLDOWN_MS: u64 = 50;

/// Tracer muzzle offset in front of the camera.
pub const TRACER_MUZZLE_OFFSET: f64 = 2.0;

/// Tracer speed in world units per second.
pub const TRACER_SPEED: f64 = 100.0;

/// Tracers are culled beyond this distance from the camera.
pub const TRACER_MAX_RANGE: f64 = 100.0;

// --- Storm hazards ---

/// Maximum simultaneous storm clouds.
pub const MAX_STORM_CLOUDS: usize = 3;

/// Interval between storm cloud spawns (ms).
pub const STORM_SPAWN_INTERVAL_MS: u64 = 10_000;

/// Half-extent of the square storm clouds spawn in (world x/z).
pub const STORM_SPAWN_EXTENT: f64 = 80.0;

/// Storm cloud altitude band: base + rand * spread.
pub const STORM_ALTITUDE_BASE: f64 = 60.0;
pub const STORM_ALTITUDE_SPREAD: f64 = 20.0;

/// Per-axis drift magnitude: (rand - 0.5) * STORM_DRIFT per tick.
pub const STORM_DRIFT: f64 = 0.05;

/// Clouds drifting beyond this bound on x or z are removed.
pub const STORM_BOUNDS: f64 = 100.0;

/// Radius within which a cloud damages drones.
pub const STORM_DAMAGE_RADIUS: f64 = 20.0;

/// Drone damage per second of storm exposure.
pub const STORM_DAMAGE_TO_DRONES: f64 = 1.0;

/// Per-tick probability of a lightning strike per active cloud.
pub const STORM_LIGHTNING_CHANCE: f64 = 0.01;

/// Station health lost to a lightning strike.
pub const STORM_LIGHTNING_DAMAGE: f64 = 5.0;

/// A cloud must be within this range of the station to strike it.
pub const STORM_LIGHTNING_RANGE: f64 = 50.0;

// --- Scoring ---

/// Score awarded for a drone destroyed by player fire.
pub const SCORE_PER_KILL: u32 = 100;

/// Score awarded for a drone destroyed by a storm hazard.
pub const SCORE_PER_HAZARD_KILL: u32 = 50;

// --- Effects ---

/// Particles in a regular explosion burst.
pub const EXPLOSION_PARTICLES: usize = 20;

/// Per-axis particle velocity magnitude: (rand - 0.5) * scale, per tick.
pub const EXPLOSION_VELOCITY_SCALE: f64 = 2.0;

/// Lifetime of a regular explosion particle (seconds).
pub const EXPLOSION_LIFETIME_SECS: f64 = 1.0;

/// Particles in the terminal station explosion.
pub const TERMINAL_EXPLOSION_PARTICLES: usize = 100;

/// Per-axis velocity magnitude for terminal explosion particles.
pub const TERMINAL_EXPLOSION_VELOCITY_SCALE: f64 = 5.0;

/// Lifetime of a terminal explosion particle (seconds).
pub const TERMINAL_EXPLOSION_LIFETIME_SECS: f64 = 2.0;

/// Lifetime of the terminal mushroom cloud (seconds).
pub const MUSHROOM_CLOUD_LIFETIME_SECS: f64 = 5.0;

/// Camera shake duration after the terminal explosion (seconds).
pub const SHAKE_DURATION_SECS: f64 = 2.0;

/// Camera shake intensity (world units at full strength).
pub const SHAKE_INTENSITY: f64 = 0.5;

/// Delay before the final score is reported after defeat (ms).
pub const DEFEAT_REPORT_DELAY_MS: u64 = 3000;

// --- Camera ---

/// Camera rest position.
pub const CAMERA_POSITION: (f64, f64, f64) = (50.0, 5.0, 10.0);

/// Aim sensitivity: radians per input delta unit.
pub const AIM_SENSITIVITY: f64 = 0.002;

/// Pitch clamp (radians).
pub const AIM_PITCH_LIMIT: f64 = std::f64::consts::FRAC_PI_4;

/// Yaw clamp (radians).
pub const AIM_YAW_LIMIT: f64 = std::f64::consts::FRAC_PI_3;

// --- Audio ---

/// Interval between drone-ambient audio cues while the fight is active (ms).
pub const DRONE_AMBIENT_INTERVAL_MS: u64 = 2000;
