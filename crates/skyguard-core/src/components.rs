//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::types::{Position, Velocity};

/// Stable identifier assigned at spawn, used by presentation layers to
/// correlate place/remove commands across snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Marks an entity as an attacking drone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Drone;

/// Mutable drone state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DroneBody {
    /// Remaining hit points. Only hazard exposure drains this; player fire
    /// destroys the drone outright.
    pub health: f64,
    /// Current visual scale. Constant at base scale unless distance scaling
    /// is enabled in the session config.
    pub scale: f64,
}

/// Marks an entity as a storm cloud hazard. Drift lives in its Velocity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StormCloud;

/// A tracer projectile in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tracer {
    /// Where the tracer was fired from; used for the max-range cull.
    pub origin: Position,
}

/// One transient point of an explosion burst.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BurstParticle {
    pub position: Position,
    /// Displacement per tick.
    pub velocity: Velocity,
    /// Remaining lifetime in seconds. Expired particles stop being reported;
    /// the burst entity is removed once every member has expired.
    pub lifetime: f64,
}

/// A cosmetic explosion burst. Purely visual, no gameplay coupling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplosionBurst {
    pub particles: Vec<BurstParticle>,
}

/// The mushroom cloud raised by the terminal station explosion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MushroomCloud {
    /// Remaining lifetime in seconds; also drives presentation opacity.
    pub lifetime: f64,
}
