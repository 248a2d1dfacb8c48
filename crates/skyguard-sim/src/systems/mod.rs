//! Systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` plus the engine-owned
//! session state they need. They do not own state of their own.

pub mod combat;
pub mod effects;
pub mod hazards;
pub mod snapshot;
pub mod spawner;
pub mod station;
pub mod targeting;
