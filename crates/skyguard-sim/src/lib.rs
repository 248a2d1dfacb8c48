//! Combat simulation engine for SKYGUARD.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the host shell.

pub mod camera;
pub mod engine;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use skyguard_core as core;

#[cfg(test)]
mod tests;
