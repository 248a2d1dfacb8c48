//! Headless host for the air-defense simulation.
//!
//! This crate wires the simulation crates to the outside world: a fixed-rate
//! game loop thread, host-side sinks for audio cues, and the CLI runner.

pub mod game_loop;
pub mod sinks;
pub mod state;

pub use skyguard_core as core;
