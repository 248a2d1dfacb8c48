//! Player commands sent from the host shell to the simulation.
//!
//! Input callbacks never touch simulation entities directly: commands are
//! queued and drained at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::Difficulty;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Relative aim movement (mouse delta or joystick drag), in input units.
    /// Accumulated and applied to the camera at the next tick start.
    Aim { dx: f64, dy: f64 },
    /// Single fire trigger (hitscan shot, or one tracer in tracer mode).
    Fire,
    /// Continuous-fire state for tracer mode.
    SetFireHeld { held: bool },
    /// Select a difficulty level. Clears the live drone population and
    /// re-derives spawn parameters; score and station health are untouched.
    SetDifficulty { level: Difficulty },
    /// Pause the simulation (e.g. tab hidden). State is frozen, not reset.
    Pause,
    /// Resume from pause at exactly the frozen state.
    Resume,
}
