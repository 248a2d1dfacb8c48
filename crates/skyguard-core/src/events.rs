//! Events emitted by the simulation for audio feedback.

use serde::{Deserialize, Serialize};

/// Audio events for the host sound system. Fire-and-forget: the sink may
/// silently no-op if the audio subsystem never initialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// Periodic drone engine hum while the fight is active.
    DroneAmbient,
    /// A drone or station impact explosion.
    Explosion,
    /// The terminal station explosion.
    NuclearExplosion,
}
