//! State shared between the host and the game loop thread.

use std::sync::{Arc, Mutex};

use skyguard_core::commands::PlayerCommand;
use skyguard_core::state::GameStateSnapshot;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest-snapshot slot shared with the game loop thread, for synchronous
/// polling by the host.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

/// A fresh, empty snapshot slot.
pub fn shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}
