//! Game loop thread — runs the simulation engine at 60Hz and emits snapshots.
//!
//! The engine is created inside this thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel. Snapshots go to an
//! observer callback and into shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::Mutex;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use skyguard_core::constants::TICK_RATE;
use skyguard_core::state::GameStateSnapshot;
use skyguard_sim::engine::{SimConfig, SimulationEngine};

use crate::state::{GameLoopCommand, SharedSnapshot};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Callback invoked with every snapshot the loop produces.
pub type SnapshotObserver = Box<dyn FnMut(&GameStateSnapshot) + Send>;

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the host to use, plus the join handle.
pub fn spawn_game_loop(
    config: SimConfig,
    observer: SnapshotObserver,
    latest_snapshot: SharedSnapshot,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("skyguard-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, observer, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until a Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    mut observer: SnapshotObserver,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (pause and terminal phases are handled
        //    inside the engine)
        let snapshot = engine.tick();

        // 3. Hand the snapshot to the host
        observer(&snapshot);

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next tick boundary
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::shared_snapshot;
    use skyguard_core::commands::PlayerCommand;
    use skyguard_core::enums::Difficulty;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::Fire)).unwrap();
        tx.send(GameLoopCommand::Player(PlayerCommand::Pause)).unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Player(PlayerCommand::Fire)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::Player(PlayerCommand::Pause)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = SimulationEngine::new(SimConfig {
            difficulty: Difficulty::Hard,
            hazards: true,
            ..Default::default()
        });

        // Run enough ticks to populate entities
        for _ in 0..1200 {
            engine.tick();
        }

        let snapshot = engine.tick();
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_loop_thread_ticks_and_shuts_down() {
        let latest = shared_snapshot();
        let ticks = Arc::new(AtomicUsize::new(0));
        let observed = ticks.clone();

        let (tx, handle) = spawn_game_loop(
            SimConfig::default(),
            Box::new(move |_snapshot| {
                observed.fetch_add(1, Ordering::Relaxed);
            }),
            latest.clone(),
        )
        .unwrap();

        // Give the loop a few tick periods to run
        std::thread::sleep(TICK_DURATION * 10);
        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();

        assert!(ticks.load(Ordering::Relaxed) > 0);
        assert!(latest.lock().unwrap().is_some());
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.667ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
