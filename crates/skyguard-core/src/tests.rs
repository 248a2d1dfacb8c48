#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::AudioEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{Orientation, Position, SimTime};

    /// Verify the public enums round-trip through serde_json.
    #[test]
    fn test_difficulty_serde() {
        let variants = vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: Difficulty = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::Active,
            GamePhase::Paused,
            GamePhase::Victory,
            GamePhase::Defeat,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_audio_event_serde() {
        let variants = vec![
            AudioEvent::DroneAmbient,
            AudioEvent::Explosion,
            AudioEvent::NuclearExplosion,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: AudioEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_player_command_serde_tagged() {
        let cmd = PlayerCommand::SetDifficulty {
            level: Difficulty::Hard,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\""), "commands are externally tagged");
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert!(matches!(
            back,
            PlayerCommand::SetDifficulty {
                level: Difficulty::Hard
            }
        ));
    }

    #[test]
    fn test_snapshot_default_serde() {
        let snap = GameStateSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::Active);
        assert!(back.drones.is_empty());
    }

    // ---- Difficulty parameters ----

    #[test]
    fn test_difficulty_params() {
        let easy = Difficulty::Easy.params();
        assert_eq!(easy.drone_speed, 0.1);
        assert_eq!(easy.spawn_interval_ticks, ms_to_ticks(2000));
        assert_eq!(easy.max_drones, 10);

        let hard = Difficulty::Hard.params();
        assert_eq!(hard.drone_speed, 0.3);
        assert_eq!(hard.spawn_interval_ticks, ms_to_ticks(1000));
        assert_eq!(hard.max_drones, 20);
    }

    #[test]
    fn test_ms_to_ticks_exact() {
        assert_eq!(ms_to_ticks(1000), TICK_RATE as u64);
        assert_eq!(ms_to_ticks(2000), 120);
        assert_eq!(ms_to_ticks(50), 3);
        assert_eq!(ms_to_ticks(200), 12);
    }

    // ---- Geometry ----

    #[test]
    fn test_position_range() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 4.0, 0.0);
        assert!((a.range_to(&b) - 5.0).abs() < 1e-12);
        assert!((a.horizontal_range_to(&Position::new(3.0, 99.0, 4.0)) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_direction_to_is_unit() {
        let a = Position::new(1.0, 2.0, 3.0);
        let b = Position::new(-4.0, 0.5, 10.0);
        let dir = a.direction_to(&b);
        assert!((dir.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_facing_round_trips_through_forward() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(-7.0, 3.0, -12.0);
        let facing = a.facing(&b);
        let fwd = facing.forward();
        let dir = a.direction_to(&b);
        assert!((fwd - dir).length() < 1e-9);
    }

    #[test]
    fn test_orientation_rest_faces_negative_z() {
        let fwd = Orientation::default().forward();
        assert!((fwd.x).abs() < 1e-12);
        assert!((fwd.y).abs() < 1e-12);
        assert!((fwd.z + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        for _ in 0..TICK_RATE {
            t.advance();
        }
        assert_eq!(t.tick, TICK_RATE as u64);
        assert!((t.elapsed_secs - 1.0).abs() < 1e-9);
    }
}
