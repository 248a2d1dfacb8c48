//! Tests for the simulation engine: determinism, invariants, and the
//! combat/station/hazard scenario suite.

use skyguard_core::commands::PlayerCommand;
use skyguard_core::constants::*;
use skyguard_core::enums::{Difficulty, FireMode, GamePhase, SpawnBand};
use skyguard_core::events::AudioEvent;
use skyguard_core::types::Position;

use crate::engine::{SimConfig, SimulationEngine};

fn engine_with(config: SimConfig) -> SimulationEngine {
    SimulationEngine::new(config)
}

fn default_engine() -> SimulationEngine {
    SimulationEngine::new(SimConfig::default())
}

/// A drone parked dead ahead of the camera's rest orientation, well outside
/// the station impact range.
fn drone_in_crosshairs(engine: &mut SimulationEngine) {
    engine.spawn_drone_at(Position::new(50.0, 5.0, -30.0));
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let config = SimConfig {
        seed: 12345,
        difficulty: Difficulty::Medium,
        fire_mode: FireMode::Tracer,
        spawn_band: SpawnBand::High,
        hazards: true,
        drone_scaling: true,
    };
    let mut engine_a = engine_with(config.clone());
    let mut engine_b = engine_with(config);

    engine_a.queue_command(PlayerCommand::SetFireHeld { held: true });
    engine_b.queue_command(PlayerCommand::SetFireHeld { held: true });

    for i in 0..400 {
        if i % 10 == 0 {
            engine_a.queue_command(PlayerCommand::Aim { dx: 15.0, dy: -4.0 });
            engine_b.queue_command(PlayerCommand::Aim { dx: 15.0, dy: -4.0 });
        }
        let snap_a = engine_a.tick();
        let snap_b = engine_b.tick();

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = engine_with(SimConfig {
        seed: 111,
        ..Default::default()
    });
    let mut engine_b = engine_with(SimConfig {
        seed: 222,
        ..Default::default()
    });

    // Spawn angles draw from the seeded RNG, so snapshots diverge once the
    // first drone appears.
    let mut diverged = false;
    for _ in 0..300 {
        let json_a = serde_json::to_string(&engine_a.tick()).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick()).unwrap();
        if json_a != json_b {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "Different seeds should produce divergent output");
}

// ---- Invariants ----

#[test]
fn test_station_health_stays_clamped() {
    // No player fire: drones pile into the station until defeat.
    let mut engine = engine_with(SimConfig {
        difficulty: Difficulty::Hard,
        hazards: true,
        ..Default::default()
    });

    for _ in 0..5000 {
        let snap = engine.tick();
        assert!(
            (0.0..=STATION_MAX_HEALTH).contains(&snap.hud.station_health),
            "health {} out of range",
            snap.hud.station_health
        );
    }
    assert_eq!(engine.phase(), GamePhase::Defeat);
}

#[test]
fn test_drone_population_never_exceeds_cap() {
    let mut engine = engine_with(SimConfig {
        difficulty: Difficulty::Hard,
        ..Default::default()
    });
    let cap = Difficulty::Hard.params().max_drones;

    for _ in 0..5000 {
        let snap = engine.tick();
        assert!(
            snap.hud.drone_count <= cap,
            "population {} exceeds cap {}",
            snap.hud.drone_count,
            cap
        );
    }
}

#[test]
fn test_spawn_count_matches_elapsed_over_interval() {
    let mut engine = default_engine();
    let interval = Difficulty::Easy.params().spawn_interval_ticks;

    // 601 ticks at the easy interval (120): spawns at ticks 120, 240, 360,
    // 480, 600 — exactly floor(600 / 120).
    let mut last = engine.tick();
    for _ in 0..600 {
        last = engine.tick();
    }
    assert_eq!(interval, 120);
    assert_eq!(last.hud.drone_count, 5);
}

// ---- Difficulty ----

#[test]
fn test_difficulty_setter_idempotent() {
    let mut engine = default_engine();
    engine.station_mut().health = 73.5;

    // Let two drones spawn naturally, then switch difficulty twice.
    for _ in 0..250 {
        engine.tick();
    }
    let before = engine.tick();
    assert!(before.hud.drone_count > 0);

    engine.queue_command(PlayerCommand::SetDifficulty {
        level: Difficulty::Medium,
    });
    engine.queue_command(PlayerCommand::SetDifficulty {
        level: Difficulty::Medium,
    });
    let after = engine.tick();

    assert_eq!(after.hud.drone_count, 0, "population always clears");
    assert_eq!(after.hud.score, before.hud.score, "score untouched");
    assert_eq!(after.hud.station_health, 73.5, "health untouched");
    assert_eq!(after.hud.difficulty, Difficulty::Medium);
    assert_eq!(after.hud.difficulty_label, "Medium");

    // Derived spawn interval now runs at the medium rate: exactly one drone
    // one interval later, none the tick before.
    let medium_interval = Difficulty::Medium.params().spawn_interval_ticks;
    let mut snap = after;
    for _ in 0..medium_interval - 1 {
        snap = engine.tick();
    }
    assert_eq!(snap.hud.drone_count, 0);
    snap = engine.tick();
    assert_eq!(snap.hud.drone_count, 1);
}

// ---- Combat scenarios ----

#[test]
fn test_direct_kill_awards_score_and_burst() {
    let mut engine = default_engine();
    drone_in_crosshairs(&mut engine);

    engine.queue_command(PlayerCommand::Fire);
    let snap = engine.tick();

    assert_eq!(snap.hud.score, SCORE_PER_KILL);
    assert_eq!(snap.hud.drone_count, 0);
    assert_eq!(snap.bursts.len(), 1, "one explosion burst at the kill");
    assert!(snap.audio_events.contains(&AudioEvent::Explosion));
    assert_eq!(engine.score().drones_shot, 1);

    // Burst particles start from the drone's last position.
    let burst = &snap.bursts[0];
    assert_eq!(burst.particles.len(), EXPLOSION_PARTICLES);
    for p in &burst.particles {
        assert!(p.position.range_to(&Position::new(50.0, 5.0, -30.0)) < 5.0);
    }
}

#[test]
fn test_hitscan_misses_off_axis_drone() {
    let mut engine = default_engine();
    // Well off the view center ray.
    engine.spawn_drone_at(Position::new(80.0, 5.0, -30.0));

    engine.queue_command(PlayerCommand::Fire);
    let snap = engine.tick();

    assert_eq!(snap.hud.score, 0);
    assert_eq!(snap.hud.drone_count, 1);
    assert!(snap.bursts.is_empty());
}

#[test]
fn test_hitscan_fire_rate_gate() {
    let mut engine = default_engine();
    drone_in_crosshairs(&mut engine);
    engine.spawn_drone_at(Position::new(50.0, 5.0, -35.0));

    // First shot kills the nearer drone; an immediate second trigger is
    // inside the cooldown window and must not fire.
    engine.queue_command(PlayerCommand::Fire);
    let snap = engine.tick();
    assert_eq!(snap.hud.drone_count, 1);

    engine.queue_command(PlayerCommand::Fire);
    let snap = engine.tick();
    assert_eq!(snap.hud.drone_count, 1, "second shot suppressed by cooldown");
    assert_eq!(snap.hud.score, SCORE_PER_KILL);
}

#[test]
fn test_tracer_kill() {
    let mut engine = engine_with(SimConfig {
        fire_mode: FireMode::Tracer,
        ..Default::default()
    });
    engine.spawn_drone_at(Position::new(50.0, 5.0, -20.0));
    engine.queue_command(PlayerCommand::SetFireHeld { held: true });

    let mut saw_tracer = false;
    let mut killed_at = None;
    for i in 0..60 {
        let snap = engine.tick();
        saw_tracer |= !snap.tracers.is_empty();
        if snap.hud.score > 0 {
            killed_at = Some(i);
            break;
        }
    }

    assert!(saw_tracer, "tracers should appear in snapshots while in flight");
    assert!(killed_at.is_some(), "tracer never caught the drone");
    assert_eq!(engine.score().score, SCORE_PER_KILL);
    assert_eq!(engine.drone_count(), 0);
}

#[test]
fn test_tracer_culled_beyond_max_range() {
    let mut engine = engine_with(SimConfig {
        fire_mode: FireMode::Tracer,
        ..Default::default()
    });

    engine.queue_command(PlayerCommand::SetFireHeld { held: true });
    let snap = engine.tick();
    assert_eq!(snap.tracers.len(), 1);
    engine.queue_command(PlayerCommand::SetFireHeld { held: false });

    // 100 units at 100 u/s is 60 ticks of flight.
    let mut snap = engine.tick();
    for _ in 0..90 {
        snap = engine.tick();
    }
    assert!(snap.tracers.is_empty(), "tracer should be culled past max range");
    assert_eq!(snap.hud.score, 0);
}

// ---- Station scenarios ----

#[test]
fn test_station_impact_damages_without_score() {
    let mut engine = default_engine();
    // Inside the impact range of the station at (50, -5, -50).
    engine.spawn_drone_at(Position::new(50.0, -5.0, -40.0));

    let snap = engine.tick();
    assert_eq!(snap.hud.drone_count, 0, "impacting drone is removed");
    assert_eq!(snap.hud.score, 0, "impacts award no score");
    assert_eq!(
        snap.hud.station_health,
        STATION_MAX_HEALTH - STATION_IMPACT_DAMAGE
    );
    assert!(snap.audio_events.contains(&AudioEvent::Explosion));
    assert_eq!(engine.score().station_impacts, 1);

    // Recovery stays suppressed for the full delay window.
    let delay = ms_to_ticks(HEALTH_RECOVERY_DELAY_MS);
    let mut snap = engine.tick();
    for _ in 0..delay - 1 {
        snap = engine.tick();
    }
    assert_eq!(snap.hud.station_health, 90.0, "no recovery inside the delay");

    let snap = engine.tick();
    assert!(
        snap.hud.station_health > 90.0,
        "recovery resumes after the delay"
    );
    assert!(snap.hud.station_health < STATION_MAX_HEALTH);
}

#[test]
fn test_recovery_rate_and_clamp() {
    let mut engine = default_engine();
    engine.station_mut().health = 50.0;
    engine.station_mut().last_damage_tick = Some(0);

    let delay = ms_to_ticks(HEALTH_RECOVERY_DELAY_MS);
    let ticks = 200u64;
    let mut last = 50.0;
    for _ in 0..ticks {
        let snap = engine.tick();
        assert!(snap.hud.station_health >= last, "recovery is monotone");
        last = snap.hud.station_health;
    }

    // Recovery runs on every tick whose quiet period exceeds the delay.
    let recovering_ticks = ticks - delay - 1;
    let expected = 50.0 + recovering_ticks as f64 * HEALTH_RECOVERY_RATE * DT;
    assert!(
        (last - expected).abs() < 1e-9,
        "expected {expected}, got {last}"
    );
}

#[test]
fn test_recovery_clamps_at_max() {
    let mut engine = default_engine();
    engine.station_mut().health = 99.99;
    engine.station_mut().last_damage_tick = Some(0);

    let mut snap = engine.tick();
    for _ in 0..300 {
        snap = engine.tick();
    }
    assert_eq!(snap.hud.station_health, STATION_MAX_HEALTH);
}

// ---- Hazard scenarios ----

#[test]
fn test_hazard_depletes_and_kills_drone() {
    let mut engine = engine_with(SimConfig {
        hazards: true,
        ..Default::default()
    });
    // Drone far from the station, sitting inside a cloud's damage radius.
    engine.spawn_drone_with_health(Position::new(50.0, -5.0, 50.0), 0.5);
    engine.spawn_cloud_at(Position::new(50.0, -5.0, 50.0));

    // 0.5 health at 1.0/s drains in 30 ticks.
    let mut won = false;
    for _ in 0..45 {
        let snap = engine.tick();
        if snap.hud.score > 0 {
            won = true;
            assert_eq!(snap.hud.score, SCORE_PER_HAZARD_KILL);
            break;
        }
    }
    assert!(won, "storm exposure should have destroyed the drone");
    assert_eq!(engine.score().hazard_kills, 1);
    assert_eq!(engine.score().drones_shot, 0);
    assert_eq!(
        engine.station().health,
        STATION_MAX_HEALTH,
        "hazard kills do not damage the station"
    );
}

#[test]
fn test_storm_clouds_respect_timer_and_cap() {
    let mut engine = engine_with(SimConfig {
        hazards: true,
        ..Default::default()
    });
    let interval = ms_to_ticks(STORM_SPAWN_INTERVAL_MS);
    assert_eq!(interval, 600);

    let mut snap = engine.tick();
    for _ in 0..interval {
        snap = engine.tick();
    }
    assert_eq!(snap.clouds.len(), 1, "first cloud after one interval");

    for _ in 0..5000 {
        let snap = engine.tick();
        assert!(snap.clouds.len() <= MAX_STORM_CLOUDS);
    }
}

// ---- Terminal states ----

#[test]
fn test_defeat_triggers_exactly_once() {
    let mut engine = default_engine();
    engine.station_mut().health = 5.0;
    engine.spawn_drone_at(Position::new(50.0, -5.0, -40.0));

    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Defeat);
    assert_eq!(snap.hud.station_health, 0.0);
    assert!(snap.mushroom_cloud.is_some());
    assert!(snap.audio_events.contains(&AudioEvent::NuclearExplosion));
    assert!(snap.camera.shake > 0.9, "terminal explosion shakes the camera");
    assert!(snap.final_score.is_none(), "report waits for the delay");

    // Further ticks stay in defeat without re-triggering the terminal
    // explosion; the final score appears after the report delay.
    let report = ms_to_ticks(DEFEAT_REPORT_DELAY_MS);
    let mut reported_at = None;
    for i in 0..report + 20 {
        let snap = engine.tick();
        assert_eq!(snap.phase, GamePhase::Defeat);
        assert!(
            !snap.audio_events.contains(&AudioEvent::NuclearExplosion),
            "terminal explosion must not re-trigger"
        );
        if snap.final_score.is_some() && reported_at.is_none() {
            reported_at = Some(i);
        }
    }
    assert_eq!(engine.phase(), GamePhase::Defeat);
    let reported_at = reported_at.expect("final score was never reported");
    assert!(reported_at >= report - 2, "report came before the delay");
}

#[test]
fn test_terminal_effects_wind_down_after_defeat() {
    let mut engine = default_engine();
    engine.station_mut().health = 5.0;
    engine.spawn_drone_at(Position::new(50.0, -5.0, -40.0));
    engine.tick();

    // Mushroom cloud lives 5 s; bursts at most 2 s. Everything decays even
    // though gameplay systems have stopped.
    let mut snap = engine.tick();
    assert!(snap.mushroom_cloud.is_some());
    for _ in 0..ms_to_ticks(5200) {
        snap = engine.tick();
    }
    assert!(snap.mushroom_cloud.is_none());
    assert!(snap.bursts.is_empty());
    assert_eq!(snap.camera.shake, 0.0);
}

#[test]
fn test_victory_on_clearing_the_sky() {
    let mut engine = default_engine();
    drone_in_crosshairs(&mut engine);

    engine.queue_command(PlayerCommand::Fire);
    let snap = engine.tick();

    assert_eq!(snap.phase, GamePhase::Victory);
    assert_eq!(snap.final_score, Some(SCORE_PER_KILL));
}

#[test]
fn test_no_victory_at_empty_start() {
    let mut engine = default_engine();
    // Before the first spawn interval the sky is empty and score is zero;
    // that must not count as victory.
    for _ in 0..100 {
        let snap = engine.tick();
        assert_eq!(snap.phase, GamePhase::Active);
        assert!(snap.final_score.is_none());
    }
}

// ---- Pause ----

#[test]
fn test_pause_freezes_and_resume_continues() {
    let mut engine = engine_with(SimConfig {
        difficulty: Difficulty::Hard,
        ..Default::default()
    });
    for _ in 0..200 {
        engine.tick();
    }

    engine.queue_command(PlayerCommand::Pause);
    let frozen = engine.tick();
    assert_eq!(frozen.phase, GamePhase::Paused);
    let frozen_json = serde_json::to_string(&frozen).unwrap();

    for _ in 0..50 {
        let snap = engine.tick();
        assert_eq!(serde_json::to_string(&snap).unwrap(), frozen_json);
    }

    engine.queue_command(PlayerCommand::Resume);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Active);
    assert_eq!(snap.time.tick, frozen.time.tick + 1);
}

// ---- Camera & ambient ----

#[test]
fn test_aim_limits() {
    let mut engine = default_engine();
    engine.queue_command(PlayerCommand::Aim {
        dx: 1.0e6,
        dy: -1.0e6,
    });
    let snap = engine.tick();

    assert_eq!(snap.camera.orientation.yaw, -AIM_YAW_LIMIT);
    assert_eq!(snap.camera.orientation.pitch, AIM_PITCH_LIMIT);
}

#[test]
fn test_drone_ambient_cue_on_timer() {
    let mut engine = default_engine();
    let mut heard = false;
    for _ in 0..ms_to_ticks(DRONE_AMBIENT_INTERVAL_MS) + 5 {
        let snap = engine.tick();
        heard |= snap.audio_events.contains(&AudioEvent::DroneAmbient);
    }
    assert!(heard, "ambient cue should fire on its interval");
}

#[test]
fn test_lock_target_tracks_nearest_drone() {
    let mut engine = default_engine();
    engine.spawn_drone_at(Position::new(50.0, 5.0, -30.0));
    engine.spawn_drone_at(Position::new(50.0, 5.0, -90.0));

    let snap = engine.tick();
    let nearest = snap
        .drones
        .iter()
        .min_by(|a, b| {
            snap.camera
                .position
                .range_to(&a.position)
                .total_cmp(&snap.camera.position.range_to(&b.position))
        })
        .unwrap();
    assert_eq!(snap.lock_target, Some(nearest.id));
}

// ---- Scaling variant ----

#[test]
fn test_drone_scale_grows_as_it_closes() {
    let mut engine = engine_with(SimConfig {
        drone_scaling: true,
        difficulty: Difficulty::Hard,
        ..Default::default()
    });
    // Start just outside the scale range: base scale, growing as it closes.
    engine.spawn_drone_at(Position::new(50.0, -5.0, 55.0));

    let first = engine.tick();
    let start_scale = first.drones[0].scale;

    let mut snap = first;
    for _ in 0..150 {
        snap = engine.tick();
        if snap.drones.is_empty() {
            break;
        }
    }
    assert!(!snap.drones.is_empty(), "drone reached the station too soon");
    let later_scale = snap.drones[0].scale;

    assert!(later_scale > start_scale, "scale grows with proximity");
    assert!(later_scale <= DRONE_BASE_SCALE * 2.0 + 1e-9);
    assert!(start_scale >= DRONE_BASE_SCALE - 1e-9);
}
