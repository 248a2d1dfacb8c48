//! First-person camera rig driven by buffered aim deltas.
//!
//! Input callbacks only accumulate deltas; the rig consumes them exactly
//! once at tick start, keeping the sample-inputs/advance/emit phase
//! structure free of reentrancy.

use glam::DVec3;

use skyguard_core::constants::*;
use skyguard_core::types::{Orientation, Position};

/// Camera state: fixed position, clamped yaw/pitch aim.
#[derive(Debug, Clone)]
pub struct CameraRig {
    pub position: Position,
    pub orientation: Orientation,
}

impl Default for CameraRig {
    fn default() -> Self {
        let (x, y, z) = CAMERA_POSITION;
        Self {
            position: Position::new(x, y, z),
            orientation: Orientation::default(),
        }
    }
}

impl CameraRig {
    /// Apply an accumulated aim delta. Moving the pointer right (positive dx)
    /// turns the view right; yaw and pitch stay inside fixed limits.
    pub fn apply_aim(&mut self, dx: f64, dy: f64) {
        self.orientation.yaw -= dx * AIM_SENSITIVITY;
        self.orientation.pitch -= dy * AIM_SENSITIVITY;
        self.orientation.yaw = self.orientation.yaw.clamp(-AIM_YAW_LIMIT, AIM_YAW_LIMIT);
        self.orientation.pitch = self
            .orientation
            .pitch
            .clamp(-AIM_PITCH_LIMIT, AIM_PITCH_LIMIT);
    }

    /// Unit direction through the view center.
    pub fn forward(&self) -> DVec3 {
        self.orientation.forward()
    }
}

/// Latest input state, buffered by command processing and sampled once per tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    /// Accumulated aim delta since the last tick.
    pub pending_dx: f64,
    pub pending_dy: f64,
    /// One-shot fire trigger, consumed at the next tick.
    pub fire_pressed: bool,
    /// Continuous-fire state (tracer mode).
    pub fire_held: bool,
}

impl InputState {
    /// Take the accumulated aim delta, resetting it.
    pub fn take_aim(&mut self) -> (f64, f64) {
        let delta = (self.pending_dx, self.pending_dy);
        self.pending_dx = 0.0;
        self.pending_dy = 0.0;
        delta
    }

    /// Whether a shot is requested this tick; clears the one-shot trigger.
    pub fn take_fire(&mut self) -> bool {
        let pressed = self.fire_pressed;
        self.fire_pressed = false;
        pressed || self.fire_held
    }
}
