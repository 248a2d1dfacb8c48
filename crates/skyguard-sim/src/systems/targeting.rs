//! Movement & targeting — advances every live drone toward the station.
//!
//! Each drone re-picks one of the three dome sub-targets uniformly at
//! random every tick. The non-sticky choice is intentional: it produces
//! the jittery approach paths players expect, and making it sticky would
//! change observable motion.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyguard_core::components::{Drone, DroneBody};
use skyguard_core::constants::*;
use skyguard_core::types::{Orientation, Position};

use crate::session::StationState;

/// Run the targeting system: steer, descend, face, and rescale each drone.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    station: &StationState,
    drone_speed: f64,
    distance_scaling: bool,
) {
    let domes = station.dome_positions();

    for (_entity, (_drone, pos, orientation, body)) in
        world.query_mut::<(&Drone, &mut Position, &mut Orientation, &mut DroneBody)>()
    {
        let target = domes[rng.gen_range(0..domes.len())];

        let step = pos.direction_to(&target) * drone_speed;
        pos.x += step.x;
        pos.y += step.y;
        pos.z += step.z;

        // Altitude bleed-off, independent of the steering step.
        if pos.y > target.y + DRONE_DESCENT_MARGIN {
            pos.y -= DRONE_DESCENT_RATE;
        }

        *orientation = pos.facing(&target);

        if distance_scaling {
            let distance = pos.range_to(&station.position);
            let t = (1.0 - distance / DRONE_SCALE_RANGE).clamp(0.0, 1.0);
            body.scale = DRONE_BASE_SCALE + (DRONE_BASE_SCALE * 2.0 - DRONE_BASE_SCALE) * t;
        }
    }
}
