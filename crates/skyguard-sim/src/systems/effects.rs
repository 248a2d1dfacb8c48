//! Cosmetic effect wind-down: explosion bursts, the terminal mushroom
//! cloud, and camera shake. These keep running in terminal phases so
//! in-flight effects decay instead of freezing.

use hecs::{Entity, World};

use skyguard_core::components::{ExplosionBurst, MushroomCloud};
use skyguard_core::constants::*;

/// Advance all effect entities by one tick.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, shake_secs: &mut f64) {
    despawn_buffer.clear();

    for (entity, burst) in world.query_mut::<&mut ExplosionBurst>() {
        let mut any_alive = false;
        for particle in &mut burst.particles {
            if particle.lifetime <= 0.0 {
                continue;
            }
            particle.position.x += particle.velocity.x;
            particle.position.y += particle.velocity.y;
            particle.position.z += particle.velocity.z;
            particle.lifetime -= DT;
            if particle.lifetime > 0.0 {
                any_alive = true;
            }
        }
        // The burst is removed as a whole once every member has expired.
        if !any_alive {
            despawn_buffer.push(entity);
        }
    }

    for (entity, cloud) in world.query_mut::<&mut MushroomCloud>() {
        cloud.lifetime -= DT;
        if cloud.lifetime <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    if *shake_secs > 0.0 {
        *shake_secs = (*shake_secs - DT).max(0.0);
    }
}
