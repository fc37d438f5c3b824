//! Per-frame motion: bobbing, spin, and timeout expiry.

use hecs::{Entity, World};

use popshot_core::components::{BobMotion, Lifetime, Spatial, Spin, Target};
use popshot_core::constants::TARGET_LIFETIME_SECS;

/// Advance bobbing and spin for every alive target.
///
/// Height is recomputed from absolute game time on every frame, so
/// frame-rate variance can never accumulate vertical drift. Yaw has no
/// closed form worth keeping and integrates the frame delta instead.
pub fn run(world: &mut World, game_time: f64, dt: f64) {
    for (_entity, (spatial, bob, spin)) in
        world.query_mut::<(&mut Spatial, &BobMotion, &Spin)>()
    {
        spatial.position.y = bob.height_at(game_time);
        spatial.yaw = (spatial.yaw + spin.rate * dt as f32).rem_euclid(std::f32::consts::TAU);
    }
}

/// Remove targets whose lifetime has elapsed.
///
/// Collect-then-despawn with a reused buffer, so eviction never mutates
/// the collection being iterated. Returns the number expired.
pub fn expire(world: &mut World, game_time: f64, despawn_buffer: &mut Vec<Entity>) -> u32 {
    despawn_buffer.clear();

    for (entity, (_target, lifetime)) in world.query_mut::<(&Target, &Lifetime)>() {
        if game_time - lifetime.spawned_at >= TARGET_LIFETIME_SECS {
            despawn_buffer.push(entity);
        }
    }

    let expired = despawn_buffer.len() as u32;
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    expired
}
