//! Target spawn factory.
//!
//! Builds the component bundle for a new target placed relative to the
//! current viewpoint. Placement is a snapshot at creation time — the
//! target does not track the viewpoint afterward.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use popshot_core::components::*;
use popshot_core::constants::*;
use popshot_core::types::ViewPose;

/// Spawn a single target around the viewpoint.
///
/// Picks a random horizontal angle and radial distance, places the
/// target using the pose's horizontal right/forward basis, and offsets
/// the height within the chest-to-head band. Bobbing and spin
/// parameters are randomized independently per target so targets
/// visually desynchronize.
pub fn spawn_target(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    id: u32,
    pose: &ViewPose,
    game_time: f64,
) -> hecs::Entity {
    let (right, forward) = pose.horizontal_basis();

    let angle: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
    let distance: f32 = rng.gen_range(SPAWN_DISTANCE_MIN..SPAWN_DISTANCE_MAX);
    let lateral = right * angle.cos() + forward * angle.sin();

    let height = pose.position.y + rng.gen_range(SPAWN_HEIGHT_OFFSET_MIN..SPAWN_HEIGHT_OFFSET_MAX);
    let mut position = pose.position + lateral * distance;
    position.y = height;

    let bob = BobMotion {
        base_height: height,
        amplitude: rng.gen_range(BOB_AMPLITUDE_MIN..BOB_AMPLITUDE_MAX),
        frequency_hz: rng.gen_range(BOB_FREQUENCY_MIN_HZ..BOB_FREQUENCY_MAX_HZ),
        phase: rng.gen_range(0.0..std::f32::consts::TAU),
    };

    let magnitude: f32 = rng.gen_range(SPIN_RATE_MIN..SPIN_RATE_MAX);
    let spin = Spin {
        rate: if rng.gen_bool(0.5) {
            magnitude
        } else {
            -magnitude
        },
    };

    let visual = Visual {
        scale: TARGET_BASE_SCALE,
        color: TARGET_PALETTE[rng.gen_range(0..TARGET_PALETTE.len())],
        opacity: 1.0,
    };

    world.spawn((
        Target { id },
        Spatial {
            position,
            yaw: rng.gen_range(0.0..std::f32::consts::TAU),
        },
        bob,
        spin,
        Lifetime {
            spawned_at: game_time,
        },
        visual,
    ))
}

/// Number of alive targets in the registry.
pub fn live_count(world: &World) -> usize {
    let mut query = world.query::<&Target>();
    query.iter().count()
}
