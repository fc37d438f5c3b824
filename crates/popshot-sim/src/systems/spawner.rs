//! Automatic spawn policy — randomized inter-arrival intervals plus a
//! capacity-clamped manual burst.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use popshot_core::constants::{
    MAX_LIVE_TARGETS, SPAWN_BASE_INTERVAL_SECS, SPAWN_GAP_FACTOR_MIN, SPAWN_GAP_FACTOR_MAX,
};
use popshot_core::types::ViewPose;

use crate::spawn;

/// Inter-arrival state. The gap between spawns is the base interval
/// scaled by a uniform random factor, measured in game time from the
/// last successful spawn, so the appearance rate is irregular but the
/// minimum and maximum gap stay bounded.
#[derive(Debug, Clone)]
pub struct SpawnClock {
    pub last_spawn_at: f64,
    pub next_gap: f64,
}

impl SpawnClock {
    pub fn new(rng: &mut ChaCha8Rng) -> Self {
        Self {
            last_spawn_at: 0.0,
            next_gap: roll_gap(rng),
        }
    }

    /// Re-anchor the interval at `now` (engine start and reset).
    pub fn arm(&mut self, now: f64, rng: &mut ChaCha8Rng) {
        self.last_spawn_at = now;
        self.next_gap = roll_gap(rng);
    }
}

fn roll_gap(rng: &mut ChaCha8Rng) -> f64 {
    SPAWN_BASE_INTERVAL_SECS * rng.gen_range(SPAWN_GAP_FACTOR_MIN..SPAWN_GAP_FACTOR_MAX)
}

/// Once per frame: create at most one target when the gap has elapsed.
/// Refuses at the population ceiling; the gap then keeps counting from
/// the last successful spawn.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    clock: &mut SpawnClock,
    pose: &ViewPose,
    game_time: f64,
    next_id: &mut u32,
) {
    if game_time - clock.last_spawn_at < clock.next_gap {
        return;
    }
    if spawn::live_count(world) >= MAX_LIVE_TARGETS {
        return;
    }

    let id = *next_id;
    *next_id += 1;
    spawn::spawn_target(world, rng, id, pose, game_time);
    clock.last_spawn_at = game_time;
    clock.next_gap = roll_gap(rng);
    log::debug!("spawned target {id}");
}

/// Create up to `count` targets immediately, bypassing the interval
/// check. Silently clamps to remaining capacity. Returns the number
/// actually created.
pub fn burst(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    pose: &ViewPose,
    game_time: f64,
    next_id: &mut u32,
    count: u32,
) -> u32 {
    let remaining = MAX_LIVE_TARGETS.saturating_sub(spawn::live_count(world));
    let spawning = remaining.min(count as usize) as u32;
    for _ in 0..spawning {
        let id = *next_id;
        *next_id += 1;
        spawn::spawn_target(world, rng, id, pose, game_time);
    }
    spawning
}
