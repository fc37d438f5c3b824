//! Demo driver: runs the engine headless for a few seconds with a
//! scripted headset pose and logs what happens.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use glam::{Quat, Vec3};

use popshot_app::game_loop::spawn_frame_loop;
use popshot_app::state::GameLoopCommand;
use popshot_core::commands::PlayerCommand;
use popshot_core::types::ViewPose;

fn main() {
    env_logger::init();

    let latest = Arc::new(Mutex::new(None));

    // Standing player slowly looking around.
    let pose = |t: f64| {
        let yaw = (t * 0.4).sin() as f32 * 0.7;
        ViewPose::new(Vec3::new(0.0, 1.6, 0.0), Quat::from_rotation_y(yaw))
    };
    let tx = spawn_frame_loop(Box::new(pose), Arc::clone(&latest));

    let _ = tx.send(GameLoopCommand::Player(PlayerCommand::BurstSpawn {
        count: 5,
    }));
    std::thread::sleep(Duration::from_secs(5));

    if let Ok(lock) = latest.lock() {
        if let Some(snapshot) = lock.as_ref() {
            log::info!(
                "after 5s: score {} live {} pops in flight {}",
                snapshot.score,
                snapshot.targets.len(),
                snapshot.pops.len()
            );
        }
    }

    let _ = tx.send(GameLoopCommand::Shutdown);
}
