//! Frame-loop thread — drives the engine at the nominal display
//! refresh rate and publishes snapshots.
//!
//! This thread plays the role of the host's display-refresh scheduler:
//! a single `Instant` provides monotonic per-frame timestamps for both
//! the main tick and every pop tween. Commands arrive via `mpsc`;
//! the latest snapshot is stored in a shared slot for synchronous
//! polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use popshot_core::constants::FRAME_RATE;
use popshot_core::state::FrameSnapshot;
use popshot_core::types::ViewPose;
use popshot_sim::engine::{EngineConfig, FrameInput, GameEngine};

use crate::state::GameLoopCommand;

/// Nominal duration of one frame.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Supplies the viewpoint pose for a frame timestamp. Stands in for
/// the head-tracking provider of a real host.
pub trait PoseSource: Send {
    fn pose(&mut self, timestamp_secs: f64) -> ViewPose;
}

impl<F> PoseSource for F
where
    F: FnMut(f64) -> ViewPose + Send,
{
    fn pose(&mut self, timestamp_secs: f64) -> ViewPose {
        self(timestamp_secs)
    }
}

/// Spawns the frame loop in a new thread.
///
/// Returns the command sender for the host to use.
pub fn spawn_frame_loop(
    mut pose_source: Box<dyn PoseSource>,
    latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
) -> mpsc::Sender<GameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("popshot-frame-loop".into())
        .spawn(move || {
            run_frame_loop(&mut *pose_source, cmd_rx, &latest_snapshot);
        })
        .expect("Failed to spawn frame loop thread");

    cmd_tx
}

/// The frame loop. Runs until Shutdown command or channel disconnect.
fn run_frame_loop(
    pose_source: &mut dyn PoseSource,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<FrameSnapshot>>,
) {
    let mut engine = GameEngine::new(EngineConfig::default());
    let start = Instant::now();
    let mut next_frame_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one frame with a monotonic timestamp and the
        //    current pose
        let timestamp_secs = start.elapsed().as_secs_f64();
        let viewpoint = pose_source.pose(timestamp_secs);
        let snapshot = engine.frame(FrameInput {
            timestamp_secs,
            viewpoint,
        });

        // 3. Report HUD changes (a real host would update its overlay)
        for hud in &snapshot.hud_updates {
            log::info!("hud: score {} live {}", hud.score, hud.live_targets);
        }

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_frame_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use popshot_core::commands::PlayerCommand;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::BurstSpawn {
            count: 3,
        }))
        .unwrap();
        tx.send(GameLoopCommand::Player(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Player(PlayerCommand::BurstSpawn { count: 3 })
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::Player(PlayerCommand::Pause)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_frame_duration_constant() {
        // 72Hz = ~13.9ms per frame
        let expected_nanos = 1_000_000_000u64 / 72;
        assert_eq!(FRAME_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_loop_produces_snapshots_and_shuts_down() {
        let latest = Arc::new(Mutex::new(None));
        let pose = |_t: f64| ViewPose::default();
        let tx = spawn_frame_loop(Box::new(pose), Arc::clone(&latest));

        tx.send(GameLoopCommand::Player(PlayerCommand::BurstSpawn {
            count: 4,
        }))
        .unwrap();
        std::thread::sleep(Duration::from_millis(100));

        let snapshot = latest.lock().unwrap().clone();
        let snapshot = snapshot.expect("Loop should have published a snapshot");
        assert_eq!(snapshot.targets.len(), 4);

        tx.send(GameLoopCommand::Shutdown).unwrap();
    }
}
