//! Game engine — the core of the target lifecycle.
//!
//! `GameEngine` owns the hecs world of alive targets, processes player
//! commands at frame boundaries, runs the spawner/motion/pop systems,
//! and produces `FrameSnapshot`s. Completely headless (no renderer or
//! scheduler dependency), enabling deterministic testing: the same seed
//! and the same frame timestamps reproduce the same session.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use popshot_core::commands::PlayerCommand;
use popshot_core::enums::GamePhase;
use popshot_core::events::{FeedbackEvent, HudUpdate};
use popshot_core::state::FrameSnapshot;
use popshot_core::types::{GameClock, ViewPose};

use crate::spawn;
use crate::systems;
use crate::systems::pop::PopAnimation;
use crate::systems::spawner::SpawnClock;

/// Configuration for starting a new game.
pub struct EngineConfig {
    /// RNG seed for determinism.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// Per-frame input from the host: a monotonic timestamp from the
/// display-refresh scheduler and the current viewpoint pose.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    pub timestamp_secs: f64,
    pub viewpoint: ViewPose,
}

/// The target lifecycle engine. Owns all game state.
pub struct GameEngine {
    world: World,
    rng: ChaCha8Rng,
    phase: GamePhase,
    clock: GameClock,
    spawn_clock: SpawnClock,
    score: u32,
    next_target_id: u32,
    pops: Vec<PopAnimation>,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    feedback_events: Vec<FeedbackEvent>,
    last_hud: Option<HudUpdate>,
    primed: bool,
}

impl GameEngine {
    /// Create a new engine with the given config.
    pub fn new(config: EngineConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let spawn_clock = SpawnClock::new(&mut rng);
        Self {
            world: World::new(),
            rng,
            phase: GamePhase::default(),
            clock: GameClock::default(),
            spawn_clock,
            score: 0,
            next_target_id: 0,
            pops: Vec::new(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            feedback_events: Vec::new(),
            last_hud: None,
            primed: false,
        }
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance one display-refresh frame and return the resulting
    /// snapshot. `timestamp_secs` must be monotonic across calls.
    pub fn frame(&mut self, input: FrameInput) -> FrameSnapshot {
        let dt = self.clock.advance(input.timestamp_secs);
        if !self.primed {
            // First frame: anchor the spawn interval to the clock origin.
            self.spawn_clock.arm(self.clock.game_time(), &mut self.rng);
            self.primed = true;
        }

        self.process_commands(&input);

        if self.phase == GamePhase::Running {
            systems::spawner::run(
                &mut self.world,
                &mut self.rng,
                &mut self.spawn_clock,
                &input.viewpoint,
                self.clock.game_time(),
                &mut self.next_target_id,
            );
            systems::motion::run(&mut self.world, self.clock.game_time(), dt);
            let expired =
                systems::motion::expire(&mut self.world, self.clock.game_time(), &mut self.despawn_buffer);
            if expired > 0 {
                log::debug!("{expired} target(s) timed out");
            }
        }

        // Pop tweens advance on the raw clock, paused or not.
        systems::pop::run(&mut self.pops, self.clock.raw());

        let hud_updates = self.hud_changes();
        let feedback_events = std::mem::take(&mut self.feedback_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.pops,
            self.phase,
            self.clock.game_time(),
            self.score,
            hud_updates,
            feedback_events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Absolute game time (pause-frozen).
    pub fn game_time(&self) -> f64 {
        self.clock.game_time()
    }

    /// Get a read-only reference to the target world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Number of alive targets.
    pub fn live_targets(&self) -> usize {
        spawn::live_count(&self.world)
    }

    /// In-flight pop animations.
    pub fn pops(&self) -> &[PopAnimation] {
        &self.pops
    }

    /// Process all queued commands.
    fn process_commands(&mut self, input: &FrameInput) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command, input);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand, input: &FrameInput) {
        match command {
            PlayerCommand::Tap { x, y, viewport } => {
                if self.phase != GamePhase::Running {
                    return;
                }
                let hit = systems::hit_test::resolve_tap(
                    &self.world,
                    &input.viewpoint,
                    x,
                    y,
                    &viewport,
                );
                if let Some(entity) = hit {
                    let started = systems::pop::start(
                        &mut self.world,
                        entity,
                        self.clock.raw(),
                        &mut self.pops,
                        &mut self.feedback_events,
                    );
                    if let Some(id) = started {
                        self.score += 1;
                        log::debug!("popped target {id}, score {}", self.score);
                    }
                }
            }
            PlayerCommand::BurstSpawn { count } => {
                if self.phase != GamePhase::Running {
                    return;
                }
                let spawned = systems::spawner::burst(
                    &mut self.world,
                    &mut self.rng,
                    &input.viewpoint,
                    self.clock.game_time(),
                    &mut self.next_target_id,
                    count,
                );
                log::debug!("burst spawned {spawned} target(s)");
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Running {
                    self.phase = GamePhase::Paused;
                    self.clock.pause();
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Running;
                    self.clock.resume();
                }
            }
            PlayerCommand::Reset => {
                // Abrupt wipe: mid-pop targets vanish immediately.
                self.world.clear();
                self.pops.clear();
                self.score = 0;
                self.spawn_clock.arm(self.clock.game_time(), &mut self.rng);
                log::debug!("reset");
            }
        }
    }

    /// HUD counters, reported only when they change.
    fn hud_changes(&mut self) -> Vec<HudUpdate> {
        let hud = HudUpdate {
            score: self.score,
            live_targets: self.live_targets() as u32,
        };
        if self.last_hud != Some(hud) {
            self.last_hud = Some(hud);
            vec![hud]
        } else {
            Vec::new()
        }
    }
}
