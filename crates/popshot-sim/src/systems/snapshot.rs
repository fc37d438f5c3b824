//! Snapshot system: queries the target world and builds a complete
//! FrameSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use popshot_core::components::{Spatial, Target, Visual};
use popshot_core::constants::TARGET_RADIUS;
use popshot_core::enums::GamePhase;
use popshot_core::events::{FeedbackEvent, HudUpdate};
use popshot_core::state::{FrameSnapshot, PopView, TargetView};

use crate::systems::pop::PopAnimation;

/// Build a complete FrameSnapshot from the current frame's state.
pub fn build_snapshot(
    world: &World,
    pops: &[PopAnimation],
    phase: GamePhase,
    game_time: f64,
    score: u32,
    hud_updates: Vec<HudUpdate>,
    feedback_events: Vec<FeedbackEvent>,
) -> FrameSnapshot {
    FrameSnapshot {
        phase,
        game_time,
        score,
        targets: build_targets(world),
        pops: build_pops(pops),
        hud_updates,
        feedback_events,
    }
}

/// Build TargetView list from all alive targets.
fn build_targets(world: &World) -> Vec<TargetView> {
    let mut targets: Vec<TargetView> = world
        .query::<(&Target, &Spatial, &Visual)>()
        .iter()
        .map(|(_, (target, spatial, visual))| TargetView {
            id: target.id,
            position: spatial.position,
            yaw: spatial.yaw,
            scale: visual.scale,
            color: visual.color,
            opacity: visual.opacity,
            radius: TARGET_RADIUS,
        })
        .collect();

    targets.sort_by_key(|t| t.id);
    targets
}

/// Build PopView list from the in-flight animations.
fn build_pops(pops: &[PopAnimation]) -> Vec<PopView> {
    let mut views: Vec<PopView> = pops
        .iter()
        .map(|pop| PopView {
            id: pop.id,
            position: pop.position,
            yaw: pop.yaw,
            scale: pop.scale,
            color: pop.color,
            opacity: pop.opacity,
        })
        .collect();

    views.sort_by_key(|p| p.id);
    views
}
