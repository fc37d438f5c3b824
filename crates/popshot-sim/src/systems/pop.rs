//! Pop animations — the transient removal tween after a hit.
//!
//! Each in-flight pop is an explicit record polled on every
//! display-refresh frame, rather than a self-rescheduling callback, so
//! completion is externally observable. Records compute progress from
//! the raw frame timestamp and their own start stamp, never from the
//! shared per-frame elapsed value: many pops can be in flight at once
//! and they keep running while the game is paused.

use glam::Vec3;
use hecs::{Entity, World};

use popshot_core::components::{Spatial, Target, Visual};
use popshot_core::constants::{POP_DURATION_SECS, POP_END_COLOR, POP_SCALE_GAIN};
use popshot_core::events::FeedbackEvent;

/// A hit target's removal tween, owned by the engine after the target
/// leaves the registry.
#[derive(Debug, Clone)]
pub struct PopAnimation {
    pub id: u32,
    pub position: Vec3,
    pub yaw: f32,
    /// Raw timestamp of the hit.
    pub started_at: f64,
    start_scale: f32,
    start_color: Vec3,
    pub scale: f32,
    pub color: Vec3,
    pub opacity: f32,
}

/// Move a target out of the registry and start its pop tween, firing
/// the one-shot haptic and audio feedback.
///
/// Returns the target id, or None when the entity is already gone — a
/// second hit resolved against a stale handle is a no-op, never an
/// error.
pub fn start(
    world: &mut World,
    entity: Entity,
    raw_now: f64,
    pops: &mut Vec<PopAnimation>,
    feedback: &mut Vec<FeedbackEvent>,
) -> Option<u32> {
    let Ok((target, spatial, visual)) =
        world.query_one_mut::<(&Target, &Spatial, &Visual)>(entity)
    else {
        return None;
    };

    let record = PopAnimation {
        id: target.id,
        position: spatial.position,
        yaw: spatial.yaw,
        started_at: raw_now,
        start_scale: visual.scale,
        start_color: visual.color,
        scale: visual.scale,
        color: visual.color,
        opacity: visual.opacity,
    };
    let id = record.id;

    let _ = world.despawn(entity);
    pops.push(record);

    feedback.push(FeedbackEvent::HapticPulse);
    feedback.push(FeedbackEvent::AudioCue);
    Some(id)
}

/// Advance every in-flight pop and retire the completed ones.
///
/// Progress is clamped to [0, 1] and only ever advances (the scheduler
/// guarantees monotonic timestamps). At t = 1 the record is dropped and
/// the target is gone for good.
pub fn run(pops: &mut Vec<PopAnimation>, raw_now: f64) {
    for pop in pops.iter_mut() {
        let t = ((raw_now - pop.started_at) / POP_DURATION_SECS).clamp(0.0, 1.0) as f32;
        pop.scale = pop.start_scale * (1.0 + POP_SCALE_GAIN * t);
        pop.color = pop.start_color.lerp(POP_END_COLOR, t);
        pop.opacity = 1.0 - t;
    }
    pops.retain(|pop| raw_now - pop.started_at < POP_DURATION_SECS);
}
