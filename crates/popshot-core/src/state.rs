//! Frame snapshot — the complete visible state handed to the host each
//! frame.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::events::{FeedbackEvent, HudUpdate};

/// Everything the host needs to render one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    /// Absolute game time (seconds, pause-frozen).
    pub game_time: f64,
    pub score: u32,
    /// Alive targets, sorted by id.
    pub targets: Vec<TargetView>,
    /// In-flight pop animations, sorted by id.
    pub pops: Vec<PopView>,
    /// HUD changes this frame (empty on most frames).
    pub hud_updates: Vec<HudUpdate>,
    /// Haptic/audio triggers fired this frame.
    pub feedback_events: Vec<FeedbackEvent>,
}

/// An alive target as the renderer should draw it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TargetView {
    pub id: u32,
    pub position: Vec3,
    pub yaw: f32,
    pub scale: f32,
    pub color: Vec3,
    pub opacity: f32,
    /// Bounding-sphere radius (shared constant, echoed for the renderer).
    pub radius: f32,
}

/// A popping target mid-tween.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PopView {
    pub id: u32,
    pub position: Vec3,
    pub yaw: f32,
    pub scale: f32,
    pub color: Vec3,
    pub opacity: f32,
}
