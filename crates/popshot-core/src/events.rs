//! Events emitted by the engine for host-side feedback.

use serde::{Deserialize, Serialize};

/// Fire-and-forget feedback triggers for the host's haptic and audio
/// sinks. Emitted exactly once per successful hit; a host without the
/// capability simply drops them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FeedbackEvent {
    HapticPulse,
    AudioCue,
}

/// HUD counters, emitted only on frames where either value changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudUpdate {
    pub score: u32,
    pub live_targets: u32,
}
