//! Player commands sent from the host to the engine.
//!
//! Commands are queued and processed at the next frame boundary.

use serde::{Deserialize, Serialize};

use crate::types::ViewportRect;

/// All externally triggered actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Pointer-down at client-space coordinates. Resolved against the
    /// viewpoint of the frame that processes it; a miss is a no-op.
    Tap {
        x: f32,
        y: f32,
        viewport: ViewportRect,
    },
    /// Create up to `count` targets immediately, clamped to remaining
    /// capacity, bypassing the interval policy.
    BurstSpawn { count: u32 },
    /// Freeze spawning, bobbing and expiry. In-flight pops finish.
    Pause,
    /// Resume from pause.
    Resume,
    /// Abrupt state wipe: all targets and pop animations discarded
    /// immediately, score to 0. The phase is left unchanged.
    Reset,
}
