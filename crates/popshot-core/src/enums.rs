//! Enumeration types used throughout the game.

use serde::{Deserialize, Serialize};

/// Top-level game phase.
///
/// Paused freezes spawning, bobbing and expiry, but in-flight pop
/// animations run to completion on their own clocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Running,
    Paused,
}
