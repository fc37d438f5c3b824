//! Systems that operate on the target world each frame.
//!
//! Systems are free functions taking `&mut World` (or `&World` for
//! read-only work); per-session state lives in the engine.

pub mod motion;
pub mod pop;
pub mod snapshot;
pub mod spawner;
