//! Target lifecycle engine for POPSHOT.
//!
//! Owns the hecs world of alive targets, runs the spawner/motion/pop
//! systems once per display-refresh frame, and produces FrameSnapshots
//! for the host.

pub mod engine;
pub mod spawn;
pub mod systems;

pub use engine::GameEngine;
pub use popshot_core as core;
