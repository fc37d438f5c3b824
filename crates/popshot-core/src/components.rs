//! ECS components for hecs target entities.
//!
//! Components are plain data structs; game logic lives in systems.
//! A target is Alive exactly while its entity is in the world — once
//! popped it is moved out of the registry into the pop animation set.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Marks an entity as a target and carries its identity.
/// Ids come from a monotonic counter and are never reused.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Target {
    pub id: u32,
}

/// World-space placement: position plus spin angle about vertical.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Spatial {
    pub position: Vec3,
    /// Rotation about Y (radians), advanced by the Spin component.
    pub yaw: f32,
}

/// Bobbing parameters, fixed at creation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BobMotion {
    /// Vertical position the oscillation is centered on. Never mutated.
    pub base_height: f32,
    pub amplitude: f32,
    pub frequency_hz: f32,
    pub phase: f32,
}

impl BobMotion {
    /// Displayed height at an absolute game time.
    ///
    /// A pure function of absolute time and fixed parameters — never
    /// integrated per frame, so frame-rate variance cannot accumulate
    /// drift.
    pub fn height_at(&self, game_time: f64) -> f32 {
        let angle = std::f64::consts::TAU * self.frequency_hz as f64 * game_time
            + self.phase as f64;
        self.base_height + self.amplitude * angle.sin() as f32
    }
}

/// Signed angular velocity about the vertical axis (rad/s).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Spin {
    pub rate: f32,
}

/// Creation stamp for timeout expiry, in absolute game time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lifetime {
    pub spawned_at: f64,
}

/// Per-target visual state. Every target owns its own copy — pop
/// animations mutate scale/color/opacity independently, so fading one
/// target can never affect another.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Visual {
    pub scale: f32,
    pub color: Vec3,
    pub opacity: f32,
}
