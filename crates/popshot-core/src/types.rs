//! Fundamental geometric and timing types.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// The viewpoint (head/device pose) at a frame boundary.
/// World space is right-handed, Y up; the identity orientation looks
/// down -Z.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewPose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl ViewPose {
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Local +X in world space.
    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    /// Local +Y in world space.
    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Look direction (local -Z) in world space.
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Horizontal (right, forward) basis for placement: the look direction
    /// flattened onto the ground plane. Falls back to world -Z when the
    /// viewpoint looks straight up or down.
    pub fn horizontal_basis(&self) -> (Vec3, Vec3) {
        let fwd = self.forward();
        let flat = Vec3::new(fwd.x, 0.0, fwd.z);
        let forward = if flat.length_squared() > 1e-6 {
            flat.normalize()
        } else {
            Vec3::NEG_Z
        };
        let right = forward.cross(Vec3::Y).normalize();
        (right, forward)
    }
}

/// Client-space viewport rectangle delivered with pointer events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewportRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewportRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Normalize client-space pointer coordinates to centered [-1, 1],
    /// +Y up (screen Y is flipped).
    pub fn to_ndc(&self, px: f32, py: f32) -> (f32, f32) {
        let nx = ((px - self.x) / self.width) * 2.0 - 1.0;
        let ny = 1.0 - ((py - self.y) / self.height) * 2.0;
        (nx, ny)
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

/// Game clock fed by the host's monotonic per-frame timestamps.
///
/// Game time equals raw time minus the total time spent paused, and is
/// frozen while paused. Bobbing, spawn gaps, and expiry all read game
/// time; pop animations read the raw timestamp so they keep running
/// across a pause.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GameClock {
    raw: f64,
    paused_accum: f64,
    paused_since: Option<f64>,
    started: bool,
}

impl GameClock {
    /// Record a new frame timestamp. Returns game-time elapsed since the
    /// previous frame: zero on the first frame and while paused.
    pub fn advance(&mut self, raw: f64) -> f64 {
        let dt = if self.started && self.paused_since.is_none() {
            (raw - self.raw).max(0.0)
        } else {
            0.0
        };
        self.raw = raw;
        self.started = true;
        dt
    }

    /// Raw monotonic timestamp of the most recent frame (seconds).
    pub fn raw(&self) -> f64 {
        self.raw
    }

    /// Absolute game time in seconds.
    pub fn game_time(&self) -> f64 {
        match self.paused_since {
            Some(since) => since - self.paused_accum,
            None => self.raw - self.paused_accum,
        }
    }

    pub fn pause(&mut self) {
        if self.paused_since.is_none() {
            self.paused_since = Some(self.raw);
        }
    }

    pub fn resume(&mut self) {
        if let Some(since) = self.paused_since.take() {
            self.paused_accum += self.raw - since;
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused_since.is_some()
    }
}
