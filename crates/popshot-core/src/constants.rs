//! Game constants and tuning parameters.

use glam::Vec3;

/// Nominal display refresh rate for the headless driver (Hz).
/// XR hosts commonly refresh at 72-90Hz; elapsed time is still measured,
/// never assumed constant.
pub const FRAME_RATE: u32 = 72;

// --- Population ---

/// Maximum number of simultaneously alive targets.
pub const MAX_LIVE_TARGETS: usize = 14;

// --- Target geometry ---

/// Bounding-sphere radius shared by all targets (meters).
/// Used for both rendering and hit testing.
pub const TARGET_RADIUS: f32 = 0.12;

/// Scale every target starts at.
pub const TARGET_BASE_SCALE: f32 = 1.0;

/// Colors a freshly spawned target picks from.
pub const TARGET_PALETTE: [Vec3; 5] = [
    Vec3::new(0.91, 0.30, 0.24),
    Vec3::new(0.95, 0.61, 0.07),
    Vec3::new(0.18, 0.80, 0.44),
    Vec3::new(0.20, 0.60, 0.86),
    Vec3::new(0.61, 0.35, 0.71),
];

// --- Lifetime ---

/// Seconds an untapped target survives before it is removed.
pub const TARGET_LIFETIME_SECS: f64 = 12.0;

// --- Spawning ---

/// Nominal interval between automatic spawns (seconds of game time).
pub const SPAWN_BASE_INTERVAL_SECS: f64 = 1.6;

/// The actual gap is the base interval scaled by a uniform factor in
/// [SPAWN_GAP_FACTOR_MIN, SPAWN_GAP_FACTOR_MAX), re-rolled on every spawn.
pub const SPAWN_GAP_FACTOR_MIN: f64 = 0.6;
pub const SPAWN_GAP_FACTOR_MAX: f64 = 1.4;

/// Radial distance band from the viewpoint (meters).
pub const SPAWN_DISTANCE_MIN: f32 = 1.0;
pub const SPAWN_DISTANCE_MAX: f32 = 3.0;

/// Vertical placement band relative to the viewpoint height (meters).
/// Roughly chest-to-head on a standing player.
pub const SPAWN_HEIGHT_OFFSET_MIN: f32 = -0.45;
pub const SPAWN_HEIGHT_OFFSET_MAX: f32 = 0.25;

// --- Bobbing ---

/// Bob amplitude band (meters).
pub const BOB_AMPLITUDE_MIN: f32 = 0.03;
pub const BOB_AMPLITUDE_MAX: f32 = 0.09;

/// Bob frequency band (Hz).
pub const BOB_FREQUENCY_MIN_HZ: f32 = 0.4;
pub const BOB_FREQUENCY_MAX_HZ: f32 = 0.9;

// --- Spin ---

/// Spin rate magnitude band (rad/s about the vertical axis).
/// The sign is randomized per target.
pub const SPIN_RATE_MIN: f32 = 0.3;
pub const SPIN_RATE_MAX: f32 = 1.2;

// --- Pop animation ---

/// Duration of the pop tween (seconds).
pub const POP_DURATION_SECS: f64 = 0.18;

/// Scale grows to start * (1 + POP_SCALE_GAIN) over the tween.
pub const POP_SCALE_GAIN: f32 = 1.2;

/// Color every pop fades toward.
pub const POP_END_COLOR: Vec3 = Vec3::new(1.0, 1.0, 1.0);

// --- Hit testing ---

/// Vertical field of view assumed when building tap rays (degrees).
pub const VERTICAL_FOV_DEGREES: f32 = 70.0;
