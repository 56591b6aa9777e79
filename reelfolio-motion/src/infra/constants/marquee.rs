//! Velocity marquee constants
//!
//! Offsets are percentages of the full (duplicated) strip width, velocities
//! are percent per second.

/// Drift speed used when a marquee is created without an explicit velocity.
pub const DEFAULT_BASE_VELOCITY: f32 = 5.0;
/// Drift speed of the hero rows (top row forward, bottom row backward).
pub const HERO_ROW_VELOCITY: f32 = 3.0;

/// Wrap window for the rendered offset, valid for `MIN_COPIES` copies.
pub mod wrap {
    pub const MIN: f32 = -45.0;
    /// Exclusive upper bound.
    pub const MAX: f32 = -20.0;
}

/// Minimum number of times the item sequence is repeated in the strip.
pub const MIN_COPIES: usize = 4;

/// Mapping from smoothed scroll velocity (px/s) to the velocity factor.
/// Extrapolated past the reference.
pub mod factor {
    pub const VELOCITY_REFERENCE: f32 = 1000.0;
    pub const AT_REFERENCE: f32 = 5.0;
}

/// Spring smoothing raw scroll velocity before it reaches the factor.
pub mod spring {
    pub const STIFFNESS: f32 = 400.0;
    pub const DAMPING: f32 = 50.0;
    pub const MASS: f32 = 1.0;
    /// Distance from target under which the spring may come to rest.
    pub const REST_DELTA: f32 = 0.5;
    /// Speed under which the spring may come to rest.
    pub const REST_SPEED: f32 = 2.0;
    /// Largest integration step (seconds).
    pub const MAX_SUBSTEP_S: f32 = 0.004;
    /// Frame gaps longer than this are integrated as if they were this long.
    pub const MAX_FRAME_S: f32 = 1.0;
}
