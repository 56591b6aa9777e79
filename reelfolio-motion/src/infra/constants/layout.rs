//! Fallback layout metrics, used until the host reports real measurements.

pub const VIEWPORT_WIDTH: f32 = 1440.0;
pub const VIEWPORT_HEIGHT: f32 = 900.0;

/// Width of one hero video tile at the widest breakpoint.
pub const HERO_ITEM_WIDTH: f32 = 320.0;
/// Gap between hero tiles.
pub const HERO_ITEM_GAP: f32 = 16.0;
