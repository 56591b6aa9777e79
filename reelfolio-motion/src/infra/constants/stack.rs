//! Work section card stack constants

/// Progress margin on each side of a card window where it slides in or out.
pub const EDGE_MARGIN: f32 = 0.1;
/// Vertical travel (percent) of a card entering from below / leaving above.
pub const TRAVEL: f32 = 100.0;
/// Scale of a card still waiting below its window.
pub const ENTER_SCALE: f32 = 0.9;
/// Scale of a card that has scrolled past its window.
pub const EXIT_SCALE: f32 = 0.95;
/// Stacking order of the active card; inactive cards sit at 0.
pub const ACTIVE_Z_INDEX: i32 = 10;
