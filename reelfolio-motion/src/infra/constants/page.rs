//! Page level motion constants: reels loop, navigation, section reveal

pub mod reels {
    /// One full loop of the reels strip (ms).
    pub const PERIOD_MS: u64 = 30_000;
    /// Travel of one loop, as a percentage of the duplicated strip.
    pub const TRAVEL_PERCENT: f32 = -50.0;
    /// The reel sequence is rendered this many times back to back.
    pub const COPIES: usize = 2;
    pub const PAUSE_ON_HOVER: bool = true;
}

pub mod navigation {
    /// Distance below the viewport top used to decide the active section.
    pub const LOOKAHEAD: f32 = 200.0;
    /// Scroll depth after which the navigation bar is considered scrolled.
    pub const SCROLLED_THRESHOLD: f32 = 50.0;
}

pub mod reveal {
    /// Viewport inset applied before a section counts as in view.
    pub const MARGIN: f32 = 100.0;
}
