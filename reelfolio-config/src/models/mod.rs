use serde::{Deserialize, Serialize};

/// Raw motion overrides as written in `motion.toml` (or JSON).
///
/// Missing sections and missing fields both mean "use the compiled default".
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct MotionFileConfig {
    #[serde(default)]
    pub marquee: FileMarqueeConfig,
    #[serde(default)]
    pub spring: FileSpringConfig,
    #[serde(default)]
    pub stack: FileStackConfig,
    #[serde(default)]
    pub reels: FileReelsConfig,
    #[serde(default)]
    pub navigation: FileNavigationConfig,
    #[serde(default)]
    pub reveal: FileRevealConfig,
}

/// Hero marquee rows.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileMarqueeConfig {
    /// Drift speed of the rows in percent of strip width per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_velocity: Option<f32>,
    /// Lower wrap bound (percent). Must be set together with `wrap_max`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap_min: Option<f32>,
    /// Upper wrap bound (percent, exclusive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap_max: Option<f32>,
    /// Scroll speed (px/s) that maps to `factor_at_reference`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub velocity_reference: Option<f32>,
    /// Velocity factor produced at `velocity_reference`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor_at_reference: Option<f32>,
    /// Lower bound on how many copies of the item sequence are rendered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_copies: Option<usize>,
}

/// Spring smoothing applied to raw scroll velocity.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileSpringConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stiffness: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damping: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mass: Option<f32>,
}

/// Work section card stack.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileStackConfig {
    /// Progress margin around each card window where it slides in and out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_margin: Option<f32>,
    /// Vertical travel (percent) of cards entering from below / leaving above.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enter_scale: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_scale: Option<f32>,
}

/// Looping reels strip.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileReelsConfig {
    /// Time for one full loop, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause_on_hover: Option<bool>,
}

/// Navigation scroll spy.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileNavigationConfig {
    /// Distance (px) below the viewport top used to probe the active section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookahead: Option<f32>,
    /// Scroll depth (px) after which the bar switches to its scrolled style.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrolled_threshold: Option<f32>,
}

/// Section entrance latches.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileRevealConfig {
    /// Inset (px) applied to the viewport before testing intersection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f32>,
}
