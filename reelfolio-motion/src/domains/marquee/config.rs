//! Configuration for the velocity marquee
//!
//! Offsets and velocities are expressed in percent of the rendered strip,
//! which holds `min_copies` repetitions of the item sequence. The wrap window
//! is seamless when its span equals one repetition (`100 / min_copies`).

use crate::infra::constants::marquee as defaults;
use crate::infra::physics::SpringConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarqueeConfig {
    /// Signed drift speed (percent/s); the sign is the resting direction.
    pub base_velocity: f32,
    /// Lower wrap bound of the rendered offset.
    pub wrap_min: f32,
    /// Exclusive upper wrap bound.
    pub wrap_max: f32,
    /// Smoothed scroll speed (px/s) mapped to `factor_at_reference`.
    pub velocity_reference: f32,
    /// Velocity factor at `velocity_reference`.
    pub factor_at_reference: f32,
    /// Fewest repetitions of the item sequence in the strip.
    pub min_copies: usize,
    /// Smoothing applied to raw scroll velocity.
    pub spring: SpringConfig,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            base_velocity: defaults::DEFAULT_BASE_VELOCITY,
            wrap_min: defaults::wrap::MIN,
            wrap_max: defaults::wrap::MAX,
            velocity_reference: defaults::factor::VELOCITY_REFERENCE,
            factor_at_reference: defaults::factor::AT_REFERENCE,
            min_copies: defaults::MIN_COPIES,
            spring: SpringConfig::default(),
        }
    }
}

impl MarqueeConfig {
    pub fn with_base_velocity(mut self, base_velocity: f32) -> Self {
        self.base_velocity = base_velocity;
        self
    }

    /// Same on-screen motion for a strip holding `copies` repetitions.
    ///
    /// Percentages are relative to the whole strip, so a longer strip needs
    /// proportionally smaller bounds and speed to cover the same pixels.
    pub fn rescaled_for_copies(mut self, copies: usize) -> Self {
        let reference = self.min_copies.max(1);
        let copies = copies.max(reference);
        if copies == reference {
            return self;
        }

        let ratio = reference as f32 / copies as f32;
        self.wrap_min *= ratio;
        self.wrap_max *= ratio;
        self.base_velocity *= ratio;
        self
    }
}
