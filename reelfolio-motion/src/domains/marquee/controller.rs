use std::time::Duration;

use super::config::MarqueeConfig;
use crate::infra::interpolate::{ClampPolicy, interpolate};
use crate::infra::physics::Spring;

/// Sticky travel direction of a marquee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub fn signum(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

/// Wrap `v` into `[min, max)` with Euclidean modulo.
///
/// Bounds given in either order describe the same window; an empty window
/// collapses to `min`.
pub fn wrap(min: f32, max: f32, v: f32) -> f32 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let range = hi - lo;
    if range <= 0.0 || !v.is_finite() {
        return lo;
    }

    let offset = (v - lo).rem_euclid(range);
    // rem_euclid can round up to `range` for tiny negative inputs
    if offset >= range { lo } else { lo + offset }
}

/// Repetitions of an item sequence needed so that
/// `copies * sequence_width >= 2 * viewport_width`, never fewer than
/// `min_copies`.
pub fn duplication_factor(
    sequence_width: f32,
    viewport_width: f32,
    min_copies: usize,
) -> usize {
    let min_copies = min_copies.max(1);
    if !(sequence_width > 0.0) || !viewport_width.is_finite() {
        return min_copies;
    }

    let needed = (2.0 * viewport_width.max(0.0) / sequence_width).ceil();
    (needed as usize).max(min_copies)
}

/// Auto-scrolling strip offset whose speed follows page scroll velocity.
#[derive(Debug, Clone)]
pub struct VelocityMarquee {
    cfg: MarqueeConfig,
    /// Unwrapped cumulative offset (percent)
    base_offset: f32,
    direction: Direction,
    /// Raw scroll velocity, smoothed
    smoothed_velocity: Spring,
}

impl VelocityMarquee {
    pub fn new(cfg: MarqueeConfig) -> Self {
        Self {
            smoothed_velocity: Spring::new(cfg.spring, 0.0),
            cfg,
            base_offset: 0.0,
            direction: Direction::Forward,
        }
    }

    pub fn config(&self) -> MarqueeConfig {
        self.cfg
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn base_offset(&self) -> f32 {
        self.base_offset
    }

    /// Offset to render, always inside the wrap window.
    pub fn offset(&self) -> f32 {
        wrap(self.cfg.wrap_min, self.cfg.wrap_max, self.base_offset)
    }

    pub fn smoothed_velocity(&self) -> f32 {
        self.smoothed_velocity.value()
    }

    /// Smoothed scroll velocity mapped to a speed multiplier, extrapolated
    /// beyond the reference velocity.
    pub fn velocity_factor(&self) -> f32 {
        interpolate(
            self.smoothed_velocity.value(),
            &[0.0, self.cfg.velocity_reference],
            &[0.0, self.cfg.factor_at_reference],
            ClampPolicy::Extrapolate,
        )
    }

    /// Per-frame update: feed the latest scroll velocity (px/s) through the
    /// spring, then integrate the offset. Returns the rendered offset.
    pub fn tick(&mut self, delta: Duration, scroll_velocity: f32) -> f32 {
        self.smoothed_velocity.set_target(scroll_velocity);
        self.smoothed_velocity.step(delta);
        let factor = self.velocity_factor();
        self.advance(delta, factor)
    }

    /// Integrate one frame with an explicit velocity factor.
    ///
    /// The base move uses the direction from before this frame; the factor
    /// then updates the direction (only when strictly non-zero) and scales
    /// the amplification term.
    pub fn advance(&mut self, delta: Duration, velocity_factor: f32) -> f32 {
        let dt_s = delta.as_secs_f32();
        let mut move_by = self.direction.signum() * self.cfg.base_velocity * dt_s;

        if velocity_factor < 0.0 {
            self.direction = Direction::Backward;
        } else if velocity_factor > 0.0 {
            self.direction = Direction::Forward;
        }

        move_by += self.direction.signum() * move_by * velocity_factor;
        self.base_offset += move_by;

        // Keep the accumulator bounded; the rendered offset is unchanged
        self.base_offset = wrap(self.cfg.wrap_min, self.cfg.wrap_max, self.base_offset);
        self.offset()
    }

    pub fn set_base_velocity(&mut self, base_velocity: f32) {
        self.cfg.base_velocity = base_velocity;
    }

    /// Back to the freshly mounted state.
    pub fn reset(&mut self) {
        self.base_offset = 0.0;
        self.direction = Direction::Forward;
        self.smoothed_velocity.jump(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn wrap_examples() {
        assert!(approx(wrap(-45.0, -20.0, -46.0), -21.0));
        assert!(approx(wrap(-45.0, -20.0, -19.0), -44.0));
        assert!(approx(wrap(-45.0, -20.0, -45.0), -45.0));
        assert!(approx(wrap(-45.0, -20.0, -20.0), -45.0));
        assert!(approx(wrap(-20.0, -45.0, -46.0), -21.0));
    }

    #[test]
    fn wrap_stays_in_half_open_window() {
        for i in -2000..2000 {
            let v = i as f32 * 0.37;
            let w = wrap(-45.0, -20.0, v);
            assert!((-45.0..-20.0).contains(&w), "{v} wrapped to {w}");
        }
        let w = wrap(-45.0, -20.0, -45.0 - 1e-9);
        assert!((-45.0..-20.0).contains(&w));
    }

    #[test]
    fn wrap_degenerate_window() {
        assert_eq!(wrap(3.0, 3.0, 10.0), 3.0);
        assert_eq!(wrap(-45.0, -20.0, f32::NAN), -45.0);
    }

    #[test]
    fn duplication_covers_twice_the_viewport() {
        assert_eq!(duplication_factor(1344.0, 1440.0, 4), 4);
        assert_eq!(duplication_factor(400.0, 1440.0, 4), 8);
        assert_eq!(duplication_factor(0.0, 1440.0, 4), 4);
        assert_eq!(duplication_factor(400.0, 1440.0, 0), 8);

        for width in [50.0_f32, 333.0, 720.0, 2900.0] {
            let copies = duplication_factor(width, 1440.0, 4);
            assert!(copies as f32 * width >= 2.0 * 1440.0);
            assert!(copies >= 4);
        }
    }

    #[test]
    fn drifts_at_base_velocity_without_scroll() {
        let mut marquee = VelocityMarquee::new(
            MarqueeConfig::default().with_base_velocity(5.0),
        );
        let first = marquee.tick(Duration::from_millis(100), 0.0);
        let second = marquee.tick(Duration::from_millis(100), 0.0);
        assert!(approx(first, -24.5));
        assert!(approx(second - first, 0.5));
        assert_eq!(marquee.direction(), Direction::Forward);
    }

    #[test]
    fn scrolling_amplifies_speed() {
        let mut calm = VelocityMarquee::new(MarqueeConfig::default());
        let mut scrolled = VelocityMarquee::new(MarqueeConfig::default());
        calm.advance(FRAME, 0.0);
        let calm_step = calm.offset();
        scrolled.advance(FRAME, 2.0);
        let base = wrap(-45.0, -20.0, 0.0);
        let calm_move = calm_step - base;
        let scrolled_move = scrolled.offset() - base;
        assert!(approx(scrolled_move, calm_move * 3.0));
    }

    #[test]
    fn direction_is_sticky_until_factor_turns_negative() {
        let mut marquee = VelocityMarquee::new(MarqueeConfig::default());
        marquee.advance(FRAME, 1.0);
        assert_eq!(marquee.direction(), Direction::Forward);

        marquee.advance(FRAME, 0.0);
        assert_eq!(marquee.direction(), Direction::Forward);

        marquee.advance(FRAME, -0.01);
        assert_eq!(marquee.direction(), Direction::Backward);

        marquee.advance(FRAME, 0.0);
        assert_eq!(marquee.direction(), Direction::Backward);

        marquee.advance(FRAME, 0.5);
        assert_eq!(marquee.direction(), Direction::Forward);
    }

    #[test]
    fn flip_frame_uses_previous_direction_for_base_move() {
        let mut marquee =
            VelocityMarquee::new(MarqueeConfig::default().with_base_velocity(10.0));
        marquee.reset();
        let before = marquee.base_offset();
        // base move +10 * 0.1 = +1, then flip: 1 + (-1 * 1 * -0.5) = 1.5
        marquee.advance(Duration::from_millis(100), -0.5);
        let expected = wrap(-45.0, -20.0, before + 1.5);
        assert!(approx(marquee.offset(), expected));
        assert_eq!(marquee.direction(), Direction::Backward);
    }

    #[test]
    fn velocity_factor_extrapolates() {
        let mut marquee = VelocityMarquee::new(MarqueeConfig::default());
        for _ in 0..200 {
            marquee.tick(FRAME, 2000.0);
        }
        assert!(approx(marquee.smoothed_velocity(), 2000.0));
        assert!(approx(marquee.velocity_factor(), 10.0));
    }

    #[test]
    fn scrolling_up_reverses_and_stays_reversed() {
        let mut marquee = VelocityMarquee::new(MarqueeConfig::default());
        for _ in 0..10 {
            marquee.tick(FRAME, -800.0);
        }
        assert_eq!(marquee.direction(), Direction::Backward);
        for _ in 0..300 {
            marquee.tick(FRAME, 0.0);
        }
        assert_eq!(marquee.velocity_factor(), 0.0);
        assert_eq!(marquee.direction(), Direction::Backward);
    }
}
