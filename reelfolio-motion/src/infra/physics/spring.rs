//! Damped spring follower
//!
//! Chases a moving target with a mass-spring-damper so noisy per-frame input
//! (scroll velocity deltas) turns into a smooth signal.

use std::time::Duration;

use crate::infra::constants::marquee::spring as defaults;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Distance from target under which the spring may settle.
    pub rest_delta: f32,
    /// Speed under which the spring may settle.
    pub rest_speed: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(defaults::STIFFNESS, defaults::DAMPING, defaults::MASS)
    }
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            rest_delta: defaults::REST_DELTA,
            rest_speed: defaults::REST_SPEED,
        }
    }

    /// `damping / (2 * sqrt(stiffness * mass))`; 1.0 is critically damped.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

#[derive(Debug, Clone)]
pub struct Spring {
    cfg: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
    at_rest: bool,
}

impl Spring {
    pub fn new(cfg: SpringConfig, initial: f32) -> Self {
        Self {
            cfg,
            value: initial,
            velocity: 0.0,
            target: initial,
            at_rest: true,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    pub fn config(&self) -> SpringConfig {
        self.cfg
    }

    /// Retarget; the current value and velocity carry over.
    pub fn set_target(&mut self, target: f32) {
        if target != self.target {
            self.target = target;
            self.at_rest = false;
        }
    }

    /// Move to `value` immediately with no residual motion.
    pub fn jump(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
        self.at_rest = true;
    }

    /// Integrate over `dt` and return the new value.
    pub fn step(&mut self, dt: Duration) -> f32 {
        if self.at_rest {
            return self.value;
        }

        let mut remaining = dt.as_secs_f32().min(defaults::MAX_FRAME_S);
        let k = self.cfg.stiffness;
        let c = self.cfg.damping;
        let m = self.cfg.mass.max(f32::EPSILON);

        // Semi-implicit Euler in bounded substeps
        while remaining > 0.0 {
            let h = remaining.min(defaults::MAX_SUBSTEP_S);
            let accel = (-k * (self.value - self.target) - c * self.velocity) / m;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if (self.value - self.target).abs() < self.cfg.rest_delta
            && self.velocity.abs() < self.cfg.rest_speed
        {
            self.value = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }

        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn default_spring_is_overdamped() {
        let cfg = SpringConfig::default();
        assert!((cfg.damping_ratio() - 1.25).abs() < 1e-6);
    }

    #[test]
    fn converges_and_settles_on_target() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(800.0);
        for _ in 0..120 {
            spring.step(FRAME);
        }
        assert!(spring.is_at_rest());
        assert_eq!(spring.value(), 800.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn overdamped_follow_never_overshoots() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(1000.0);
        let mut previous = 0.0;
        for _ in 0..240 {
            let v = spring.step(FRAME);
            assert!(v <= 1000.0);
            assert!(v >= previous);
            previous = v;
        }
    }

    #[test]
    fn returns_to_exact_zero() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(-600.0);
        for _ in 0..10 {
            spring.step(FRAME);
        }
        assert!(spring.value() < 0.0);
        spring.set_target(0.0);
        for _ in 0..240 {
            spring.step(FRAME);
        }
        assert_eq!(spring.value(), 0.0);
    }

    #[test]
    fn zero_dt_changes_nothing() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(10.0);
        assert_eq!(spring.step(Duration::ZERO), 0.0);
        assert!(!spring.is_at_rest());
    }
}
