//! Scroll velocity from successive positions
//!
//! For hosts that only report scroll offsets. Velocity is the displacement
//! over the last frame; a frame without movement reads as zero.

use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct VelocityTracker {
    last_position: Option<f32>,
    velocity: f32,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the position reached after `dt` and return px/s.
    pub fn update(&mut self, position: f32, dt: Duration) -> f32 {
        let dt_s = dt.as_secs_f32();
        match self.last_position {
            Some(last) if dt_s > 0.0 => {
                self.velocity = (position - last) / dt_s;
            }
            Some(_) => {}
            None => self.velocity = 0.0,
        }
        self.last_position = Some(position);
        self.velocity
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn reset(&mut self) {
        self.last_position = None;
        self.velocity = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_has_no_velocity() {
        let mut tracker = VelocityTracker::new();
        assert_eq!(tracker.update(500.0, Duration::from_millis(16)), 0.0);
    }

    #[test]
    fn velocity_is_displacement_over_frame() {
        let mut tracker = VelocityTracker::new();
        tracker.update(0.0, Duration::from_millis(10));
        let v = tracker.update(-5.0, Duration::from_millis(10));
        assert!((v + 500.0).abs() < 1e-3);
        assert_eq!(tracker.update(-5.0, Duration::from_millis(10)), 0.0);
    }

    #[test]
    fn zero_dt_keeps_last_velocity() {
        let mut tracker = VelocityTracker::new();
        tracker.update(0.0, Duration::from_millis(20));
        tracker.update(20.0, Duration::from_millis(20));
        assert_eq!(tracker.update(40.0, Duration::ZERO), tracker.velocity());
        assert!((tracker.velocity() - 1000.0).abs() < 1e-2);
    }
}
