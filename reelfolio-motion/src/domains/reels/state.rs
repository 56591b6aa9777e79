use std::time::Duration;

use crate::infra::constants::page::reels as defaults;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReelMessage {
    Frame(Duration),
    HoverChanged(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReelLoop {
    period: Duration,
    travel_percent: f32,
    pause_on_hover: bool,
    hovered: bool,
    /// Time into the current loop, always below `period`
    elapsed: Duration,
}

impl Default for ReelLoop {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(defaults::PERIOD_MS),
            defaults::PAUSE_ON_HOVER,
        )
    }
}

impl ReelLoop {
    pub fn new(period: Duration, pause_on_hover: bool) -> Self {
        if period.is_zero() {
            log::warn!("reel loop period is zero; strip will not move");
        }
        Self {
            period,
            travel_percent: defaults::TRAVEL_PERCENT,
            pause_on_hover,
            hovered: false,
            elapsed: Duration::ZERO,
        }
    }

    pub fn copies(&self) -> usize {
        defaults::COPIES
    }

    pub fn is_paused(&self) -> bool {
        self.pause_on_hover && self.hovered
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn tick(&mut self, delta: Duration) {
        if self.is_paused() || self.period.is_zero() {
            return;
        }
        let period = self.period.as_nanos();
        let elapsed = (self.elapsed.as_nanos() + delta.as_nanos()) % period;
        // elapsed < period, and period came from a Duration
        self.elapsed = Duration::from_nanos(elapsed as u64);
    }

    /// Fraction of the current loop in `[0, 1)`.
    pub fn phase(&self) -> f32 {
        if self.period.is_zero() {
            return 0.0;
        }
        (self.elapsed.as_secs_f64() / self.period.as_secs_f64()) as f32
    }

    /// Translation of the duplicated strip, in `(-50, 0]` percent.
    pub fn offset_percent(&self) -> f32 {
        let offset = self.travel_percent * self.phase();
        if offset <= self.travel_percent {
            // f32 rounding at the very end of a loop
            0.0
        } else {
            offset
        }
    }

    pub fn update(&mut self, msg: ReelMessage) {
        update(self, msg);
    }
}

pub fn update(reels: &mut ReelLoop, msg: ReelMessage) {
    match msg {
        ReelMessage::Frame(delta) => reels.tick(delta),
        ReelMessage::HoverChanged(hovered) => reels.set_hovered(hovered),
    }
}
