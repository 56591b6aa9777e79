use std::time::Duration;

use super::{
    FrameContext, FrameListener, FrameTick, ListenerHandle, ListenerRegistry,
    MotionHost, ScrollSample,
};
use crate::infra::physics::VelocityTracker;

/// Host driven by explicit calls instead of a display clock.
///
/// Scroll moves are staged with [`scroll_to`](Self::scroll_to) and become
/// visible, together with the velocity they imply, on the next
/// [`advance`](Self::advance).
#[derive(Debug, Default)]
pub struct ManualHost {
    registry: ListenerRegistry,
    pending_position: f32,
    scroll: ScrollSample,
    tracker: VelocityTracker,
    elapsed: Duration,
}

impl ManualHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a new absolute scroll offset.
    pub fn scroll_to(&mut self, position: f32) {
        self.pending_position = position;
    }

    /// Stage a scroll relative to the staged offset.
    pub fn scroll_by(&mut self, delta: f32) {
        self.pending_position += delta;
    }

    /// Render one frame `delta` after the previous one.
    pub fn advance(&mut self, delta: Duration) -> FrameContext {
        self.elapsed += delta;
        let velocity = self.tracker.update(self.pending_position, delta);
        self.scroll = ScrollSample {
            position: self.pending_position,
            velocity,
        };

        let ctx = FrameContext {
            tick: FrameTick {
                delta,
                elapsed: self.elapsed,
            },
            scroll: self.scroll,
        };
        self.registry.dispatch(&ctx);
        ctx
    }

    /// Render `frames` frames of equal length.
    pub fn run_frames(&mut self, frames: usize, delta: Duration) {
        for _ in 0..frames {
            self.advance(delta);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.len()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl MotionHost for ManualHost {
    fn on_frame(&mut self, listener: FrameListener) -> ListenerHandle {
        self.registry.register(listener)
    }

    fn observe_scroll(&self) -> ScrollSample {
        self.scroll
    }
}
