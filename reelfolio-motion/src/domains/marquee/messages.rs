use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarqueeMessage {
    /// Frame-synchronized tick carrying the page scroll velocity (px/s)
    Frame {
        delta: Duration,
        scroll_velocity: f32,
    },
    SetBaseVelocity(f32),
    Reset,
}
