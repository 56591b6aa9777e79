use std::time::Duration;

use crate::domains::navigation::SectionId;
use crate::infra::host::FrameContext;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageMessage {
    /// Whole-page frame, fanned out to every mechanism
    Frame(FrameContext),

    // Per-mechanism frame work, one per mounted listener
    HeroFrame {
        delta: Duration,
        scroll_velocity: f32,
    },
    WorkScrolled(f32),
    ReelsFrame(Duration),
    NavScrolled(f32),
    RevealScrolled(f32),

    // Pointer input
    ReelsHovered(bool),
    NavSelect(SectionId),
}
