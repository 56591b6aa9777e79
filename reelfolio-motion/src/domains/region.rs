//! Scroll progress of a tall container through the viewport
//!
//! Progress runs from 0 when the container's top reaches the viewport top to
//! 1 when its bottom reaches the viewport bottom.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRegion {
    /// Document offset of the container top (px).
    pub top: f32,
    /// Container height (px).
    pub height: f32,
    pub viewport_height: f32,
}

impl ScrollRegion {
    pub fn new(top: f32, height: f32, viewport_height: f32) -> Self {
        Self {
            top,
            height,
            viewport_height,
        }
    }

    /// Region giving each of `card_count` cards one viewport of scroll.
    pub fn for_cards(top: f32, card_count: usize, viewport_height: f32) -> Self {
        Self::new(top, card_count as f32 * viewport_height, viewport_height)
    }

    /// Distance scrolled between progress 0 and 1.
    pub fn scroll_range(&self) -> f32 {
        (self.height - self.viewport_height).max(0.0)
    }

    pub fn progress(&self, scroll_y: f32) -> f32 {
        let range = self.scroll_range();
        let travelled = scroll_y - self.top;
        if range <= 0.0 {
            return if travelled < 0.0 { 0.0 } else { 1.0 };
        }
        (travelled / range).clamp(0.0, 1.0)
    }
}
