//! Once-only section entrance latch

use crate::infra::constants::page::reveal as defaults;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOnce {
    margin: f32,
    revealed: bool,
}

impl Default for RevealOnce {
    fn default() -> Self {
        Self::new(defaults::MARGIN)
    }
}

impl RevealOnce {
    /// `margin` shrinks the viewport on both ends before testing overlap.
    pub fn new(margin: f32) -> Self {
        Self {
            margin,
            revealed: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Test an element's viewport-relative bounds. Returns true only on the
    /// call that reveals it.
    pub fn observe(
        &mut self,
        element_top: f32,
        element_bottom: f32,
        viewport_height: f32,
    ) -> bool {
        if self.revealed {
            return false;
        }
        let visible = element_top < viewport_height - self.margin
            && element_bottom > self.margin;
        if visible {
            self.revealed = true;
        }
        visible
    }

    /// Same test for an element at document offset `top` with `height`.
    pub fn observe_at_scroll(
        &mut self,
        top: f32,
        height: f32,
        scroll_y: f32,
        viewport_height: f32,
    ) -> bool {
        let element_top = top - scroll_y;
        self.observe(element_top, element_top + height, viewport_height)
    }
}
