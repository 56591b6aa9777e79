//! A marquee together with the items it scrolls.

use std::time::Duration;

use super::config::MarqueeConfig;
use super::controller::{VelocityMarquee, duplication_factor};
use super::messages::MarqueeMessage;
use super::update;

#[derive(Debug, Clone)]
pub struct MarqueeStrip<T> {
    items: Vec<T>,
    copies: usize,
    marquee: VelocityMarquee,
}

impl<T> MarqueeStrip<T> {
    /// Size the duplication for `viewport_width` given each item's
    /// `item_stride` (width plus gap), then build the marquee for that strip.
    pub fn new(
        items: Vec<T>,
        item_stride: f32,
        viewport_width: f32,
        cfg: MarqueeConfig,
    ) -> Self {
        let sequence_width = items.len() as f32 * item_stride;
        let copies =
            duplication_factor(sequence_width, viewport_width, cfg.min_copies);
        log::debug!(
            "marquee strip: {} items x {copies} copies for {viewport_width}px viewport",
            items.len()
        );

        Self {
            items,
            copies,
            marquee: VelocityMarquee::new(cfg.rescaled_for_copies(copies)),
        }
    }

    pub fn copies(&self) -> usize {
        self.copies
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The logical sequence repeated `copies` times, in render order.
    pub fn rendered(&self) -> impl Iterator<Item = &T> {
        self.items
            .iter()
            .cycle()
            .take(self.items.len() * self.copies)
    }

    /// Horizontal translation (percent of the strip) to render.
    pub fn offset(&self) -> f32 {
        self.marquee.offset()
    }

    pub fn marquee(&self) -> &VelocityMarquee {
        &self.marquee
    }

    pub fn tick(&mut self, delta: Duration, scroll_velocity: f32) -> f32 {
        self.update(MarqueeMessage::Frame {
            delta,
            scroll_velocity,
        });
        self.offset()
    }

    pub fn update(&mut self, msg: MarqueeMessage) {
        update::update(&mut self.marquee, msg);
    }
}
