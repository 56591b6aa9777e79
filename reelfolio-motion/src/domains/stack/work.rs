//! Work section: scroll region, card stack and card media wired together.

use super::config::StackConfig;
use super::messages::StackMessage;
use super::playback::{MediaPlayback, PlaybackDirector};
use super::state::{ActiveChange, ScrollStack};
use super::transform::CardTransform;
use super::update;
use crate::domains::region::ScrollRegion;

#[derive(Debug)]
pub struct WorkStack<P> {
    region: ScrollRegion,
    stack: ScrollStack,
    director: PlaybackDirector<P>,
    started: bool,
}

impl<P: MediaPlayback> WorkStack<P> {
    /// One card per player; the section is one viewport tall per card.
    pub fn new(
        top: f32,
        viewport_height: f32,
        cfg: StackConfig,
        players: Vec<P>,
    ) -> Self {
        let stack = ScrollStack::new(players.len(), cfg);
        Self {
            region: ScrollRegion::for_cards(
                top,
                stack.card_count(),
                viewport_height,
            ),
            stack,
            director: PlaybackDirector::new(players),
            started: false,
        }
    }

    pub fn region(&self) -> &ScrollRegion {
        &self.region
    }

    pub fn stack(&self) -> &ScrollStack {
        &self.stack
    }

    pub fn director(&self) -> &PlaybackDirector<P> {
        &self.director
    }

    pub fn active_index(&self) -> usize {
        self.stack.active_index()
    }

    pub fn transforms(&self) -> Vec<CardTransform> {
        self.stack.transforms()
    }

    /// Play the initially active card. Later calls do nothing.
    pub fn mount(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.director.start(self.stack.active_index());
    }

    pub fn set_progress(&mut self, progress: f32) -> Option<ActiveChange> {
        let change = self.stack.set_progress(progress)?;
        if self.started {
            self.director.apply(change);
        }
        Some(change)
    }

    pub fn relayout(&mut self, top: f32, viewport_height: f32) {
        self.region = ScrollRegion::for_cards(
            top,
            self.stack.card_count(),
            viewport_height,
        );
    }

    pub fn update(&mut self, msg: StackMessage) {
        update::update(self, msg);
    }
}
