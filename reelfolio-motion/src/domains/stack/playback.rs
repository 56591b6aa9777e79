//! Card media side effects
//!
//! Media only changes state on an active-card transition: the card leaving
//! pauses and rewinds, the card entering plays. A rejected play (autoplay
//! policy and the like) is ignored.

use thiserror::Error;

use super::state::ActiveChange;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("playback rejected: {0}")]
    Rejected(String),
    #[error("media not ready")]
    NotReady,
}

/// Media element behind one card.
#[cfg_attr(test, mockall::automock)]
pub trait MediaPlayback {
    fn play(&mut self) -> Result<(), PlaybackError>;
    fn pause(&mut self);
    /// Seek back to the first frame.
    fn rewind(&mut self);
}

#[derive(Debug)]
pub struct PlaybackDirector<P> {
    players: Vec<P>,
}

impl<P: MediaPlayback> PlaybackDirector<P> {
    pub fn new(players: Vec<P>) -> Self {
        Self { players }
    }

    pub fn players(&self) -> &[P] {
        &self.players
    }

    pub fn player_mut(&mut self, index: usize) -> Option<&mut P> {
        self.players.get_mut(index)
    }

    /// Start the card that is active at mount. Other cards are left alone.
    pub fn start(&mut self, active: usize) {
        self.play(active);
    }

    pub fn apply(&mut self, change: ActiveChange) {
        if change.previous == change.current {
            return;
        }
        if let Some(previous) = self.players.get_mut(change.previous) {
            previous.pause();
            previous.rewind();
        }
        self.play(change.current);
    }

    fn play(&mut self, index: usize) {
        let Some(player) = self.players.get_mut(index) else {
            return;
        };
        if let Err(err) = player.play() {
            log::trace!("card {index} playback not started: {err}");
        }
    }
}
