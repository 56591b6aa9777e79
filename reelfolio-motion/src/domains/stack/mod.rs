//! Scroll-driven card stack of the work section
//!
//! Scroll progress through the section selects one active card; every card
//! gets a transform from its own progress window, and card media plays only
//! while its card is active.

pub mod config;
pub mod messages;
pub mod playback;
pub mod state;
pub mod transform;
pub mod update;
pub mod work;

pub use config::StackConfig;
pub use messages::StackMessage;
pub use playback::{MediaPlayback, PlaybackDirector, PlaybackError};
pub use state::{ActiveChange, ScrollStack, active_index_for};
pub use transform::{CardTransform, card_transform, card_window};
pub use work::WorkStack;
