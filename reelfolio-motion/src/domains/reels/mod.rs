//! Instagram reels strip
//!
//! A time-driven loop: the sequence is rendered twice back to back and
//! translated from 0% to -50% once per period, so the second copy lands
//! exactly where the first started. Hovering holds the loop in place.

mod state;

pub use state::{ReelLoop, ReelMessage, update};
