//! Tuning constants for every motion mechanism on the page.
//!
//! These are the compiled defaults; `RuntimeConfig` overrides individual
//! values when a motion override file sets them.

pub mod layout;
pub mod marquee;
pub mod page;
pub mod stack;
