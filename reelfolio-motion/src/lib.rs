//! Reelfolio motion library
//!
//! Frame and scroll driven behaviour of the portfolio page, expressed against
//! a small host interface ([`infra::host::MotionHost`]) so any renderer that
//! can deliver frame ticks and scroll samples can drive it.
//!
//! Notes
//! - `domains` holds one module per on-page mechanism (hero marquee, work
//!   stack, reels loop, navigation, section reveal).
//! - `page` wires those mechanisms to a host and routes messages to them.
//! - Everything is single-threaded; state shared with host listeners lives in
//!   `Rc<RefCell<_>>`.

pub mod domains;
pub mod infra;
pub mod page;

pub use domains::marquee::{MarqueeStrip, VelocityMarquee};
pub use domains::stack::{MediaPlayback, PlaybackError, ScrollStack, WorkStack};
pub use infra::host::{
    FrameContext, FrameTick, ListenerHandle, ManualHost, MotionHost,
    ScrollSample,
};
pub use infra::interpolate::{ClampPolicy, interpolate};
pub use infra::runtime_config::RuntimeConfig;
pub use page::{MountedPage, PageLayout, PageMessage, PortfolioPage};
