//! Portfolio page wiring
//!
//! [`PortfolioPage`] owns one instance of every on-page mechanism, routes
//! [`PageMessage`]s to them and, once mounted on a host, receives one frame
//! listener per mechanism.

mod layout;
mod messages;
mod mount;
mod portfolio;
mod update;

pub use layout::PageLayout;
pub use messages::PageMessage;
pub use mount::{MountedPage, mount_component};
pub use portfolio::{HeroRow, PortfolioPage};
pub use update::update;
