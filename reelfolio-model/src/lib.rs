//! Content records shared across Reelfolio crates.
//!
//! The motion core only needs ordered, non-empty lists of renderable items;
//! this crate owns their shape and the portfolio's built-in catalog.

pub mod catalog;
pub mod error;
pub mod ids;
pub mod media;
pub mod project;
pub mod reel;

pub use catalog::Catalog;
pub use error::{ModelError, Result as ModelResult};
pub use ids::{ProjectId, ReelId};
pub use media::MediaSource;
pub use project::{Category, Project};
pub use reel::Reel;
