//! Motion tuning overrides for Reelfolio.
//!
//! Every value here is optional: the motion crate ships compiled defaults and
//! only consults these overrides when a field is present. This crate owns the
//! on-disk shape, where it is looked up, and the guard rails applied before
//! any override reaches a running animation.

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{MotionConfigLoad, MotionConfigSource};
pub use models::{
    FileMarqueeConfig, FileNavigationConfig, FileReelsConfig,
    FileRevealConfig, FileSpringConfig, FileStackConfig, MotionFileConfig,
};
pub use validation::{ConfigValidationError, ConfigWarning, ConfigWarnings};
