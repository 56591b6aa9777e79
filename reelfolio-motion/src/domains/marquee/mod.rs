pub mod config;
pub mod controller;
pub mod messages;
pub mod strip;
pub mod update;

// Re-export primary types for convenience
pub use config::MarqueeConfig;
pub use controller::{Direction, VelocityMarquee, duplication_factor, wrap};
pub use messages::MarqueeMessage;
pub use strip::MarqueeStrip;
