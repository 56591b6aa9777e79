pub mod spring;
pub mod velocity;

pub use spring::{Spring, SpringConfig};
pub use velocity::VelocityTracker;
