pub mod constants;
pub mod host;
pub mod interpolate;
pub mod physics;
pub mod runtime_config;
