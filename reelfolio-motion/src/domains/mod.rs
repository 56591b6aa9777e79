pub mod marquee;
pub mod navigation;
pub mod reels;
pub mod region;
pub mod reveal;
pub mod stack;
