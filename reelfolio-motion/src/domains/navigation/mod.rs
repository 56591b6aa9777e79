//! Navigation scroll spy

mod spy;

pub use spy::{NavMessage, ScrollSpy, Section, SectionId, update};
