use crate::domains::navigation::{Section, SectionId};
use crate::infra::constants::layout;

/// Measured geometry the page needs from the host (px, document space).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Hero tile width plus gap.
    pub hero_item_stride: f32,
    pub about_top: f32,
    pub about_height: f32,
    /// Top of the work stack; the stack is one viewport tall per card.
    pub projects_top: f32,
    pub reels_top: f32,
    pub reels_height: f32,
    pub contact_top: f32,
    pub contact_height: f32,
}

impl Default for PageLayout {
    fn default() -> Self {
        let vh = layout::VIEWPORT_HEIGHT;
        Self {
            viewport_width: layout::VIEWPORT_WIDTH,
            viewport_height: vh,
            hero_item_stride: layout::HERO_ITEM_WIDTH + layout::HERO_ITEM_GAP,
            about_top: vh,
            about_height: vh,
            projects_top: 2.0 * vh,
            // after a four card stack
            reels_top: 6.0 * vh,
            reels_height: vh,
            contact_top: 7.0 * vh,
            contact_height: vh,
        }
    }
}

impl PageLayout {
    /// Sections tracked by the navigation scroll spy.
    pub fn sections(&self) -> Vec<Section> {
        vec![
            Section::new(SectionId::Home, 0.0),
            Section::new(SectionId::About, self.about_top),
            Section::new(SectionId::Projects, self.projects_top),
        ]
    }
}
