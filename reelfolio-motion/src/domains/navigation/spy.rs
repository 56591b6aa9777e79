use std::fmt;

use crate::infra::constants::page::navigation as defaults;

/// Page sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    /// Work stack; its link reads "Projects"
    Projects,
    Reels,
    /// Reached through the contact button rather than a scroll-tracked link
    Contact,
}

impl SectionId {
    /// Links tracked by the scroll spy.
    pub const NAV_LINKS: [SectionId; 3] =
        [SectionId::Home, SectionId::About, SectionId::Projects];

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Projects => "Projects",
            SectionId::Reels => "Reels",
            SectionId::Contact => "Contact",
        }
    }

    /// Fragment the link points at.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Projects => "work",
            SectionId::Reels => "reels",
            SectionId::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    pub id: SectionId,
    /// Document offset of the section top (px)
    pub top: f32,
}

impl Section {
    pub fn new(id: SectionId, top: f32) -> Self {
        Self { id, top }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavMessage {
    Scrolled(f32),
    Select(SectionId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSpy {
    sections: Vec<Section>,
    lookahead: f32,
    scrolled_threshold: f32,
    active: SectionId,
    is_scrolled: bool,
}

impl ScrollSpy {
    /// `sections` in document order.
    pub fn new(sections: Vec<Section>) -> Self {
        Self::with_thresholds(
            sections,
            defaults::LOOKAHEAD,
            defaults::SCROLLED_THRESHOLD,
        )
    }

    pub fn with_thresholds(
        sections: Vec<Section>,
        lookahead: f32,
        scrolled_threshold: f32,
    ) -> Self {
        let active = sections.first().map_or(SectionId::Home, |s| s.id);
        Self {
            sections,
            lookahead,
            scrolled_threshold,
            active,
            is_scrolled: false,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn is_scrolled(&self) -> bool {
        self.is_scrolled
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn set_sections(&mut self, sections: Vec<Section>) {
        self.sections = sections;
    }

    /// Re-evaluate for a new scroll offset. Returns true when the active
    /// section changed.
    pub fn on_scroll(&mut self, scroll_y: f32) -> bool {
        self.is_scrolled = scroll_y > self.scrolled_threshold;

        let probe = scroll_y + self.lookahead;
        let Some(section) = self.sections.iter().rev().find(|s| s.top <= probe)
        else {
            return false;
        };

        if section.id == self.active {
            return false;
        }
        log::debug!("scroll spy: {} -> {}", self.active, section.id);
        self.active = section.id;
        true
    }

    pub fn select(&mut self, id: SectionId) {
        self.active = id;
    }

    /// Offset the host should scroll to for a link, if the section is known.
    pub fn target_of(&self, id: SectionId) -> Option<f32> {
        self.sections.iter().find(|s| s.id == id).map(|s| s.top)
    }

    pub fn update(&mut self, msg: NavMessage) {
        update(self, msg);
    }
}

pub fn update(spy: &mut ScrollSpy, msg: NavMessage) {
    match msg {
        NavMessage::Scrolled(scroll_y) => {
            spy.on_scroll(scroll_y);
        }
        NavMessage::Select(id) => spy.select(id),
    }
}
