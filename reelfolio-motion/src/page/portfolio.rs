use std::time::Duration;

use reelfolio_model::{Catalog, MediaSource, ModelError, Project, Reel};

use super::layout::PageLayout;
use super::messages::PageMessage;
use super::update;
use crate::domains::marquee::MarqueeStrip;
use crate::domains::navigation::{ScrollSpy, SectionId};
use crate::domains::reels::ReelLoop;
use crate::domains::reveal::RevealOnce;
use crate::domains::stack::{MediaPlayback, WorkStack};
use crate::infra::runtime_config::RuntimeConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroRow {
    /// Drifts at `+base_velocity`
    Top,
    /// Drifts at `-base_velocity`
    Bottom,
}

#[derive(Debug)]
struct RevealTarget {
    section: SectionId,
    top: f32,
    height: f32,
    latch: RevealOnce,
}

#[derive(Debug)]
pub struct PortfolioPage<P> {
    layout: PageLayout,
    hero: [MarqueeStrip<MediaSource>; 2],
    projects: Vec<Project>,
    work: WorkStack<P>,
    reel_items: Vec<Reel>,
    reels: ReelLoop,
    nav: ScrollSpy,
    reveals: Vec<RevealTarget>,
}

impl<P: MediaPlayback> PortfolioPage<P> {
    /// Build every mechanism from validated content. `player_for` creates
    /// the media handle behind each work card.
    pub fn new(
        catalog: &Catalog,
        layout: PageLayout,
        rc: &RuntimeConfig,
        player_for: impl FnMut(&Project) -> P,
    ) -> Result<Self, ModelError> {
        catalog.validate()?;

        let velocity = rc.marquee_base_velocity();
        let hero_row = |base_velocity: f32| {
            MarqueeStrip::new(
                catalog.hero_videos.clone(),
                layout.hero_item_stride,
                layout.viewport_width,
                rc.marquee_config(base_velocity),
            )
        };
        let hero = [hero_row(velocity), hero_row(-velocity)];

        let players = catalog.projects.iter().map(player_for).collect();
        let work = WorkStack::new(
            layout.projects_top,
            layout.viewport_height,
            rc.stack_config(),
            players,
        );

        let nav = ScrollSpy::with_thresholds(
            layout.sections(),
            rc.nav_lookahead(),
            rc.nav_scrolled_threshold(),
        );

        let margin = rc.reveal_margin();
        let reveals = [
            (SectionId::About, layout.about_top, layout.about_height),
            (SectionId::Projects, layout.projects_top, work.region().height),
            (SectionId::Reels, layout.reels_top, layout.reels_height),
            (SectionId::Contact, layout.contact_top, layout.contact_height),
        ]
        .into_iter()
        .map(|(section, top, height)| RevealTarget {
            section,
            top,
            height,
            latch: RevealOnce::new(margin),
        })
        .collect();

        log::info!(
            "portfolio page: {} hero clips, {} work cards, {} reels",
            catalog.hero_videos.len(),
            catalog.projects.len(),
            catalog.reels.len()
        );

        Ok(Self {
            layout,
            hero,
            projects: catalog.projects.clone(),
            work,
            reel_items: catalog.reels.clone(),
            reels: ReelLoop::new(
                Duration::from_millis(rc.reels_period_ms()),
                rc.reels_pause_on_hover(),
            ),
            nav,
            reveals,
        })
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn hero_row(&self, row: HeroRow) -> &MarqueeStrip<MediaSource> {
        match row {
            HeroRow::Top => &self.hero[0],
            HeroRow::Bottom => &self.hero[1],
        }
    }

    pub(super) fn hero_rows_mut(
        &mut self,
    ) -> impl Iterator<Item = &mut MarqueeStrip<MediaSource>> {
        self.hero.iter_mut()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn work(&self) -> &WorkStack<P> {
        &self.work
    }

    pub fn work_mut(&mut self) -> &mut WorkStack<P> {
        &mut self.work
    }

    pub fn reel_items(&self) -> &[Reel] {
        &self.reel_items
    }

    /// Reel thumbnails in render order, duplicated for the seamless loop.
    pub fn rendered_reels(&self) -> impl Iterator<Item = &Reel> {
        self.reel_items
            .iter()
            .cycle()
            .take(self.reel_items.len() * self.reels.copies())
    }

    pub fn reels(&self) -> &ReelLoop {
        &self.reels
    }

    pub fn reels_mut(&mut self) -> &mut ReelLoop {
        &mut self.reels
    }

    pub fn nav(&self) -> &ScrollSpy {
        &self.nav
    }

    pub fn nav_mut(&mut self) -> &mut ScrollSpy {
        &mut self.nav
    }

    pub fn is_revealed(&self, section: SectionId) -> bool {
        self.reveals
            .iter()
            .find(|t| t.section == section)
            // sections without an entrance animation are always shown
            .is_none_or(|t| t.latch.is_revealed())
    }

    pub(super) fn reveal_at(&mut self, scroll_y: f32) {
        let viewport_height = self.layout.viewport_height;
        for target in &mut self.reveals {
            if target.latch.observe_at_scroll(
                target.top,
                target.height,
                scroll_y,
                viewport_height,
            ) {
                log::debug!("section {} revealed", target.section);
            }
        }
    }

    pub fn update(&mut self, msg: PageMessage) {
        update::update(self, msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::stack::PlaybackError;

    #[derive(Debug, Default)]
    struct Silent;

    impl MediaPlayback for Silent {
        fn play(&mut self) -> Result<(), PlaybackError> {
            Err(PlaybackError::NotReady)
        }
        fn pause(&mut self) {}
        fn rewind(&mut self) {}
    }

    fn page() -> PortfolioPage<Silent> {
        PortfolioPage::new(
            &Catalog::portfolio_defaults(),
            PageLayout::default(),
            &RuntimeConfig::new(),
            |_| Silent,
        )
        .expect("default catalog is valid")
    }

    #[test]
    fn hero_rows_drift_in_opposite_directions() {
        let page = page();
        let top = page.hero_row(HeroRow::Top).marquee().config();
        let bottom = page.hero_row(HeroRow::Bottom).marquee().config();
        assert!(top.base_velocity > 0.0);
        assert_eq!(top.base_velocity, -bottom.base_velocity);
    }

    #[test]
    fn reels_render_twice() {
        let page = page();
        assert_eq!(page.rendered_reels().count(), 16);
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let mut catalog = Catalog::portfolio_defaults();
        catalog.reels.clear();
        let result = PortfolioPage::new(
            &catalog,
            PageLayout::default(),
            &RuntimeConfig::new(),
            |_| Silent,
        );
        assert!(matches!(result, Err(ModelError::EmptyList("reels"))));
    }

    #[test]
    fn reveal_latches_per_section() {
        let mut page = page();
        assert!(!page.is_revealed(SectionId::About));
        assert!(page.is_revealed(SectionId::Home));

        page.update(PageMessage::RevealScrolled(200.0));
        assert!(page.is_revealed(SectionId::About));
        assert!(!page.is_revealed(SectionId::Projects));
        assert!(!page.is_revealed(SectionId::Reels));

        // reels start at 5400, contact at 6300, in a 900 px viewport
        page.update(PageMessage::RevealScrolled(4700.0));
        assert!(page.is_revealed(SectionId::Projects));
        assert!(page.is_revealed(SectionId::Reels));
        assert!(!page.is_revealed(SectionId::Contact));

        page.update(PageMessage::RevealScrolled(5600.0));
        assert!(page.is_revealed(SectionId::Contact));

        page.update(PageMessage::RevealScrolled(0.0));
        for section in [
            SectionId::About,
            SectionId::Projects,
            SectionId::Reels,
            SectionId::Contact,
        ] {
            assert!(page.is_revealed(section), "{section} hidden again");
        }
    }

    #[test]
    fn repeated_catalog_ids_are_accepted() {
        let mut catalog = Catalog::portfolio_defaults();
        catalog.reels[1].id = catalog.reels[0].id;
        catalog.projects[2].id = catalog.projects[0].id;
        let page = PortfolioPage::new(
            &catalog,
            PageLayout::default(),
            &RuntimeConfig::new(),
            |_| Silent,
        );
        assert!(page.is_ok());
    }
}
