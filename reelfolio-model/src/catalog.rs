//! The page's content lists in render order.

use crate::error::{ModelError, Result};
use crate::media::MediaSource;
use crate::project::{Category, Project};
use crate::reel::Reel;

/// Everything the motion components render, grouped by section.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    /// Cards of the scroll-driven work stack, top to bottom.
    pub projects: Vec<Project>,
    /// Thumbnails of the looping reels strip.
    pub reels: Vec<Reel>,
    /// Clips repeated in both hero marquee rows.
    pub hero_videos: Vec<MediaSource>,
}

impl Catalog {
    /// Check the only structural requirement the components have: every list
    /// holds at least one item. Repeated ids are accepted.
    pub fn validate(&self) -> Result<()> {
        if self.projects.is_empty() {
            return Err(ModelError::EmptyList("projects"));
        }
        if self.reels.is_empty() {
            return Err(ModelError::EmptyList("reels"));
        }
        if self.hero_videos.is_empty() {
            return Err(ModelError::EmptyList("hero_videos"));
        }

        log::debug!(
            "catalog ok: {} projects, {} reels, {} hero videos",
            self.projects.len(),
            self.reels.len(),
            self.hero_videos.len()
        );
        Ok(())
    }

    /// Built-in portfolio content.
    pub fn portfolio_defaults() -> Self {
        let hero_videos = (1..=4)
            .map(|n| MediaSource::new(format!("/videos/vid {n}.mov")))
            .collect();

        let projects = vec![
            Project::new(
                1,
                "Urban Dreams",
                Category::ShortFilm,
                "/videos/vid 1.mov",
            ),
            Project::new(
                2,
                "Golden Hour",
                Category::Cinematic,
                "/videos/vid 2.mov",
            ),
            Project::new(
                3,
                "Motion & Rhythm",
                Category::InstagramReel,
                "/videos/vid 3.mov",
            ),
            Project::new(
                4,
                "Silent Voices",
                Category::ShortFilm,
                "/videos/vid 4.mov",
            ),
        ];

        const REELS: [(u32, &str, &str); 8] = [
            (
                1,
                "Golden Light",
                "https://images.unsplash.com/photo-1518495973542-4542c06a5843",
            ),
            (
                2,
                "Nature's Call",
                "https://images.unsplash.com/photo-1472396961693-142e6e269027",
            ),
            (
                3,
                "Ocean Vibes",
                "https://images.unsplash.com/photo-1505142468610-359e7d316be0",
            ),
            (
                4,
                "Desert Dreams",
                "https://images.unsplash.com/photo-1482881497185-d4a9ddbe4151",
            ),
            (
                5,
                "Urban Flow",
                "https://plus.unsplash.com/premium_photo-1673264933212-d78737f38e48",
            ),
            (
                6,
                "City Lights",
                "https://plus.unsplash.com/premium_photo-1711434824963-ca894373272e",
            ),
            (
                7,
                "Morning Mist",
                "https://plus.unsplash.com/premium_photo-1675705721263-0bbeec261c49",
            ),
            (
                8,
                "Coastal Escape",
                "https://images.unsplash.com/photo-1524799526615-766a9833dec0",
            ),
        ];
        let reels = REELS
            .iter()
            .map(|&(id, title, thumbnail)| Reel::new(id, title, thumbnail))
            .collect();

        Self {
            projects,
            reels,
            hero_videos,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::portfolio_defaults()
    }
}
