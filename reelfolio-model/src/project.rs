use std::fmt::{self, Display, Formatter};

use crate::ids::ProjectId;
use crate::media::MediaSource;

/// Category badge shown on a work card.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    ShortFilm,
    Cinematic,
    InstagramReel,
    /// Free-form label for anything the fixed badges do not cover
    Other(String),
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Category::ShortFilm => write!(f, "Short Film"),
            Category::Cinematic => write!(f, "Cinematic"),
            Category::InstagramReel => write!(f, "Instagram Reel"),
            Category::Other(label) => write!(f, "{label}"),
        }
    }
}

/// One card of the work stack: a titled clip with a category badge.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub category: Category,
    pub media: MediaSource,
}

impl Project {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        category: Category,
        media: impl Into<MediaSource>,
    ) -> Self {
        Self {
            id: ProjectId(id),
            title: title.into(),
            category,
            media: media.into(),
        }
    }
}
