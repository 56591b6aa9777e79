use crate::ids::ReelId;
use crate::media::MediaSource;

/// Thumbnail entry of the reels strip.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reel {
    pub id: ReelId,
    pub title: String,
    pub thumbnail: MediaSource,
}

impl Reel {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        thumbnail: impl Into<MediaSource>,
    ) -> Self {
        Self {
            id: ReelId(id),
            title: title.into(),
            thumbnail: thumbnail.into(),
        }
    }
}
