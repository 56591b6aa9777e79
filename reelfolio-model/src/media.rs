use std::fmt::{self, Display};

/// Location of a playable clip or still, as handed to the rendering layer.
///
/// Sources are kept verbatim: site-relative paths (`/videos/vid 1.mov`) and
/// absolute URLs are both valid, and resolving them is the host's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MediaSource(String);

impl MediaSource {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the source points at another origin rather than the site.
    pub fn is_remote(&self) -> bool {
        self.0.starts_with("https://") || self.0.starts_with("http://")
    }
}

impl Display for MediaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MediaSource {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MediaSource {
    fn from(value: String) -> Self {
        Self(value)
    }
}
