use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Channel name used when the upstream item lists no artist.
pub const FALLBACK_CHANNEL: &str = "YouTube Music";

/// Duration used when the upstream item omits one.
pub const FALLBACK_DURATION: &str = "00:00";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
pub enum ResultType {
    #[serde(rename = "song")]
    #[strum(serialize = "song")]
    Song,
    #[serde(rename = "video")]
    #[strum(serialize = "video")]
    Video,
}

impl ResultType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Song => "song",
            Self::Video => "video",
        }
    }

    /// Plural filter name used by the upstream search ("songs", "videos").
    pub const fn as_filter(self) -> &'static str {
        match self {
            Self::Song => "songs",
            Self::Video => "videos",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamArtist {
    pub name: String,
}

/// One result row as returned by the upstream search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    #[serde(rename = "videoId", default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artists: Option<Vec<UpstreamArtist>>,
    #[serde(default)]
    pub duration: Option<String>,
}

impl SearchItem {
    /// First listed artist name, or empty when none is listed.
    pub fn artist_hint(&self) -> &str {
        self.artists
            .as_deref()
            .and_then(|artists| artists.first())
            .map(|artist| artist.name.as_str())
            .unwrap_or("")
    }

    pub fn channel_name(&self) -> &str {
        match self.artist_hint() {
            "" => FALLBACK_CHANNEL,
            name => name,
        }
    }

    pub fn raw_title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}

/// A normalized karaoke candidate, serialized with the public field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongItem {
    pub video_id: String,
    pub title: String,
    pub artist: String,
    pub original_title: String,
    pub duration: String,
    pub channel: String,
    pub result_type: ResultType,
    pub is_no_guide: bool,
    pub has_vocal: bool,
    pub key: Option<String>,
    #[serde(rename = "type")]
    pub kind: ResultType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SongItem>,
    pub next_page_token: Option<String>,
}

impl SearchResponse {
    pub fn empty() -> Self {
        Self {
            results: Vec::new(),
            next_page_token: None,
        }
    }

    pub fn from_results(results: Vec<SongItem>) -> Self {
        Self {
            results,
            next_page_token: None,
        }
    }
}
