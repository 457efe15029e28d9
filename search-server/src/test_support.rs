use std::sync::Mutex;

use models::{ResultType, SearchItem, UpstreamArtist};
use ytmusic_client::SearchProvider;

pub(crate) fn item(id: &str, title: &str, artist: Option<&str>) -> SearchItem {
    SearchItem {
        video_id: Some(id.to_string()),
        title: Some(title.to_string()),
        artists: artist.map(|name| {
            vec![UpstreamArtist {
                name: name.to_string(),
            }]
        }),
        duration: None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Behavior {
    Respond,
    Fail,
    Hang,
}

/// In-memory [`SearchProvider`] that records every request it receives.
pub(crate) struct FakeProvider {
    songs: Vec<SearchItem>,
    videos: Vec<SearchItem>,
    song_behavior: Behavior,
    video_behavior: Behavior,
    requests: Mutex<Vec<(String, ResultType, usize)>>,
}

impl FakeProvider {
    pub(crate) fn new(songs: Vec<SearchItem>, videos: Vec<SearchItem>) -> Self {
        Self {
            songs,
            videos,
            song_behavior: Behavior::Respond,
            video_behavior: Behavior::Respond,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing() -> Self {
        let mut provider = Self::new(Vec::new(), Vec::new());
        provider.song_behavior = Behavior::Fail;
        provider.video_behavior = Behavior::Fail;
        provider
    }

    pub(crate) fn with_failing_videos(mut self) -> Self {
        self.video_behavior = Behavior::Fail;
        self
    }

    pub(crate) fn with_hanging_videos(mut self) -> Self {
        self.video_behavior = Behavior::Hang;
        self
    }

    pub(crate) fn requests(&self) -> Vec<(String, ResultType, usize)> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl SearchProvider for FakeProvider {
    async fn search(
        &self,
        query: &str,
        filter: ResultType,
        limit: usize,
    ) -> eyre::Result<Vec<SearchItem>> {
        self.requests
            .lock()
            .unwrap()
            .push((query.to_string(), filter, limit));

        let (items, behavior) = match filter {
            ResultType::Song => (&self.songs, self.song_behavior),
            ResultType::Video => (&self.videos, self.video_behavior),
        };

        match behavior {
            Behavior::Respond => Ok(items.clone()),
            Behavior::Fail => Err(eyre::eyre!("upstream unavailable")),
            Behavior::Hang => std::future::pending().await,
        }
    }
}
