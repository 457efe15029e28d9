use std::collections::HashSet;
use std::time::Duration;

use karaoke_parsers::keywords::{has_negative_keyword, QUERY_QUALIFIER};
use karaoke_parsers::{determine_attributes, parse_metadata, score_candidate, ScoreInput};
use models::{ResultType, SearchItem, SearchResponse, SongItem, FALLBACK_DURATION};
use ytmusic_client::SearchProvider;

use crate::error::UpstreamError;

pub(crate) const SONG_LIMIT: usize = 20;
pub(crate) const VIDEO_LIMIT: usize = 40;

/// Run one karaoke search. Upstream failures are logged and answered with
/// an empty result set.
pub(crate) async fn search_karaoke<P: SearchProvider>(
    provider: &P,
    query: Option<&str>,
    timeout: Duration,
) -> SearchResponse {
    let Some(query) = query.filter(|q| !q.is_empty()) else {
        return SearchResponse::empty();
    };

    let search_query = format!("{query} {QUERY_QUALIFIER}");
    let candidates = match fetch_candidates(provider, &search_query, timeout).await {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::warn!("search: upstream error for {:?}: {}", query, e);
            return SearchResponse::empty();
        }
    };

    SearchResponse::from_results(rank_candidates(query, candidates))
}

/// Song results first, then video results, each in upstream order.
async fn fetch_candidates<P: SearchProvider>(
    provider: &P,
    search_query: &str,
    timeout: Duration,
) -> Result<Vec<(ResultType, SearchItem)>, UpstreamError> {
    let (songs, videos) = tokio::join!(
        fetch_kind(provider, search_query, ResultType::Song, SONG_LIMIT, timeout),
        fetch_kind(provider, search_query, ResultType::Video, VIDEO_LIMIT, timeout),
    );
    let songs = songs?;
    let videos = videos?;

    Ok(songs
        .into_iter()
        .map(|item| (ResultType::Song, item))
        .chain(videos.into_iter().map(|item| (ResultType::Video, item)))
        .collect())
}

async fn fetch_kind<P: SearchProvider>(
    provider: &P,
    search_query: &str,
    filter: ResultType,
    limit: usize,
    timeout: Duration,
) -> Result<Vec<SearchItem>, UpstreamError> {
    match tokio::time::timeout(timeout, provider.search(search_query, filter, limit)).await {
        Ok(Ok(items)) => Ok(items),
        Ok(Err(e)) => Err(UpstreamError::Request {
            filter,
            message: format!("{e:#}"),
        }),
        Err(_) => Err(UpstreamError::Timeout { filter, timeout }),
    }
}

pub(crate) fn rank_candidates(
    query: &str,
    candidates: Vec<(ResultType, SearchItem)>,
) -> Vec<SongItem> {
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut scored: Vec<(u32, SongItem)> = Vec::new();
    let mut duplicates = 0usize;
    let mut rejected = 0usize;

    for (result_type, item) in candidates {
        let Some(video_id) = item.video_id.as_deref().filter(|id| !id.is_empty()) else {
            continue;
        };
        if seen_ids.contains(video_id) {
            duplicates += 1;
            continue;
        }

        let original_title = item.raw_title();
        if has_negative_keyword(original_title) {
            rejected += 1;
            continue;
        }

        let artist_hint = item.artist_hint();
        let channel = item.channel_name();

        let attributes = determine_attributes(original_title, channel);
        let parsed = parse_metadata(original_title, artist_hint, channel, result_type);
        let score = score_candidate(&ScoreInput {
            query,
            title: &parsed.title,
            artist: &parsed.artist,
            original_title,
            has_vocal: attributes.has_vocal,
            channel,
            result_type,
        });

        seen_ids.insert(video_id.to_string());
        scored.push((
            score,
            SongItem {
                video_id: video_id.to_string(),
                title: parsed.title,
                artist: parsed.artist,
                original_title: original_title.to_string(),
                duration: item
                    .duration
                    .clone()
                    .unwrap_or_else(|| FALLBACK_DURATION.to_string()),
                channel: channel.to_string(),
                result_type,
                is_no_guide: attributes.is_no_guide,
                has_vocal: attributes.has_vocal,
                key: parsed.key,
                kind: result_type,
            },
        ));
    }

    // `sort_by` is stable: equal scores keep song-before-video insertion order.
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    tracing::debug!(
        kept = scored.len(),
        duplicates,
        rejected,
        "search: ranked candidates"
    );

    scored.into_iter().map(|(_, item)| item).collect()
}
