use models::ResultType;

use crate::keywords::is_trusted_channel;
use crate::normalize::normalize_for_comparison;

pub const QUERY_TOKEN_MATCH_POINTS: u32 = 20_000;
pub const OFF_VOCAL_POINTS: u32 = 5_000;
pub const TRUSTED_CHANNEL_POINTS: u32 = 3_000;
pub const SONG_RESULT_POINTS: u32 = 100;

#[derive(Debug, Clone, Copy)]
pub struct ScoreInput<'a> {
    pub query: &'a str,
    pub title: &'a str,
    pub artist: &'a str,
    pub original_title: &'a str,
    pub has_vocal: bool,
    pub channel: &'a str,
    pub result_type: ResultType,
}

/// Points for every whitespace-separated query token found in the folded
/// `title artist original_title` text. Repeated tokens count each time.
pub fn relevance_score(query: &str, title: &str, artist: &str, original_title: &str) -> u32 {
    if query.is_empty() {
        return 0;
    }
    let target = normalize_for_comparison(&format!("{title} {artist} {original_title}"));

    query
        .split_whitespace()
        .map(normalize_for_comparison)
        .filter(|token| !token.is_empty() && target.contains(token.as_str()))
        .fold(0u32, |score, _| score.saturating_add(QUERY_TOKEN_MATCH_POINTS))
}

pub fn score_candidate(input: &ScoreInput<'_>) -> u32 {
    let mut score = relevance_score(input.query, input.title, input.artist, input.original_title);
    if !input.has_vocal {
        score = score.saturating_add(OFF_VOCAL_POINTS);
    }
    if is_trusted_channel(input.channel) {
        score = score.saturating_add(TRUSTED_CHANNEL_POINTS);
    }
    if input.result_type == ResultType::Song {
        score = score.saturating_add(SONG_RESULT_POINTS);
    }
    score
}
