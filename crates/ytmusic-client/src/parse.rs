//! Maps YouTube Music search JSON onto [`SearchItem`]s.

use serde_json::Value;

use models::{SearchItem, UpstreamArtist};

const RUN_GROUP_SEPARATOR: &str = " • ";

pub(crate) fn parse_search_page(response: &Value) -> (Vec<SearchItem>, Option<String>) {
    let sections = response
        .pointer("/contents/tabbedSearchResultsRenderer/tabs/0/tabRenderer/content/sectionListRenderer/contents")
        .or_else(|| response.pointer("/contents/sectionListRenderer/contents"))
        .and_then(Value::as_array);

    let Some(sections) = sections else {
        return (Vec::new(), None);
    };

    sections
        .iter()
        .find_map(|section| section.get("musicShelfRenderer"))
        .map(parse_shelf)
        .unwrap_or_default()
}

pub(crate) fn parse_continuation_page(response: &Value) -> (Vec<SearchItem>, Option<String>) {
    response
        .pointer("/continuationContents/musicShelfContinuation")
        .map(parse_shelf)
        .unwrap_or_default()
}

fn parse_shelf(shelf: &Value) -> (Vec<SearchItem>, Option<String>) {
    let items: Vec<SearchItem> = shelf
        .get("contents")
        .and_then(Value::as_array)
        .map(|contents| {
            contents
                .iter()
                .filter_map(|entry| entry.get("musicResponsiveListItemRenderer"))
                .filter_map(parse_list_item)
                .collect()
        })
        .unwrap_or_default();

    let continuation = shelf
        .pointer("/continuations/0/nextContinuationData/continuation")
        .and_then(Value::as_str)
        .map(str::to_string);

    (items, continuation)
}

fn parse_list_item(renderer: &Value) -> Option<SearchItem> {
    let title_runs = flex_column_runs(renderer, 0)?;
    let title = runs_text(title_runs);

    let video_id = renderer
        .pointer("/playlistItemData/videoId")
        .or_else(|| {
            renderer.pointer(
                "/overlay/musicItemThumbnailOverlayRenderer/content/musicPlayButtonRenderer/playNavigationEndpoint/watchEndpoint/videoId",
            )
        })
        .or_else(|| {
            title_runs
                .first()
                .and_then(|run| run.pointer("/navigationEndpoint/watchEndpoint/videoId"))
        })
        .and_then(Value::as_str)
        .map(str::to_string);

    let groups = flex_column_runs(renderer, 1)
        .map(|runs| split_run_groups(runs))
        .unwrap_or_default();

    // Names and joiners alternate: "A", " & ", "B".
    let artists = groups
        .first()
        .map(|group| {
            group
                .iter()
                .step_by(2)
                .map(|name| UpstreamArtist {
                    name: name.to_string(),
                })
                .collect::<Vec<_>>()
        })
        .filter(|artists| !artists.is_empty());

    let duration = groups
        .iter()
        .skip(1)
        .filter_map(|group| group.first().copied())
        .find(|text| looks_like_duration(text))
        .map(str::to_string);

    Some(SearchItem {
        video_id,
        title: Some(title),
        artists,
        duration,
    })
}

fn flex_column_runs(renderer: &Value, index: usize) -> Option<&Vec<Value>> {
    renderer
        .get("flexColumns")?
        .get(index)?
        .pointer("/musicResponsiveListItemFlexColumnRenderer/text/runs")?
        .as_array()
}

fn runs_text(runs: &[Value]) -> String {
    runs.iter()
        .filter_map(|run| run.get("text").and_then(Value::as_str))
        .collect()
}

fn split_run_groups(runs: &[Value]) -> Vec<Vec<&str>> {
    let mut groups = vec![Vec::new()];
    for text in runs.iter().filter_map(|run| run.get("text").and_then(Value::as_str)) {
        if text == RUN_GROUP_SEPARATOR {
            groups.push(Vec::new());
        } else if let Some(group) = groups.last_mut() {
            group.push(text);
        }
    }
    groups.retain(|group| !group.is_empty());
    groups
}

fn looks_like_duration(text: &str) -> bool {
    let parts: Vec<&str> = text.split(':').collect();
    parts.len() >= 2
        && parts
            .iter()
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()))
}
