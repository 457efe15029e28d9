use axum::{
    extract::{Query, State},
    Json,
};
use models::SearchResponse;
use serde::Deserialize;
use ytmusic_client::SearchProvider;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    q: Option<String>,
}

pub async fn search<P: SearchProvider + 'static>(
    State(state): State<AppState<P>>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let response = crate::search::search_karaoke(
        state.provider.as_ref(),
        params.q.as_deref(),
        state.upstream_timeout,
    )
    .await;
    Json(response)
}
