mod health;
mod search;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use ytmusic_client::SearchProvider;

use crate::state::AppState;

pub(crate) fn create_router<P: SearchProvider + 'static>(state: AppState<P>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/search", get(search::search::<P>))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(tracing::Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .with_state(state)
}
