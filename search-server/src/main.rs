mod config;
mod error;
mod routes;
mod search;
mod state;
#[cfg(test)]
mod test_support;

use eyre::WrapErr;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use ytmusic_client::{YtMusicClient, YtMusicConfig};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Karaoke search server starting...");

    let config = config::Config::from_env().wrap_err("Failed to load search server config")?;

    let ytmusic = YtMusicClient::new(YtMusicConfig {
        language: config.ytmusic_language.clone(),
        location: config.ytmusic_location.clone(),
        timeout: config.upstream_timeout,
    })
    .wrap_err("Failed to build YouTube Music client")?;

    tracing::info!(
        "Upstream search locale {}/{} (timeout {}s)",
        config.ytmusic_language,
        config.ytmusic_location,
        config.upstream_timeout.as_secs()
    );

    let app_state = state::AppState {
        provider: Arc::new(ytmusic),
        upstream_timeout: config.upstream_timeout,
    };

    let app = routes::create_router(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err("Failed to bind to address")?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate()).expect("install SIGTERM handler");
    tokio::select! {
        _ = sigterm.recv() => {},
        _ = tokio::signal::ctrl_c() => {},
    }
}
