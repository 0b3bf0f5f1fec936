use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use careerpath::config::Config;
use careerpath::routes::build_router;
use careerpath::state::AppState;
use careerpath::wizard::SessionStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerPath API v{}", env!("CARGO_PKG_VERSION"));

    // Build app state (registers the built-in summary builders)
    let state = AppState::new(config.clone());
    info!(
        "Summary builders registered: {}",
        state.registry.keys().join(", ")
    );

    spawn_session_sweeper(
        state.sessions.clone(),
        config.session_idle_ttl,
        config.session_sweep_interval,
    );

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS to the SPA origin once it has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Periodically drops wizard sessions idle for longer than `ttl`.
fn spawn_session_sweeper(
    sessions: SessionStore,
    ttl: std::time::Duration,
    every: std::time::Duration,
) {
    info!(
        "Session sweeper: idle ttl {}s, every {}s",
        ttl.as_secs(),
        every.as_secs()
    );
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            sessions.evict_idle(ttl).await;
        }
    });
}
