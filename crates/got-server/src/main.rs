//! Binary entrypoint for the dashboard server.
//!
//! Configuration comes from environment variables; see
//! [`got_server::config`]. Log verbosity follows `RUST_LOG`.

use got_server::config::ServerConfig;
use got_server::router::build_router;
use got_server::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let state = match AppState::new(&config) {
        Ok(state) => state,
        Err(err) => {
            tracing::error!(%err, dataset = ?config.dataset, "failed to load dataset");
            std::process::exit(1);
        }
    };

    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("got dashboard server starting on {}", addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(%err, %addr, "failed to bind");
            std::process::exit(1);
        }
    };
    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!(%err, "server error");
        std::process::exit(1);
    }
}
