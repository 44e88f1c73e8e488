use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qlk_api::config::ServerConfig;
use qlk_api::rate_limit::RateLimiter;
use qlk_api::router::build_app_router;
use qlk_api::state::AppState;
use qlk_cms::Content;
use qlk_google::{MediaLibrary, TourCalendar};
use qlk_mailer::Mailer;
use qlk_spotify::Catalog;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qlk_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Upstream services ---
    // Each degrades to empty results when its configuration is missing, so
    // a partially configured environment still serves pages.
    let content = Arc::new(Content::from_env());
    let catalog = Arc::new(Catalog::from_env());
    let tour = Arc::new(TourCalendar::from_env());
    let media = Arc::new(MediaLibrary::from_env());
    let mailer = Arc::new(Mailer::from_env());
    tracing::info!(
        cms = content.is_configured(),
        catalog = catalog.is_configured(),
        calendar = tour.is_configured(),
        drive = media.is_configured(),
        smtp = mailer.is_configured(),
        "Upstream services initialised",
    );

    // --- Rate limiter ---
    let rate_limiter = Arc::new(RateLimiter::new(
        config.rate_limit_max_requests,
        Duration::from_secs(config.rate_limit_window_secs),
    ));

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
        content,
        catalog,
        tour,
        media,
        mailer,
        rate_limiter,
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
