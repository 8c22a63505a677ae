use std::net::SocketAddr;

use daycoach_lib::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env if present (dev only)
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "daycoach=info,daycoach_lib=info,daycoach_infra=info,tower_http=info".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = daycoach_infra::config::load().expect("Failed to load configuration");

    if !config.google_missing.is_empty() {
        tracing::warn!(
            missing = ?config.google_missing,
            "Google OAuth is not fully configured; connect endpoints will report it"
        );
    }
    if config.openai.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; analyze requests will be rejected");
    }

    let port = config.server.port;
    let state = AppState::new(config).expect("Failed to build application state");
    let app = daycoach_lib::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("DayCoach listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app).await.expect("Server error");
}
