use anyhow::Context;
use mimalloc::MiMalloc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use theater_service::{app, config::Config, AppState};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env().context("invalid configuration")?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        environment = %config.app.environment,
        "Starting Theater API with a {}x{} hall",
        config.theater.rows,
        config.theater.columns
    );
    if config.admin.uses_default_password() {
        warn!("ADMIN_PASSWORD is not set, falling back to the default admin password");
    }

    let addr = format!("{}:{}", config.app.host, config.app.port);

    // Create the shared application state
    let app_state = AppState::new(config);
    let router = app(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {:?}", e);
    }
}
