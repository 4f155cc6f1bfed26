use anyhow::Context;
use server::config::ServerConfig;
use server::settings::SettingsStore;
use server::{health, rest, telemetry, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing();
    health::record_start_time();

    let config = ServerConfig::from_env();
    let settings = SettingsStore::load(config.settings_path.clone())
        .context("failed to load tool settings")?;
    if settings.snapshot().password_hash().is_none() {
        tracing::warn!(
            path = ?settings.path(),
            "No access password configured; visitors will see the setup notice"
        );
    }
    if config.admin_token.is_none() {
        tracing::info!("ADMIN_TOKEN not set, admin settings API disabled");
    }

    let bind_addr = config.bind_addr.clone();
    let state = AppState::new(config, settings).context("failed to build HTTP client")?;
    let router = rest::app_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "Property lookup listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
    }
    tracing::info!("Shutting down");
}
