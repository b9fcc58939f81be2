use anyhow::Context;
use dotenvy::dotenv;
use std::sync::Arc;
use tokio::net::TcpListener;

use gait_daily::{app, config::AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,gait_daily=debug,tower_http=info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = AppConfig::from_env().context("Invalid configuration")?;

    let _guard = match config.sentry_dsn.as_deref().map(str::parse::<sentry::types::Dsn>) {
        Some(Ok(dsn)) => Some(sentry::init(sentry::ClientOptions {
            dsn: Some(dsn),
            release: sentry::release_name!(),
            environment: Some(config.environment.clone().into()),
            ..Default::default()
        })),
        Some(Err(e)) => {
            tracing::warn!("Ignoring invalid SENTRY_DSN: {}", e);
            None
        }
        None => {
            if config.is_production() {
                tracing::warn!("SENTRY_DSN not set in {} environment", config.environment);
            }
            None
        }
    };

    tracing::info!(
        environment = %config.environment,
        icon_reveal_ms = ?config.timing.icon_reveal.map(|d| d.as_millis()),
        complete_ms = config.timing.complete_after.as_millis() as u64,
        menu_delay_ms = config.timing.menu_entrance_delay.as_millis() as u64,
        service_worker = config.register_service_worker,
        "Loaded configuration"
    );
    if !config.static_dir.is_dir() {
        tracing::warn!(
            "Static icon directory {} does not exist, /icons/* will 404",
            config.static_dir.display()
        );
    }

    let address = config.bind_address();
    let state = Arc::new(AppState::new(config));
    let router = app(state);

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!("Starting server on {}", address);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
