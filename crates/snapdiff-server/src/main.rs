use anyhow::Context;
use snapdiff_core::logging_facility::{init_with_file, open_log_file};
use snapdiff_core_types::schema::{MSG_SERVICE_START, MSG_SERVICE_STOP};
use snapdiff_server::{build_router, AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let config = ServerConfig::from_env().context("failed to load server configuration")?;
    let log_file = match &config.log_dir {
        Some(dir) => Some(
            open_log_file(dir)
                .with_context(|| format!("failed to open log file in {}", dir.display()))?,
        ),
        None => None,
    };
    let log_path = log_file.as_ref().map(|(path, _)| path.clone());
    init_with_file(
        config.log_profile,
        &config.log_level,
        log_file.map(|(_, file)| file),
    );

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!("{}", MSG_SERVICE_START);
    info!(
        bind = %config.bind_addr,
        log_results = config.log_results,
        results_dir = %config.results_dir.display(),
        max_upload_bytes = config.max_upload_bytes,
        "snapdiff server listening"
    );
    if let Some(path) = &log_path {
        info!(path = %path.display(), "writing log file");
    }
    let grace = config.shutdown_grace;
    let app = build_router(AppState::new(config));

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            wait_for_shutdown_signal().await;
            info!(grace_ms = grace.as_millis() as u64, "shutdown signal received");
            if !grace.is_zero() {
                tokio::time::sleep(grace).await;
            }
        })
        .await
        .context("server terminated abnormally")?;

    info!("{}", MSG_SERVICE_STOP);
    Ok(())
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                tracing::warn!("signal handlers unavailable, falling back to ctrl-c");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
