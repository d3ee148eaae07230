use anyhow::Result;
use statusboard::config::{AppConfig, SourceKind};
use statusboard::source::{HttpStatusSource, LocalStatusSource, StatusSource};
use statusboard::*;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

fn build_source(config: &AppConfig) -> Result<Arc<dyn StatusSource>> {
    let source: Arc<dyn StatusSource> = match config.source.kind {
        SourceKind::Http => {
            let base_url = config.source.base_url.as_deref().unwrap_or_default();
            let http = HttpStatusSource::new(
                base_url,
                Duration::from_millis(config.source.timeout_ms),
            )?;
            tracing::info!("Reading status from {}", http.url());
            Arc::new(http)
        }
        SourceKind::Local => {
            tracing::info!("Reading status from this host");
            Arc::new(LocalStatusSource::new())
        }
    };
    Ok(source)
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm =
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(s) => s,
                Err(_) => {
                    let _ = tokio::signal::ctrl_c().await;
                    return;
                }
            };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    tracing::info!("Received shutdown signal");
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    let app_config = AppConfig::load()?;
    let source = build_source(&app_config)?;
    let presenter = Arc::new(presenter::StatusPresenter::new(
        source,
        app_config.session.default_order,
    ));
    let sessions = Arc::new(session::SessionRegistry::with_max_sessions(
        app_config.session.max_sessions,
    ));

    let app = routes::app(presenter, sessions);
    let addr = format!("{}:{}", app_config.server.host, app_config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("{} listening on http://{}", version::describe(), addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
