//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use career_insights::adapters::remote::{HttpDataSource, MockDataSource};
use career_insights::adapters::ui::{ConsoleInputPort, ConsoleListener};
use career_insights::domain::UserId;
use career_insights::ports::{InputPort, InsightsListener, RemoteDataSource};
use career_insights::shared::config::AppConfig;
use career_insights::usecases::{AdviceService, Aggregator};
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "invalid configuration; using defaults");
            AppConfig::default()
        }
    };

    // --- Data source: backend over HTTP, or mock data when offline ---
    let source: Arc<dyn RemoteDataSource> = if cfg.is_offline() {
        warn!("CAREER_INSIGHTS_OFFLINE set, using mock data source");
        Arc::new(MockDataSource::with_delay(cfg.mock_latency_ms_or_default()))
    } else {
        let url = cfg.api_base_url_or_default();
        let timeout_secs = cfg.request_timeout_secs_or_default();
        info!(url = %url, timeout_secs, "using career backend");
        Arc::new(
            HttpDataSource::new(url, Duration::from_secs(timeout_secs))
                .map_err(|e| anyhow::anyhow!("{}", e))?,
        )
    };

    // --- Services ---
    let console = ConsoleListener::new();
    let progress = console.progress();
    let listener: Arc<dyn InsightsListener> = Arc::new(console);
    let aggregator = Arc::new(Aggregator::new(Arc::clone(&source), Arc::clone(&listener)));
    let advice = Arc::new(AdviceService::new(source, listener));

    let input_port: Arc<dyn InputPort> = Arc::new(ConsoleInputPort::new(
        aggregator,
        advice,
        cfg.user_email().map(UserId::new),
        cfg.is_interactive(),
        progress,
    ));

    // --- Run (identify user -> aggregate -> advice) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
