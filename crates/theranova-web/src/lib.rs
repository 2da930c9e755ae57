//! theranova-web: HTTP API for TheraNova drug repurposing analysis.
//!   - Liveness and scoring service health
//!   - Remote scoring with local verdict classification
//!   - Saved analysis persistence

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

use std::sync::Arc;
use anyhow::Context;
use theranova_db::{AnalysisStore, Database, PayloadCodec};
use theranova_scoring::HttpScoringClient;
use tracing::{info, warn};

use crate::config::Config;
use crate::state::AppState;

/// Open the database, apply migrations and build the HTTP scoring client.
pub fn build_state(config: &Config) -> anyhow::Result<AppState> {
    let db = Database::open(&config.database.path)
        .with_context(|| format!("opening database at {}", config.database.path))?;
    db.initialize().context("applying database migrations")?;
    info!(path = %db.path(), "Analysis database ready");

    let scorer = HttpScoringClient::new(&config.scoring.base_url, config.scoring_timeout())?;
    let store = AnalysisStore::new(Arc::new(db), PayloadCodec::new());

    Ok(AppState::new(Arc::new(scorer), store))
}

/// Bind, probe the scorer and serve until SIGINT/SIGTERM.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let state = build_state(&config)?;

    match state.scorer.health_check().await {
        Ok(true) => info!(base_url = %state.scorer.base_url(), "Scoring service reachable"),
        Ok(false) => warn!(base_url = %state.scorer.base_url(), "Scoring service answered but reports unhealthy"),
        Err(e) => warn!(base_url = %state.scorer.base_url(), "Scoring service not reachable yet: {}", e),
    }

    let app = router::build_router(state);
    let listener = tokio::net::TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("binding {}", config.server.bind))?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = wait_for_shutdown_signal().await {
                warn!("Shutdown signal handler failed: {}", e);
            }
        })
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn wait_for_shutdown_signal() -> anyhow::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut term = signal(SignalKind::terminate()).context("SIGTERM handler failed")?;
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = term.recv() => {}
        }
        Ok(())
    }
    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await.context("Ctrl+C handler failed")?;
        Ok(())
    }
}
