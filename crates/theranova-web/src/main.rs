//! TheraNova API server
//!
//! Run with: cargo run -p theranova-web

use tracing::info;
use tracing_subscriber::EnvFilter;
use theranova_web::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("theranova=debug,info")),
        )
        .init();

    let config = Config::load()?;
    info!(
        scoring = %config.scoring.base_url,
        database = %config.database.path,
        "Starting TheraNova backend"
    );

    theranova_web::run(config).await
}
