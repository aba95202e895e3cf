//! LOS Dashboard Server
//!
//! Ingests the case workbook once at startup and serves the dashboard API.

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use los_api::{AppState, create_router};
use los_ingest::{Ingestor, XlsxSource};
use los_shared::{AppConfig, AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "los=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    // A broken workbook means no dashboard at all
    let state = load_state(&config)?;
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Ingests the configured workbook into the shared handler state.
fn load_state(config: &AppConfig) -> AppResult<AppState> {
    let source = XlsxSource::new(&config.dataset.path);
    info!(path = %config.dataset.path.display(), "Loading dataset");
    let dataset = Ingestor::load(&source).map_err(AppError::from)?;

    Ok(AppState::new(
        dataset,
        config.dataset.preview_rows,
        config.dashboard.default_sort,
    ))
}
