//! Safal API Server
//!
//! Serves property listings, the ROI calculator, and the blog.

use chrono::{Datelike, Utc};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use safal_api::{AppState, create_router};
use safal_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    // RUST_LOG wins over the configured filter
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let as_of_year = config
        .listing
        .as_of_year
        .unwrap_or_else(|| Utc::now().year());
    let state = AppState::with_catalog(config.calculator, as_of_year);
    info!(
        as_of_year,
        listings = state.properties.list().len(),
        posts = state.blog.list().len(),
        default_holding_period_years = config.calculator.default_holding_period_years,
        "Loaded catalog"
    );

    let app = create_router(state);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
