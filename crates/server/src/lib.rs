//! Server crate for the Asma Al Husna API.
//!
//! This crate holds the read-only lookup service and the HTTP surface over
//! it. The dataset itself (types, loading) lives in `asma-data`.

pub mod config;
pub mod error;
pub mod fonts;
pub mod lookup;
pub mod page;
pub mod routes;

pub use config::ServerConfig;
pub use error::{ApiError, ConfigError, LookupError};
pub use fonts::{DEFAULT_FONT_KEY, FontDescriptor, FontTable};
pub use lookup::{DatasetState, HealthStatus, NameLookup, NamesWithFont, SERVICE_VERSION};
pub use routes::{AppState, build_router};

use anyhow::{Context, Result};
use tracing::info;

/// Load the dataset, bind, and serve until Ctrl-C.
///
/// A bad font table is a startup error. A bad dataset is not: the service
/// still starts, in the degraded state.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let fonts = config
        .font_table()
        .context("Failed to load font table")?;
    info!("Using font table with {} fonts", fonts.len());

    let lookup = NameLookup::load(&config.data_file, fonts);
    let app = build_router(AppState::new(lookup));

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    info!("Listening on http://{}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
