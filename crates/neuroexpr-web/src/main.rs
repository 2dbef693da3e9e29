//! Neuroexpr Web Server
//!
//! Run with: cargo run -p neuroexpr-web

use std::net::SocketAddr;

use neuroexpr_data::{Dataset, DatasetPaths};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = neuroexpr_web::config::Config::load()?;

    // All four tables load up front; a bad file aborts startup.
    info!("Loading study tables from {}/", config.data.dir);
    let dataset = Dataset::load(&DatasetPaths::from_dir(&config.data.dir))?;

    let state = neuroexpr_web::state::AppState::new(dataset);
    let app = neuroexpr_web::router::build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
