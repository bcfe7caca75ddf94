mod app;
mod classifier;
mod config;
mod db;
mod domain;
mod infrastructure;
mod ingest;
mod scraper;
mod tasks;

use anyhow::Result;
use infrastructure::{directories, logging};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_config()?;
    let paths = directories::ensure_directories(&config.directories)?;
    logging::init_tracing(&config, &paths)?;

    let app = app::IngestApp::initialize(config, paths).await?;
    app.run().await
}
