pub mod axum_http;
pub mod config;
pub mod presentation;
pub mod usecases;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

pub async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    crates::observability::init_observability("walrus-upload")?;

    let dotenvy_env = config::config_loader::load()?;
    info!("ENV has been loaded");

    axum_http::http_serve::start(Arc::new(dotenvy_env)).await?;

    Ok(())
}
