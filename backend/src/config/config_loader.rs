use anyhow::{Context, Result};
use crates::domain::value_objects::enums::sui_networks::SuiNetwork;

use super::config_model::{BackendServer, DotEnvyConfig, Walrus};

pub const DEFAULT_PUBLISHER_URL: &str = "https://publisher.walrus-testnet.walrus.space";
pub const DEFAULT_AGGREGATOR_URL: &str = "https://aggregator.walrus-testnet.walrus.space";

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let backend_server = BackendServer {
        port: env_or("SERVER_PORT", "3000")
            .parse()
            .context("SERVER_PORT is invalid")?,
        body_limit: env_or("SERVER_BODY_LIMIT", "11")
            .parse()
            .context("SERVER_BODY_LIMIT is invalid")?,
        timeout: env_or("SERVER_TIMEOUT", "120")
            .parse()
            .context("SERVER_TIMEOUT is invalid")?,
    };

    let walrus = Walrus {
        publisher_url: env_or("WALRUS_PUBLISHER_URL", DEFAULT_PUBLISHER_URL),
        aggregator_url: env_or("WALRUS_AGGREGATOR_URL", DEFAULT_AGGREGATOR_URL),
        sui_network: SuiNetwork::try_from(env_or("SUI_NETWORK", "testnet").as_str())
            .context("SUI_NETWORK is invalid")?,
    };

    Ok(DotEnvyConfig {
        backend_server,
        walrus,
    })
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
