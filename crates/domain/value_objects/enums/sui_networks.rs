use serde::{Deserialize, Serialize};
use std::fmt::Display;

const SUISCAN_BASE_URL: &str = "https://suiscan.xyz";

/// Sui network the publisher certifies blobs on. Picks the explorer links.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SuiNetwork {
    Mainnet,
    #[default]
    Testnet,
    Devnet,
}

impl SuiNetwork {
    pub fn tx_url(&self, tx_digest: &str) -> String {
        format!("{}/{}/tx/{}", SUISCAN_BASE_URL, self, tx_digest)
    }

    pub fn object_url(&self, object_id: &str) -> String {
        format!("{}/{}/object/{}", SUISCAN_BASE_URL, self, object_id)
    }
}

impl Display for SuiNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let network = match self {
            SuiNetwork::Mainnet => "mainnet",
            SuiNetwork::Testnet => "testnet",
            SuiNetwork::Devnet => "devnet",
        };
        write!(f, "{}", network)
    }
}

impl TryFrom<&str> for SuiNetwork {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(SuiNetwork::Mainnet),
            "testnet" => Ok(SuiNetwork::Testnet),
            "devnet" => Ok(SuiNetwork::Devnet),
            other => anyhow::bail!("unknown sui network: {}", other),
        }
    }
}
