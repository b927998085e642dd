use crates::domain::value_objects::enums::sui_networks::SuiNetwork;

#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub backend_server: BackendServer,
    pub walrus: Walrus,
}

#[derive(Debug, Clone)]
pub struct BackendServer {
    pub port: u16,
    /// MiB
    pub body_limit: u64,
    /// Seconds
    pub timeout: u64,
}

/// Defaults offered by the upload form; each submission may override them.
#[derive(Debug, Clone)]
pub struct Walrus {
    pub publisher_url: String,
    pub aggregator_url: String,
    pub sui_network: SuiNetwork,
}
