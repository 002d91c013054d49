pub mod analyzer;
pub mod log;
pub mod network;

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use url::Url;

pub use analyzer::AnalyzerConfig;
pub use analyzer::SourceMode;
pub use log::LoggingConfig;
pub use log::LogRotation;
pub use network::NetworkConfig;
pub use network::NetworkRegistry;

use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub networks: NetworkRegistry,
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

pub fn load_config(path: impl AsRef<Path>) -> crate::Result<Config> {
    let path = path.as_ref();
    let config_str = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::OpenFileError(format!("{}: {}", path.display(), e)))?;
    let config: Config =
        toml::from_str(&config_str).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    if config.networks.is_empty() {
        return Err(ConfigError::EmptyRegistry(path.display().to_string()).into());
    }
    for network in &config.networks.networks {
        Url::parse(&network.api_url)
            .map_err(|e| ConfigError::ParseError(format!("network {}: api_url: {}", network.id, e)))?;
    }
    Ok(config)
}
