use std::net::SocketAddr;

use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub loader: LoaderConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub db_file: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoaderConfig {
    pub words_file: String,
}

impl Config {
    pub fn load() -> Result<Config> {
        let config_content = std::fs::read_to_string("config.toml")
            .map_err(|_| anyhow::anyhow!("config.toml not found or unreadable"))?;
        let config: Config = toml::from_str(&config_content)
            .map_err(|e| anyhow::anyhow!("failed to parse config.toml: {}", e))?;
        Ok(config)
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid server address: {}", e))?;
        Ok(addr)
    }
}
