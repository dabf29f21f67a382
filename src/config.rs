use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use crate::error::{AppError, Result};

#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub language: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        // Load server configuration with defaults
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
        let server_addr = parse_addr(&host, &port)?;

        // Content language for the Wikipedia lookup
        let language = env::var("WIKI_LANG").unwrap_or_else(|_| "en".to_string());

        Ok(Config {
            server_addr,
            language,
        })
    }
}

fn parse_addr(host: &str, port: &str) -> Result<SocketAddr> {
    let port = port
        .parse::<u16>()
        .map_err(|e| AppError::Config(format!("Invalid port: {}", e)))?;
    let ip = IpAddr::from_str(host)
        .map_err(|e| AppError::Config(format!("Invalid host address: {}", e)))?;
    Ok(SocketAddr::new(ip, port))
}

/// Version string reported by `/version`. A release build can override the
/// crate version by setting `WIKIPEDIA_AGENT_VERSION` at compile time.
pub fn version() -> &'static str {
    option_env!("WIKIPEDIA_AGENT_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}
