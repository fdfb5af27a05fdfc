//! Runtime configuration, read from the environment at startup.

use std::net::SocketAddr;

use anyhow::Context;

use finapi_observability::LogFormat;

pub const BIND_ADDR_VAR: &str = "FINAPI_BIND_ADDR";
pub const LOG_FORMAT_VAR: &str = "FINAPI_LOG_FORMAT";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3333";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let raw_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("{BIND_ADDR_VAR}={raw_addr} is not a socket address"))?;

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw
                .parse::<LogFormat>()
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("invalid {LOG_FORMAT_VAR}"))?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bind_addr,
            log_format,
        })
    }
}
