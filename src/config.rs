//! Service configuration
//!
//! All environment lookups happen here, once, at startup. Components receive
//! their settings explicitly instead of reading the environment themselves.

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 5000;

/// Runtime configuration, built once in `main`.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP port the server listens on.
    pub port: u16,
    /// Upstream search engine id (`cx` parameter).
    pub search_cx: String,
    /// Upstream API credential (`key` parameter).
    pub search_key: String,
    /// Postgres connection string. When absent the query log is disabled.
    pub database_url: Option<String>,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("Invalid PORT value: {}", raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let search_cx = std::env::var("SEARCH_CX").context("SEARCH_CX is not set")?;
        let search_key = std::env::var("SEARCH_KEY").context("SEARCH_KEY is not set")?;
        let database_url = std::env::var("DATABASE_URL").ok();

        Ok(Self {
            port,
            search_cx,
            search_key,
            database_url,
        })
    }
}
