// src/config.rs
//! Env-driven runtime configuration with safe defaults.

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_PER_PAGE: u32 = 100;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

pub const ENV_API_BASE: &str = "CHAINFOLIO_API_BASE";
pub const ENV_TIMEOUT_SECS: &str = "CHAINFOLIO_TIMEOUT_SECS";
pub const ENV_PER_PAGE: &str = "CHAINFOLIO_PER_PAGE";
pub const ENV_FEATURED_LIMIT: &str = "CHAINFOLIO_FEATURED_LIMIT";
pub const ENV_BIND_ADDR: &str = "CHAINFOLIO_BIND_ADDR";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: String,
    /// Bounded request timeout so a stalled upstream cannot hang a
    /// section indefinitely.
    pub timeout_secs: u64,
    pub per_page: u32,
    pub featured_limit: usize,
    pub bind_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            per_page: DEFAULT_PER_PAGE,
            featured_limit: crate::portfolio::DEFAULT_FEATURED_LIMIT,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base: std::env::var(ENV_API_BASE).unwrap_or(defaults.api_base),
            timeout_secs: parse_env(ENV_TIMEOUT_SECS).unwrap_or(defaults.timeout_secs),
            per_page: parse_env(ENV_PER_PAGE).unwrap_or(defaults.per_page),
            featured_limit: parse_env(ENV_FEATURED_LIMIT).unwrap_or(defaults.featured_limit),
            bind_addr: std::env::var(ENV_BIND_ADDR).unwrap_or(defaults.bind_addr),
        }
    }
}
