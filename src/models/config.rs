//! Configuration module for SafeLaunch Guard
//!
//! The pipeline receives one explicit `GuardConfig` at construction.
//! Environment reads happen here and only here; business logic never
//! touches `std::env`.

use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use crate::models::errors::{AppError, AppResult};
use crate::utils::constants::{
    API_KEY_ENV, DEFAULT_BASELINE_COUNT, DEFAULT_BASE_URL, DEFAULT_GRANT_LIMIT,
    DEFAULT_LEDGER_PATH, DEFAULT_SAFETY_BUFFER, DEFAULT_TIMEOUT_SECS,
};

/// Supported blockchain networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chain {
    Base,
    Ethereum,
    Solana,
    Bsc,
    Arbitrum,
    Polygon,
}

impl Chain {
    /// All supported networks, in display order.
    pub const ALL: [Chain; 6] = [
        Chain::Base,
        Chain::Ethereum,
        Chain::Solana,
        Chain::Bsc,
        Chain::Arbitrum,
        Chain::Polygon,
    ];

    /// Chain code sent to the Webacy API as the `chain` query parameter.
    pub fn code(&self) -> &'static str {
        match self {
            Chain::Base => "base",
            Chain::Ethereum => "eth",
            Chain::Solana => "sol",
            Chain::Bsc => "bsc",
            Chain::Arbitrum => "arb",
            Chain::Polygon => "pol",
        }
    }

    /// Human-readable network name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Chain::Base => "Base",
            Chain::Ethereum => "Ethereum",
            Chain::Solana => "Solana",
            Chain::Bsc => "BSC",
            Chain::Arbitrum => "Arbitrum",
            Chain::Polygon => "Polygon",
        }
    }

    /// Parse user input, accepting either the display name or the code.
    pub fn parse(input: &str) -> AppResult<Chain> {
        let needle = input.trim().to_lowercase();
        Chain::ALL
            .into_iter()
            .find(|c| c.code() == needle || c.display_name().to_lowercase() == needle)
            .ok_or_else(|| AppError::unknown_chain(input))
    }
}

/// Configuration for the audit pipeline
#[derive(Debug, Clone)]
pub struct GuardConfig {
    /// Webacy API key. Absence is a fatal precondition for any audit.
    pub api_key: String,
    /// API base URL (overridable for staging/tests)
    pub base_url: String,
    /// Total audits covered by the grant
    pub grant_limit: u64,
    /// Credits held back before the hard ceiling
    pub safety_buffer: u64,
    /// Ledger count assumed when no ledger file exists
    pub baseline_count: u64,
    /// Deadline for the outbound API call
    pub request_timeout: Duration,
    /// Location of the persisted usage ledger
    pub ledger_path: PathBuf,
}

impl GuardConfig {
    /// Build configuration from the environment.
    ///
    /// A missing `WEBACY_API_KEY` is tolerated here and becomes fatal at
    /// pipeline construction, so ledger-only commands still work.
    /// Numeric overrides that fail to parse are a configuration error,
    /// not a silent default.
    pub fn from_env() -> AppResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map(|k| k.trim().to_string())
            .unwrap_or_default();
        if !api_key.is_empty() {
            // Key is never logged
            info!("🔑 {} configured (key hidden)", API_KEY_ENV);
        }

        Ok(Self {
            api_key,
            base_url: std::env::var("WEBACY_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            grant_limit: env_u64("GUARD_GRANT_LIMIT", DEFAULT_GRANT_LIMIT)?,
            safety_buffer: env_u64("GUARD_SAFETY_BUFFER", DEFAULT_SAFETY_BUFFER)?,
            baseline_count: env_u64("GUARD_BASELINE_COUNT", DEFAULT_BASELINE_COUNT)?,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            ledger_path: std::env::var("GUARD_LEDGER_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_LEDGER_PATH)),
        })
    }

    /// Config with the given key and defaults for everything else.
    /// Used by tests and embedders that manage their own environment.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            grant_limit: DEFAULT_GRANT_LIMIT,
            safety_buffer: DEFAULT_SAFETY_BUFFER,
            baseline_count: DEFAULT_BASELINE_COUNT,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            ledger_path: PathBuf::from(DEFAULT_LEDGER_PATH),
        }
    }

    /// Hard ceiling after which no request is issued.
    pub fn effective_limit(&self) -> u64 {
        self.grant_limit.saturating_sub(self.safety_buffer)
    }
}

fn env_u64(name: &str, default: u64) -> AppResult<u64> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| AppError::invalid_config(format!("{} is not an integer: {}", name, raw))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_codes() {
        assert_eq!(Chain::Base.code(), "base");
        assert_eq!(Chain::Ethereum.code(), "eth");
        assert_eq!(Chain::Solana.code(), "sol");
        assert_eq!(Chain::Bsc.code(), "bsc");
        assert_eq!(Chain::Arbitrum.code(), "arb");
        assert_eq!(Chain::Polygon.code(), "pol");
    }

    #[test]
    fn test_chain_parse_accepts_name_and_code() {
        assert_eq!(Chain::parse("Base").unwrap(), Chain::Base);
        assert_eq!(Chain::parse("eth").unwrap(), Chain::Ethereum);
        assert_eq!(Chain::parse("  polygon ").unwrap(), Chain::Polygon);
        assert!(Chain::parse("tron").is_err());
    }

    #[test]
    fn test_effective_limit_respects_buffer() {
        let mut config = GuardConfig::with_api_key("k");
        config.grant_limit = 2000;
        config.safety_buffer = 50;
        assert_eq!(config.effective_limit(), 1950);

        config.safety_buffer = 5000;
        assert_eq!(config.effective_limit(), 0);
    }
}
