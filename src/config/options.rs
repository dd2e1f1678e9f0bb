// src/config/options.rs
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedMode {
    /// The two built-in sample records.
    Samples,
    /// Start with nothing.
    Empty,
    /// Whatever the scraper finds at startup.
    Scrape,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerOptions {
    pub addr: String,
    pub seed: SeedMode,
    pub log_filter: String,
    pub scrape: ScrapeOptions,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            addr: std::env::var(ENV_ADDR).unwrap_or_else(|_| s!(DEFAULT_ADDR)),
            seed: SeedMode::Samples,
            log_filter: s!(DEFAULT_LOG_FILTER),
            scrape: ScrapeOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: std::env::var(ENV_SCRAPE_URL).unwrap_or_else(|_| s!(SCRAPE_BASE_URL)),
            user_agent: s!(USER_AGENT),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ScrapeOptions {
    /// Listing page URL; tolerates a trailing slash on `base_url`.
    pub fn active_url(&self) -> String {
        join!(self.base_url.trim_end_matches('/'), ACTIVE_PATH)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimOptions {
    pub headless: bool,
    pub button_wait: Duration,
    pub confirmation_wait: Duration,
}

impl Default for ClaimOptions {
    fn default() -> Self {
        Self {
            headless: true,
            button_wait: Duration::from_secs(CLAIM_BUTTON_WAIT_SECS),
            confirmation_wait: Duration::from_secs(CONFIRMATION_WAIT_SECS),
        }
    }
}
