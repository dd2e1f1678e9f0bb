// src/scrape.rs
//! Scraper driver: fetch the listing page, hand it to `specs::airdrops`, and
//! never let a failure escape. Callers always get a list, possibly empty.

use reqwest::Client;

use crate::{
    config::options::ScrapeOptions,
    core::net,
    progress::Progress,
    specs::airdrops::{self, ScrapedAirdrop},
};

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("bad selector {0}")]
    Selector(String),
}

pub struct AirdropScraper {
    opts: ScrapeOptions,
    client: Client,
}

impl AirdropScraper {
    pub fn new(opts: ScrapeOptions) -> Result<Self, ScrapeError> {
        let client = net::client(&opts)?;
        Ok(Self { opts, client })
    }

    /// Currently active airdrops. Empty on any fetch or parse failure.
    pub async fn active_airdrops(&self, mut progress: Option<&mut dyn Progress>) -> Vec<ScrapedAirdrop> {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Fetching {}", self.opts.active_url()));
        }

        let rows = match self.try_active_airdrops().await {
            Ok(rows) => rows,
            Err(e) => {
                loge!("Error scraping airdrops: {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("Scrape failed: {e}"));
                    p.finish();
                }
                return Vec::new();
            }
        };

        if let Some(p) = progress.as_deref_mut() {
            p.begin(rows.len());
            for row in &rows {
                p.item_done(&row.name);
            }
            p.finish();
        }
        logf!("Scraped {} airdrop(s)", rows.len());
        rows
    }

    /// Same as `active_airdrops` but surfaces the error.
    pub async fn try_active_airdrops(&self) -> Result<Vec<ScrapedAirdrop>, ScrapeError> {
        let doc = net::http_get(&self.client, &self.opts.active_url()).await?;
        airdrops::parse_active(&doc)
    }
}
