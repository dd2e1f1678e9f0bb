// src/specs/airdrops.rs
//! Scraping spec for the active-airdrops listing page.
//!
//! Card layout:
//! ```text
//! <div class="airdrop-card">
//!   <h2 class="airdrop-title">Name</h2>
//!   <span class="deadline">2025-03-01</span>
//!   <div class="requirement">Hold a wallet</div> ...
//!   <div class="reward">100 TOKEN</div>
//! </div>
//! ```
//! Cards without a title are dropped. A deadline that is not `YYYY-MM-DD`
//! becomes `None` rather than failing the page.

use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

use crate::airdrop::{canonical_date, parse_deadline};
use crate::config::consts::{DEFAULT_STATUS, UNKNOWN_REWARD};
use crate::core::sanitize::normalize_ws;
use crate::scrape::ScrapeError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedAirdrop {
    pub name: String,
    pub claim_deadline: Option<String>,
    pub requirements: Vec<String>,
    pub reward: String,
    pub status: String,
}

struct CardSelectors {
    card: Selector,
    title: Selector,
    deadline: Selector,
    requirement: Selector,
    reward: Selector,
}

impl CardSelectors {
    fn new() -> Result<Self, ScrapeError> {
        Ok(Self {
            card: selector("div.airdrop-card")?,
            title: selector("h2.airdrop-title")?,
            deadline: selector("span.deadline")?,
            requirement: selector("div.requirement")?,
            reward: selector("div.reward")?,
        })
    }
}

fn selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector(format!("{css}: {e}")))
}

/// Parse every airdrop card in `doc`, in page order.
pub fn parse_active(doc: &str) -> Result<Vec<ScrapedAirdrop>, ScrapeError> {
    let sel = CardSelectors::new()?;
    let html = Html::parse_document(doc);

    let mut out = Vec::new();
    for card in html.select(&sel.card) {
        let Some(name) = first_text(card, &sel.title).filter(|n| !n.is_empty()) else {
            logd!("Skipping airdrop card without a title");
            continue;
        };

        let claim_deadline = first_text(card, &sel.deadline)
            .as_deref()
            .and_then(normalize_deadline);

        let requirements = card
            .select(&sel.requirement)
            .map(element_text)
            .filter(|r| !r.is_empty())
            .collect();

        let reward = first_text(card, &sel.reward).unwrap_or_else(|| s!(UNKNOWN_REWARD));

        out.push(ScrapedAirdrop {
            name,
            claim_deadline,
            requirements,
            reward,
            status: s!(DEFAULT_STATUS),
        });
    }
    Ok(out)
}

/// `YYYY-MM-DD` in, `YYYY-MM-DD` out; anything else is `None`.
pub fn normalize_deadline(text: &str) -> Option<String> {
    parse_deadline(text.trim()).ok().map(canonical_date)
}

fn first_text(scope: ElementRef<'_>, sel: &Selector) -> Option<String> {
    scope.select(sel).next().map(element_text)
}

fn element_text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}
