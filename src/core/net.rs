// src/core/net.rs
// HTTP GET for the scraper.

use reqwest::Client;

use crate::config::options::ScrapeOptions;
use crate::scrape::ScrapeError;

pub fn client(opts: &ScrapeOptions) -> Result<Client, ScrapeError> {
    Ok(Client::builder()
        .user_agent(opts.user_agent.as_str())
        .timeout(opts.timeout)
        .build()?)
}

/// GET `url` and return the body. Any non-2xx status is an error.
pub async fn http_get(client: &Client, url: &str) -> Result<String, ScrapeError> {
    logd!("GET {url}");
    let resp = client.get(url).send().await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ScrapeError::Status { status: status.as_u16(), url: s!(url) });
    }
    Ok(resp.text().await?)
}
