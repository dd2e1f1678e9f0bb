// src/http/server.rs

use std::sync::Arc;

use tokio::net::TcpListener;

use super::router;
use crate::config::options::{SeedMode, ServerOptions};
use crate::progress::LogProgress;
use crate::scrape::AirdropScraper;
use crate::store::AirdropStore;

/// Bind, serve until Ctrl-C, then drain in-flight requests.
pub async fn run(opts: ServerOptions) -> std::io::Result<()> {
    let store = Arc::new(build_store(&opts).await);

    let listener = TcpListener::bind(&opts.addr).await?;
    logf!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

pub async fn build_store(opts: &ServerOptions) -> AirdropStore {
    match opts.seed {
        SeedMode::Samples => AirdropStore::with_samples(),
        SeedMode::Empty => AirdropStore::new(),
        SeedMode::Scrape => {
            let store = AirdropStore::new();
            match AirdropScraper::new(opts.scrape.clone()) {
                Ok(scraper) => {
                    let rows = scraper.active_airdrops(Some(&mut LogProgress)).await;
                    if let Err(e) = store.import(rows) {
                        loge!("Seeding from scrape failed: {e}");
                    }
                }
                Err(e) => loge!("Scraper unavailable, starting empty: {e}"),
            }
            store
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        loge!("Could not listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    logf!("Shutting down");
}
