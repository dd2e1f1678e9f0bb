// src/bin/cli.rs
use airdrop_registry::{cli, config::consts::DEFAULT_LOG_FILTER, log};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init(DEFAULT_LOG_FILTER);
    cli::run(std::env::args().skip(1)).await
}
