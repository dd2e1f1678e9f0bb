// src/bin/server.rs
use airdrop_registry::{cli, http, log};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let opts = match cli::parse_server_args(std::env::args().skip(1))? {
        cli::Command::Run(opts) => opts,
        cli::Command::Help => {
            eprintln!("{}", cli::SERVER_HELP);
            return Ok(());
        }
    };

    log::init(&opts.log_filter);
    http::server::run(opts).await?;
    Ok(())
}
