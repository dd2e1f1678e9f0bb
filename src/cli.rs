// src/cli.rs
use std::time::Duration;

use color_eyre::eyre::{bail, eyre, Result};

use crate::config::options::{ScrapeOptions, SeedMode, ServerOptions};
use crate::progress::Progress;
use crate::scrape::AirdropScraper;
use crate::specs::airdrops::ScrapedAirdrop;

pub enum Command<T> {
    Run(T),
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeArgs {
    pub opts: ScrapeOptions,
    pub json: bool,
}

/// Flags for the server binary. `args` excludes the program name.
pub fn parse_server_args<I>(args: I) -> Result<Command<ServerOptions>>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = ServerOptions::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-a" | "--addr" => opts.addr = args.next().ok_or_else(|| eyre!("Missing value for --addr"))?,
            "--empty" => opts.seed = SeedMode::Empty,
            "--seed-scrape" => opts.seed = SeedMode::Scrape,
            "--scrape-url" => {
                opts.scrape.base_url = args.next().ok_or_else(|| eyre!("Missing value for --scrape-url"))?;
            }
            "--log" => opts.log_filter = args.next().ok_or_else(|| eyre!("Missing value for --log"))?,
            "-h" | "--help" => return Ok(Command::Help),
            _ => bail!("Unknown arg: {a}"),
        }
    }
    Ok(Command::Run(opts))
}

/// Flags for `cli scrape`. `args` excludes the program name and the subcommand.
pub fn parse_scrape_args<I>(args: I) -> Result<Command<ScrapeArgs>>
where
    I: IntoIterator<Item = String>,
{
    let mut out = ScrapeArgs { opts: ScrapeOptions::default(), json: false };
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-u" | "--url" => out.opts.base_url = args.next().ok_or_else(|| eyre!("Missing value for --url"))?,
            "--timeout" => {
                let v: u64 = args.next().ok_or_else(|| eyre!("Missing value for --timeout"))?.parse()?;
                if v == 0 { bail!("Timeout must be at least 1 second"); }
                out.opts.timeout = Duration::from_secs(v);
            }
            "--json" => out.json = true,
            "-h" | "--help" => return Ok(Command::Help),
            _ => bail!("Unknown arg: {a}"),
        }
    }
    Ok(Command::Run(out))
}

pub const SERVER_HELP: &str = include_str!("server_help.txt");
pub const CLI_HELP: &str = include_str!("cli_help.txt");

/// Entry point for the `cli` binary.
pub async fn run<I>(args: I) -> Result<()>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    match args.next().as_deref() {
        Some("scrape") => match parse_scrape_args(args)? {
            Command::Run(a) => scrape(a).await,
            Command::Help => {
                eprintln!("{CLI_HELP}");
                Ok(())
            }
        },
        None | Some("-h") | Some("--help") => {
            eprintln!("{CLI_HELP}");
            Ok(())
        }
        Some(other) => bail!("Unknown command: {other}"),
    }
}

async fn scrape(args: ScrapeArgs) -> Result<()> {
    let scraper = AirdropScraper::new(args.opts)?;
    let rows = scraper.active_airdrops(Some(&mut ConsoleProgress::default())).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", render_listing(&rows));
    }
    Ok(())
}

/// Human-readable block per airdrop.
pub fn render_listing(rows: &[ScrapedAirdrop]) -> String {
    if rows.is_empty() {
        return s!("No airdrops found.\n");
    }
    let mut out = s!("Found airdrops:\n");
    for a in rows {
        out.push_str(&format!("\nName: {}\n", a.name));
        out.push_str(&format!("Deadline: {}\n", a.claim_deadline.as_deref().unwrap_or("-")));
        out.push_str(&format!("Requirements: {}\n", a.requirements.join("; ")));
        out.push_str(&format!("Reward: {}\n", a.reward));
        out.push_str(&format!("Status: {}\n", a.status));
    }
    out
}

/// Progress on stderr so stdout stays clean for `--json`.
#[derive(Default)]
struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn log(&mut self, msg: &str) { eprintln!("{msg}"); }
    fn item_done(&mut self, name: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {}", self.done, self.total, name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s!(*s)).collect()
    }

    #[test]
    fn server_flags() {
        let Command::Run(o) = parse_server_args(args(&["--addr", "0.0.0.0:8080", "--empty"])).unwrap() else {
            panic!("expected run");
        };
        assert_eq!(o.addr, "0.0.0.0:8080");
        assert_eq!(o.seed, SeedMode::Empty);
    }

    #[test]
    fn server_rejects_unknown_and_dangling() {
        assert!(parse_server_args(args(&["--bogus"])).is_err());
        assert!(parse_server_args(args(&["--addr"])).is_err());
    }

    #[test]
    fn scrape_flags() {
        let Command::Run(a) = parse_scrape_args(args(&["--url", "http://localhost:9", "--json", "--timeout", "3"])).unwrap() else {
            panic!("expected run");
        };
        assert!(a.json);
        assert_eq!(a.opts.base_url, "http://localhost:9");
        assert_eq!(a.opts.timeout, Duration::from_secs(3));
        assert!(matches!(parse_scrape_args(args(&["-h"])).unwrap(), Command::Help));
        assert!(parse_scrape_args(args(&["--timeout", "0"])).is_err());
    }

    #[test]
    fn listing_render() {
        assert_eq!(render_listing(&[]), "No airdrops found.\n");
        let rows = vec![ScrapedAirdrop {
            name: s!("Alpha"),
            claim_deadline: None,
            requirements: vec![s!("Hold"), s!("Follow")],
            reward: s!("Unknown"),
            status: s!("Unclaimed"),
        }];
        let out = render_listing(&rows);
        assert!(out.contains("Name: Alpha"));
        assert!(out.contains("Deadline: -"));
        assert!(out.contains("Requirements: Hold; Follow"));
    }
}
