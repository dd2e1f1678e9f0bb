// src/config/consts.rs

// Server
pub const DEFAULT_ADDR: &str = "127.0.0.1:5000";
pub const ENV_ADDR: &str = "AIRDROP_ADDR";
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";
pub const HOME_TEXT: &str = "Server is running!";

// Records
pub const DEFAULT_STATUS: &str = "Unclaimed";
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";
pub const DISPLAY_DATE_FORMAT: &str = "%d %b %Y";

// Seed rows: (name, claim_deadline)
pub const SEED_AIRDROPS: [(&str, &str); 2] = [
    ("Airdrop 1", "2025-01-30"),
    ("Airdrop 2", "2025-02-15"),
];

// Scrape
pub const SCRAPE_BASE_URL: &str = "https://airdrops.io";
pub const ENV_SCRAPE_URL: &str = "AIRDROP_SCRAPE_URL";
pub const ACTIVE_PATH: &str = "/active/";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;
pub const UNKNOWN_REWARD: &str = "Unknown";

// Claim
pub const CLAIM_BUTTON_CLASS: &str = "claim-button";
pub const SUCCESS_CLASS: &str = "success-message";
pub const CLAIM_BUTTON_WAIT_SECS: u64 = 10;
pub const CONFIRMATION_WAIT_SECS: u64 = 20;
