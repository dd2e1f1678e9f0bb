// src/progress.rs
/// Lightweight progress reporting for scrape runs.
/// Frontends (CLI, server startup) implement this to surface status.
pub trait Progress {
    /// Called once the listing is parsed, with the number of cards found.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called per airdrop listing produced.
    fn item_done(&mut self, _name: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Forwards progress to the log; used where nobody is watching a terminal.
pub struct LogProgress;
impl Progress for LogProgress {
    fn begin(&mut self, total: usize) { logd!("Found {total} listing(s)"); }
    fn log(&mut self, msg: &str) { logf!("{msg}"); }
    fn item_done(&mut self, name: &str) { logd!("Listing: {name}"); }
}
