// src/claim.rs
//! Claim automation over a browser session.
//!
//! The browser itself sits behind [`SessionLauncher`] / [`BrowserSession`];
//! this crate ships no WebDriver backend. [`AirdropClaimer`] owns the flow:
//! open the page, wait for the claim button, connect the wallet, click, then
//! wait for the confirmation. Every failure is logged and reported as `false`.

use std::time::Duration;

use crate::config::consts::{CLAIM_BUTTON_CLASS, SUCCESS_CLASS};
use crate::config::options::ClaimOptions;

#[derive(Debug, thiserror::Error)]
pub enum ClaimError {
    #[error("could not start browser session: {0}")]
    Launch(String),

    #[error("navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },

    #[error("timed out after {}s waiting for .{class}", .waited.as_secs())]
    Timeout { class: String, waited: Duration },

    #[error("could not interact with .{class}: {reason}")]
    Element { class: String, reason: String },

    #[error("wallet connection failed: {0}")]
    Wallet(String),
}

/// One live browser.
pub trait BrowserSession {
    fn open(&mut self, url: &str) -> Result<(), ClaimError>;

    /// Block until an element with `class` is present, or fail with `Timeout`.
    fn wait_for_class(&mut self, class: &str, timeout: Duration) -> Result<(), ClaimError>;

    fn click_class(&mut self, class: &str) -> Result<(), ClaimError>;

    fn quit(&mut self) -> Result<(), ClaimError>;
}

/// Starts sessions on demand.
pub trait SessionLauncher {
    type Session: BrowserSession;

    fn launch(&self, opts: &ClaimOptions) -> Result<Self::Session, ClaimError>;
}

pub struct AirdropClaimer<L: SessionLauncher> {
    wallet_address: String,
    launcher: L,
    opts: ClaimOptions,
    session: Option<L::Session>,
}

impl<L: SessionLauncher> AirdropClaimer<L> {
    pub fn new(wallet_address: impl Into<String>, launcher: L) -> Self {
        Self::with_options(wallet_address, launcher, ClaimOptions::default())
    }

    pub fn with_options(wallet_address: impl Into<String>, launcher: L, opts: ClaimOptions) -> Self {
        Self { wallet_address: wallet_address.into(), launcher, opts, session: None }
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Attempt the claim at `airdrop_url`. `true` only once the success
    /// message shows up.
    pub fn claim_airdrop(&mut self, airdrop_url: &str) -> bool {
        logf!("Attempting to claim airdrop at: {airdrop_url}");
        match self.try_claim(airdrop_url) {
            Ok(()) => {
                logf!("Claimed airdrop at {airdrop_url}");
                true
            }
            Err(e) => {
                loge!("Error claiming airdrop: {e}");
                false
            }
        }
    }

    fn try_claim(&mut self, airdrop_url: &str) -> Result<(), ClaimError> {
        if self.session.is_none() {
            logd!("Launching browser session (headless: {})", self.opts.headless);
            self.session = Some(self.launcher.launch(&self.opts)?);
        }
        let button_wait = self.opts.button_wait;
        let confirmation_wait = self.opts.confirmation_wait;

        let session = self.session_mut()?;
        session.open(airdrop_url)?;
        session.wait_for_class(CLAIM_BUTTON_CLASS, button_wait)?;

        self.connect_wallet()?;

        let session = self.session_mut()?;
        session.click_class(CLAIM_BUTTON_CLASS)?;
        session.wait_for_class(SUCCESS_CLASS, confirmation_wait)
    }

    fn session_mut(&mut self) -> Result<&mut L::Session, ClaimError> {
        self.session
            .as_mut()
            .ok_or_else(|| ClaimError::Launch(s!("no active session")))
    }

    // Wallet-specific steps (extension popups, signing) have no backend yet.
    fn connect_wallet(&self) -> Result<(), ClaimError> {
        if self.wallet_address.trim().is_empty() {
            return Err(ClaimError::Wallet(s!("empty wallet address")));
        }
        logd!("No wallet connector configured; continuing as {}", self.wallet_address);
        Ok(())
    }

    /// Quit the session if one is open. Safe to call repeatedly.
    pub fn cleanup(&mut self) {
        if let Some(mut session) = self.session.take() {
            if let Err(e) = session.quit() {
                logw!("Browser session did not quit cleanly: {e}");
            }
        }
    }
}

impl<L: SessionLauncher> Drop for AirdropClaimer<L> {
    fn drop(&mut self) {
        self.cleanup();
    }
}
